use serde::{Deserialize, Deserializer};

/// `null` reads the same as an empty list, and a `null` element becomes
/// `T::default()` so the list keeps its length.
pub(crate) fn null_elements_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	let elements = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(elements.into_iter().map(Option::unwrap_or_default).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Deserialize)]
	struct Holder {
		#[serde(default, deserialize_with = "null_elements_as_default")]
		counts: Vec<u32>,
	}

	#[test]
	fn null_and_missing_lists_are_empty() {
		let h: Holder = serde_json::from_str(r#"{"counts": null}"#).unwrap();
		assert!(h.counts.is_empty());
		let h: Holder = serde_json::from_str("{}").unwrap();
		assert!(h.counts.is_empty());
	}

	#[test]
	fn null_elements_keep_their_slot() {
		let h: Holder = serde_json::from_str(r#"{"counts": [1, null, 3]}"#).unwrap();
		assert_eq!(h.counts, [1, 0, 3]);
	}
}
