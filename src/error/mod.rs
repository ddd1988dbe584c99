pub mod sync_error;

pub use sync_error::SyncError;

pub type Result<T, E = SyncError> = std::result::Result<T, E>;
