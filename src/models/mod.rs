mod de;
mod episode;
mod page;
mod token;

pub use episode::{Episode, ExternalUrls, Image};
pub use page::{EpisodeContainer, Page, Show};
pub use token::TokenResponse;
