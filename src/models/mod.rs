mod envelope;
mod format;
mod media;
mod search;

pub use envelope::{Envelope, Enveloped, ENVELOPE};
pub use format::{FormatCatalog, DEFAULT_FORMAT};
pub use media::{MediaResult, Resolution};
pub use search::{ScrapedLink, SearchResult, SearchResults};
