pub mod resolver;
pub mod search;

pub use resolver::{HttpMediaResolver, LimitedResolver, MediaResolver};
pub use search::{HttpSearchProvider, SearchProvider, SearchSettings};
