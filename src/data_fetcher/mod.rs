pub mod api;
pub mod cache;

pub use api::{PageFetcher, PageSource};
pub use cache::PageCache;
