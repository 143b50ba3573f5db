pub mod http;
pub mod memory;

pub use http::HttpFeedSource;
pub use memory::MemoryFeedSource;
