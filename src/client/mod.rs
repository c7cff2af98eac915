// Client module - System intel API client
pub mod api;
pub mod error;
pub mod source;

pub use api::SystemIntelClient;
pub use error::FetchError;
pub use source::SystemSource;
