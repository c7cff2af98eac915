// System Intel Library
// Fetches a game-world system record and projects it onto the system page

pub mod models;
pub mod client;
pub mod format;
pub mod view;
pub mod page;
pub mod search;
pub mod config;
pub mod verbosity;

// Re-export commonly used types
pub use models::system::{SystemRecord, Station, Resources, Kills, TopKill};
pub use client::{SystemIntelClient, SystemSource, FetchError};
pub use view::{Document, PageDocument, FieldUpdate};
pub use page::{PageController, PageState, ViewError};
pub use search::SearchRedirector;
pub use config::{SystemIntelConfig, OutputFormat};

// Constants
pub const API_BASE_URL: &str = "https://esf-syk8.onrender.com";
pub const SYSTEM_PAGE: &str = "system.html";
pub const SYSTEM_NAME_PARAM: &str = "system_name";

/// Bounded fetch default when the caller does not pick a timeout
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
/// Timeout the system page uses for its single request
pub const VIEWER_FETCH_TIMEOUT_MS: u64 = 40_000;
