pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::FolioConfig;
pub use error::{FolioError, Result};
pub use events::SessionEvent;
pub use types::*;
