mod content_provider;
mod manager;
mod validate;

pub use content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use manager::ConfigManager;
pub use validate::Validate;
