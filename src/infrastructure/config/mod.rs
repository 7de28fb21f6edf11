mod settings;

pub use settings::{environment, DatabaseConfig, OtelConfig, ServerConfig, Settings, StorageConfig};
