mod settings;

pub use settings::{
    DatabaseConfig, LayoutConfig, OtelConfig, RenderConfig, ServerConfig, Settings, StorageConfig,
};
