use thiserror::Error;

/// Contract violations caught while building a carousel from external data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("item {order}: `new_tab` requires a `link`")]
    NewTabWithoutLink { order: i64 },

    #[error("item {order}: unrecognised background color `{value}`")]
    InvalidColor { order: i64, value: String },

    #[error("duplicate item order {order}")]
    DuplicateOrder { order: i64 },

    #[error("`width` and `height` must be given together")]
    PartialSize,

    #[error("size must be positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
}
