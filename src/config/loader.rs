//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, CacheBackend, TransportKind};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TUNECORD_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TUNECORD_SERVER__PORT=8080`
/// - `TUNECORD_CACHE__BACKEND=sled`
/// - `TUNECORD_TRANSPORT__RELAY_URL=http://gateway:6464`
/// - `TUNECORD_PLUGIN__VALUES__CLIENTID=1234567890`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 4534)?
        .set_default("listenbrainz.base_url", "https://labs.api.listenbrainz.org")?
        .set_default("listenbrainz.timeout_secs", 10)?
        .set_default("cache.backend", "memory")?
        .set_default("cache.sled_path", "data/url_cache.sled")?
        .set_default("cache.sweep_interval_secs", 3600)?
        .set_default("transport.kind", "relay")?
        .set_default("transport.relay_url", "http://127.0.0.1:6464")?
        .set_default("transport.timeout_secs", 5)?
        .set_default("artwork.url_template", "")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: TUNECORD_TRANSPORT__KIND=log
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("TUNECORD")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.listenbrainz.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "ListenBrainz base URL cannot be empty".to_string(),
        ));
    }

    if config.listenbrainz.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "ListenBrainz timeout cannot be 0".to_string(),
        ));
    }

    if config.cache.backend == CacheBackend::Sled && config.cache.sled_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Sled cache path cannot be empty when the sled backend is selected".to_string(),
        ));
    }

    if config.cache.sweep_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Cache sweep interval cannot be 0".to_string(),
        ));
    }

    if config.transport.kind == TransportKind::Relay {
        if config.transport.relay_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "Relay URL cannot be empty when the relay transport is selected".to_string(),
            ));
        }
        if config.transport.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "Relay timeout cannot be 0".to_string(),
            ));
        }
    }

    if let Some(path) = &config.plugin.config_file {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Plugin config file path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("ListenBrainz: {}", config.listenbrainz.base_url);
    tracing::info!("Lookup Timeout: {}s", config.listenbrainz.timeout_secs);
    match config.cache.backend {
        CacheBackend::Memory => tracing::info!("URL Cache: memory"),
        CacheBackend::Sled => tracing::info!("URL Cache: sled ({})", config.cache.sled_path),
    }
    tracing::info!("Cache Sweep Interval: {}s", config.cache.sweep_interval_secs);
    match config.transport.kind {
        TransportKind::Relay => tracing::info!("Transport: relay ({})", config.transport.relay_url),
        TransportKind::Log => tracing::info!("Transport: log only"),
    }
    if config.artwork.url_template.is_empty() {
        tracing::info!("Artwork: disabled");
    } else {
        tracing::info!("Artwork: {}", config.artwork.url_template);
    }
    match &config.plugin.config_file {
        Some(path) => tracing::info!("Plugin Settings: file {:?}", path),
        None => tracing::info!("Plugin Settings: {} inline keys", config.plugin.values.len()),
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
