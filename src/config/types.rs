//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// ListenBrainz Labs 查找服务
    #[serde(default)]
    pub listenbrainz: ListenBrainzSettings,

    /// URL 缓存
    #[serde(default)]
    pub cache: CacheConfig,

    /// Presence 传输
    #[serde(default)]
    pub transport: TransportConfig,

    /// 封面图
    #[serde(default)]
    pub artwork: ArtworkConfig,

    /// 插件键值设置
    #[serde(default)]
    pub plugin: PluginConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4534
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// ListenBrainz Labs 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ListenBrainzSettings {
    #[serde(default = "default_listenbrainz_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

fn default_listenbrainz_url() -> String {
    "https://labs.api.listenbrainz.org".to_string()
}

fn default_lookup_timeout() -> u64 {
    10
}

impl Default for ListenBrainzSettings {
    fn default() -> Self {
        Self {
            base_url: default_listenbrainz_url(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

/// 缓存后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Memory,
    Sled,
}

/// URL 缓存配置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    /// sled 数据目录，仅 backend = "sled" 时使用
    #[serde(default = "default_sled_path")]
    pub sled_path: String,

    /// 过期条目清理间隔（秒）
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_sled_path() -> String {
    "data/url_cache.sled".to_string()
}

fn default_sweep_interval() -> u64 {
    3600 // 1 小时
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            sled_path: default_sled_path(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// Presence 传输类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// 转发到外部网关
    #[default]
    Relay,
    /// 只记录日志
    Log,
}

/// Presence 传输配置
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
    #[serde(default)]
    pub kind: TransportKind,

    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_relay_timeout")]
    pub timeout_secs: u64,
}

fn default_relay_url() -> String {
    "http://127.0.0.1:6464".to_string()
}

fn default_relay_timeout() -> u64 {
    5
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: TransportKind::default(),
            relay_url: default_relay_url(),
            timeout_secs: default_relay_timeout(),
        }
    }
}

/// 封面图配置
///
/// 模板支持 `{username}` 与 `{track_id}` 占位符，为空表示不提供封面
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkConfig {
    #[serde(default)]
    pub url_template: String,
}

/// 插件设置来源
///
/// 设置了 `config_file` 时每次读取都从该 TOML 文件加载，否则使用 `values`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub config_file: Option<PathBuf>,

    #[serde(default)]
    pub values: HashMap<String, String>,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
