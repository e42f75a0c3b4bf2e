//! Config Source Adapters - 插件键值配置
//!
//! - static: 启动时从主配置读入的键值表
//! - file: 每次访问重新读取的 TOML 文件

mod file_source;
mod static_source;

pub use file_source::TomlFileConfigSource;
pub use static_source::StaticConfigSource;
