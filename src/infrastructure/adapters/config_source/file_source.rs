//! TOML File Config Source
//!
//! 每次 `get` 都重新读取文件，修改用户或 token 后无需重启。
//! `users` 可以写成 TOML 数组，也可以直接写 JSON 字符串
//!
//! ```toml
//! clientid = "1234567890"
//! activityname = "Track"
//!
//! [[users]]
//! username = "alice"
//! token = "..."
//! ```

use std::path::{Path, PathBuf};

use crate::application::ports::{ConfigSourceError, ConfigSourcePort};

pub struct TomlFileConfigSource {
    path: PathBuf,
}

impl TomlFileConfigSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_table(&self) -> Result<toml::Table, ConfigSourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ConfigSourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        content.parse::<toml::Table>().map_err(|e| {
            ConfigSourceError::ParseError(format!("{}: {}", self.path.display(), e))
        })
    }
}

/// 标量按字符串返回，数组/表转为 JSON
fn value_to_string(value: toml::Value) -> Result<String, ConfigSourceError> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        other => serde_json::to_string(&other).map_err(|e| ConfigSourceError::ParseError(e.to_string())),
    }
}

impl ConfigSourcePort for TomlFileConfigSource {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigSourceError> {
        let mut table = self.read_table()?;
        table.remove(key).map(value_to_string).transpose()
    }
}
