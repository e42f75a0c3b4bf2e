//! Static Config Source

use std::collections::HashMap;

use crate::application::ports::{ConfigSourceError, ConfigSourcePort};

/// 固定键值配置
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    values: HashMap<String, String>,
}

impl StaticConfigSource {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl ConfigSourcePort for StaticConfigSource {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigSourceError> {
        Ok(self.values.get(key).cloned())
    }
}
