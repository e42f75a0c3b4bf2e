//! Plugin Settings - 从配置来源读取的运行时设置
//!
//! 每次调用都会重新读取，用户/token 的修改无需重启即可生效

use std::collections::HashMap;

use serde::Deserialize;

use crate::application::ports::{ConfigSourceError, ConfigSourcePort};
use crate::domain::ActivityNameMode;

pub const CLIENT_ID_KEY: &str = "clientid";
pub const USERS_KEY: &str = "users";
pub const ACTIVITY_NAME_KEY: &str = "activityname";
pub const NAV_LOGO_OVERLAY_KEY: &str = "navlogooverlay";

#[derive(Debug, Deserialize)]
struct UserToken {
    #[serde(default)]
    username: String,
    #[serde(default)]
    token: String,
}

/// 插件设置快照
#[derive(Debug, Clone, Default)]
pub struct PluginSettings {
    pub client_id: String,
    pub users: HashMap<String, String>,
    pub activity_name: ActivityNameMode,
    pub show_logo_overlay: bool,
}

impl PluginSettings {
    /// 加载设置
    ///
    /// 只有配置来源本身不可用才返回错误；缺少 client id、`users` 格式错误等
    /// 记录日志后视为没有配置任何用户
    pub fn load(source: &dyn ConfigSourcePort) -> Result<Self, ConfigSourceError> {
        let activity_name = ActivityNameMode::from_option(source.get(ACTIVITY_NAME_KEY)?.as_deref());
        let show_logo_overlay = source.get(NAV_LOGO_OVERLAY_KEY)?.as_deref() != Some("false");

        let mut settings = Self {
            client_id: String::new(),
            users: HashMap::new(),
            activity_name,
            show_logo_overlay,
        };

        let client_id = source.get(CLIENT_ID_KEY)?.unwrap_or_default();
        if client_id.is_empty() {
            tracing::warn!("Missing client id in configuration");
            return Ok(settings);
        }
        settings.client_id = client_id;

        let users_json = source.get(USERS_KEY)?.unwrap_or_default();
        if users_json.is_empty() {
            tracing::warn!("No users configured");
            return Ok(settings);
        }

        let entries: Vec<UserToken> = match serde_json::from_str(&users_json) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse users configuration");
                return Ok(settings);
            }
        };

        settings.users = entries
            .into_iter()
            .filter(|u| !u.username.is_empty() && !u.token.is_empty())
            .map(|u| (u.username, u.token))
            .collect();

        if settings.users.is_empty() {
            tracing::warn!("No valid users configured");
        }

        Ok(settings)
    }

    pub fn token_for(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    pub fn is_authorized(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }
}
