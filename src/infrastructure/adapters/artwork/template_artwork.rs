//! Template Artwork Resolver
//!
//! 按模板拼接封面 URL，支持 `{username}` 与 `{track_id}` 占位符（值会做 URL 编码）

use async_trait::async_trait;

use crate::application::ports::ArtworkResolverPort;

pub struct TemplateArtworkResolver {
    template: String,
}

impl TemplateArtworkResolver {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

#[async_trait]
impl ArtworkResolverPort for TemplateArtworkResolver {
    async fn image_url(&self, username: &str, track_id: &str) -> String {
        if self.template.is_empty() || track_id.is_empty() {
            return String::new();
        }

        self.template
            .replace("{username}", &urlencoding::encode(username))
            .replace("{track_id}", &urlencoding::encode(track_id))
    }
}
