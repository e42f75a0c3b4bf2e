//! Artwork Resolver Port - 封面图片 URL

use async_trait::async_trait;

/// Artwork Resolver Port
///
/// 返回外部可访问的图片 URL，无法解析时返回空字符串
#[async_trait]
pub trait ArtworkResolverPort: Send + Sync {
    async fn image_url(&self, username: &str, track_id: &str) -> String;
}
