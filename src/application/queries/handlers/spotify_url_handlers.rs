//! Spotify URL Handlers - 缓存 + 外部查找 + 搜索回退

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SpotifyLookupPort, UrlCachePort};
use crate::application::queries::{ResolveSpotifyUrlQuery, ResolveSpotifyUrlResponse};
use crate::domain::{derive_cache_key, parse_primary_artist, ResolvedUrl, TrackInfo};

/// Spotify URL 解析器
///
/// 顺序: 缓存 → recording ID 查找 → 元数据查找 → 搜索链接。
/// 永不失败，缓存不可用时照常解析
pub struct SpotifyUrlResolver {
    cache: Arc<dyn UrlCachePort>,
    lookup: Arc<dyn SpotifyLookupPort>,
}

impl SpotifyUrlResolver {
    pub fn new(cache: Arc<dyn UrlCachePort>, lookup: Arc<dyn SpotifyLookupPort>) -> Self {
        Self { cache, lookup }
    }

    pub async fn handle(
        &self,
        query: ResolveSpotifyUrlQuery,
    ) -> Result<ResolveSpotifyUrlResponse, ApplicationError> {
        let resolved = self.resolve(&query.track).await;
        Ok(ResolveSpotifyUrlResponse {
            kind: resolved.kind(),
            url: resolved.into_string(),
        })
    }

    pub async fn resolve(&self, track: &TrackInfo) -> ResolvedUrl {
        let (primary, _) = parse_primary_artist(&track.artist);
        let primary = match primary {
            "" => track.first_artist_name().unwrap_or(""),
            p => p,
        };

        let cache_key = derive_cache_key(primary, &track.title, &track.album);

        match self.cache.get_string(&cache_key).await {
            Ok(Some(cached)) => {
                tracing::debug!(cache_key = %cache_key, url = %cached, "Spotify URL cache hit");
                return ResolvedUrl::from_cached(cached);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(cache_key = %cache_key, error = %e, "Spotify URL cache read failed");
            }
        }

        if let Some(mbid) = track.recording_id() {
            if let Some(id) = self.lookup.lookup_by_recording_id(mbid).await {
                let resolved = ResolvedUrl::direct(&id);
                tracing::info!(
                    track = %track.title,
                    mbid = %mbid,
                    url = %resolved,
                    "Resolved Spotify URL by recording ID"
                );
                self.store(&cache_key, &resolved).await;
                return resolved;
            }
        }

        if !primary.is_empty() && !track.title.is_empty() {
            if let Some(id) = self
                .lookup
                .lookup_by_metadata(primary, &track.title, &track.album)
                .await
            {
                let resolved = ResolvedUrl::direct(&id);
                tracing::info!(
                    track = %track.title,
                    artist = %primary,
                    url = %resolved,
                    "Resolved Spotify URL by metadata"
                );
                self.store(&cache_key, &resolved).await;
                return resolved;
            }
        }

        let resolved = ResolvedUrl::search(&track.title, &track.artist);
        tracing::info!(
            track = %track.title,
            artist = %track.artist,
            url = %resolved,
            "Falling back to Spotify search URL"
        );
        self.store(&cache_key, &resolved).await;
        resolved
    }

    async fn store(&self, cache_key: &str, resolved: &ResolvedUrl) {
        if let Err(e) = self
            .cache
            .set_string(cache_key, resolved.as_str(), resolved.cache_ttl_secs())
            .await
        {
            tracing::warn!(cache_key = %cache_key, error = %e, "Failed to cache Spotify URL");
        }
    }
}
