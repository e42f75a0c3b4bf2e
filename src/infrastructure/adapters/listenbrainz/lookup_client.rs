//! ListenBrainz Labs Client - recording → Spotify track ID
//!
//! 实现 SpotifyLookupPort trait
//!
//! 外部 API:
//! POST {base_url}/spotify-id-from-mbid/json
//! Request: [{"recording_mbid": "..."}]
//! POST {base_url}/spotify-id-from-metadata/json
//! Request: [{"artist_name": "...", "track_name": "...", "release_name": "..."}]
//! Response: [{"spotify_track_ids": ["..."]}, ...]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::ports::{HttpClientPort, HttpRequest, SpotifyLookupPort};

#[derive(Debug, Serialize)]
struct RecordingLookup<'a> {
    recording_mbid: &'a str,
}

#[derive(Debug, Serialize)]
struct MetadataLookup<'a> {
    artist_name: &'a str,
    track_name: &'a str,
    release_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    #[serde(default)]
    spotify_track_ids: Vec<String>,
}

/// 提取第一个非空 Spotify track ID
///
/// 空数组、无法解析的响应、全部为空的 ID 都返回 None
pub fn parse_spotify_id(body: &[u8]) -> Option<String> {
    let results: Vec<LookupResult> = serde_json::from_slice(body).ok()?;
    results
        .into_iter()
        .flat_map(|r| r.spotify_track_ids)
        .find(|id| !id.is_empty())
}

/// ListenBrainz 客户端配置
#[derive(Debug, Clone)]
pub struct ListenBrainzConfig {
    pub base_url: String,
}

impl Default for ListenBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: "https://labs.api.listenbrainz.org".to_string(),
        }
    }
}

/// ListenBrainz Labs 客户端
pub struct ListenBrainzClient {
    http: Arc<dyn HttpClientPort>,
    config: ListenBrainzConfig,
}

impl ListenBrainzClient {
    pub fn new(http: Arc<dyn HttpClientPort>, config: ListenBrainzConfig) -> Self {
        Self { http, config }
    }

    fn mbid_url(&self) -> String {
        format!("{}/spotify-id-from-mbid/json", self.config.base_url.trim_end_matches('/'))
    }

    fn metadata_url(&self) -> String {
        format!(
            "{}/spotify-id-from-metadata/json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// 发送查找请求；网络错误与非 2xx 一样按未命中处理
    async fn lookup<T: Serialize + ?Sized>(&self, url: String, body: &T) -> Option<String> {
        let body = match serde_json::to_vec(body) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to encode ListenBrainz request");
                return None;
            }
        };

        let response = match self.http.post(HttpRequest::post_json(url.clone(), body)).await {
            Ok(response) => response,
            Err(e) => {
                tracing::info!(url = %url, error = %e, "ListenBrainz lookup failed");
                return None;
            }
        };

        if !response.is_success() {
            tracing::info!(
                url = %url,
                status = response.status,
                body = %response.body_text(),
                "ListenBrainz lookup failed"
            );
            return None;
        }

        let id = parse_spotify_id(&response.body);
        if id.is_none() {
            tracing::info!(url = %url, body = %response.body_text(), "ListenBrainz returned no spotify_track_id");
        }
        id
    }
}

#[async_trait]
impl SpotifyLookupPort for ListenBrainzClient {
    async fn lookup_by_recording_id(&self, mbid: &str) -> Option<String> {
        self.lookup(
            self.mbid_url(),
            &[RecordingLookup {
                recording_mbid: mbid,
            }],
        )
        .await
    }

    async fn lookup_by_metadata(&self, artist: &str, title: &str, album: &str) -> Option<String> {
        tracing::debug!(artist = %artist, title = %title, album = %album, "ListenBrainz metadata lookup");
        self.lookup(
            self.metadata_url(),
            &[MetadataLookup {
                artist_name: artist,
                track_name: title,
                release_name: album,
            }],
        )
        .await
    }
}
