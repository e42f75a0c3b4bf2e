//! 测试用端口实现
//!
//! 记录所有调用，可按需注入失败

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::*;
use crate::domain::ActivityPayload;

// ============================================================================
// Config Source
// ============================================================================

#[derive(Default)]
pub struct FakeConfigSource {
    values: HashMap<String, String>,
    pub fail: bool,
}

impl FakeConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// clientid + 单个用户
    pub fn with_user(username: &str, token: &str) -> Self {
        Self::new().with("clientid", "1234567890").with(
            "users",
            &format!(r#"[{{"username":"{}","token":"{}"}}]"#, username, token),
        )
    }
}

impl ConfigSourcePort for FakeConfigSource {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigSourceError> {
        if self.fail {
            return Err(ConfigSourceError::Unavailable("fake failure".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }
}

// ============================================================================
// URL Cache
// ============================================================================

#[derive(Default)]
pub struct RecordingCache {
    pub entries: Mutex<HashMap<String, String>>,
    pub writes: Mutex<Vec<(String, String, i64)>>,
    pub reads: Mutex<Vec<String>>,
    pub fail_get: bool,
    pub fail_set: bool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn writes(&self) -> Vec<(String, String, i64)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlCachePort for RecordingCache {
    async fn get_string(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.reads.lock().unwrap().push(key.to_string());
        if self.fail_get {
            return Err(CacheError::Unavailable("fake failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string(), ttl_secs));
        if self.fail_set {
            return Err(CacheError::Unavailable("fake failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, CacheError> {
        Ok(0)
    }
}

// ============================================================================
// Scheduler
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerCall {
    Schedule {
        delay_secs: i64,
        payload: String,
        schedule_id: String,
    },
    Cancel {
        schedule_id: String,
    },
}

#[derive(Default)]
pub struct RecordingScheduler {
    pub calls: Mutex<Vec<SchedulerCall>>,
    pub fail_schedule: bool,
    pub fail_cancel: bool,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SchedulerCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchedulerPort for RecordingScheduler {
    async fn schedule_one_time(
        &self,
        delay_secs: i64,
        payload: &str,
        schedule_id: &str,
    ) -> Result<String, SchedulerError> {
        self.calls.lock().unwrap().push(SchedulerCall::Schedule {
            delay_secs,
            payload: payload.to_string(),
            schedule_id: schedule_id.to_string(),
        });
        if self.fail_schedule {
            return Err(SchedulerError::Unavailable("fake failure".to_string()));
        }
        Ok(format!("handle-{}", schedule_id))
    }

    async fn cancel_schedule(&self, schedule_id: &str) -> Result<(), SchedulerError> {
        self.calls.lock().unwrap().push(SchedulerCall::Cancel {
            schedule_id: schedule_id.to_string(),
        });
        if self.fail_cancel {
            return Err(SchedulerError::NotFound(schedule_id.to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// 按 URL 返回预设响应；未设置的 URL 返回 404
#[derive(Default)]
pub struct ScriptedHttpClient {
    pub responses: Mutex<HashMap<String, HttpResponse>>,
    pub requests: Mutex<Vec<HttpRequest>>,
    pub fail_network: bool,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), HttpResponse::new(status, body.as_bytes()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClientPort for ScriptedHttpClient {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        if self.fail_network {
            return Err(HttpClientError::NetworkError("connection refused".to_string()));
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "[]")))
    }
}

// ============================================================================
// Presence Transport
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    Connect { username: String, token: String },
    SendActivity { client_id: String, username: String, activity: ActivityPayload },
    Heartbeat { username: String },
    Clear { username: String },
}

#[derive(Default)]
pub struct FakeTransport {
    pub calls: Mutex<Vec<TransportCall>>,
    pub fail_connect: bool,
    pub fail_send: bool,
    pub fail_heartbeat: bool,
    pub fail_clear: bool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_activity(&self) -> Option<ActivityPayload> {
        self.calls().into_iter().rev().find_map(|call| match call {
            TransportCall::SendActivity { activity, .. } => Some(activity),
            _ => None,
        })
    }
}

#[async_trait]
impl PresenceTransportPort for FakeTransport {
    async fn connect(&self, username: &str, token: &str) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(TransportCall::Connect {
            username: username.to_string(),
            token: token.to_string(),
        });
        if self.fail_connect {
            return Err(TransportError::ConnectFailed("gateway down".to_string()));
        }
        Ok(())
    }

    async fn send_activity(
        &self,
        client_id: &str,
        username: &str,
        _token: &str,
        activity: &ActivityPayload,
    ) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(TransportCall::SendActivity {
            client_id: client_id.to_string(),
            username: username.to_string(),
            activity: activity.clone(),
        });
        if self.fail_send {
            return Err(TransportError::Rejected("rate limited".to_string()));
        }
        Ok(())
    }

    async fn heartbeat(&self, username: &str) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(TransportCall::Heartbeat {
            username: username.to_string(),
        });
        if self.fail_heartbeat {
            return Err(TransportError::NotConnected(username.to_string()));
        }
        Ok(())
    }

    async fn clear_activity(&self, username: &str) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(TransportCall::Clear {
            username: username.to_string(),
        });
        if self.fail_clear {
            return Err(TransportError::NotConnected(username.to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Artwork
// ============================================================================

pub struct FakeArtwork;

#[async_trait]
impl ArtworkResolverPort for FakeArtwork {
    async fn image_url(&self, username: &str, track_id: &str) -> String {
        format!("https://art.example/{}/{}", username, track_id)
    }
}

// ============================================================================
// Spotify Lookup
// ============================================================================

/// 预设查找结果，记录每次调用
#[derive(Default)]
pub struct ScriptedLookup {
    pub by_recording_id: Option<String>,
    pub by_metadata: Option<String>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpotifyLookupPort for ScriptedLookup {
    async fn lookup_by_recording_id(&self, mbid: &str) -> Option<String> {
        self.calls.lock().unwrap().push(format!("mbid:{}", mbid));
        self.by_recording_id.clone()
    }

    async fn lookup_by_metadata(&self, artist: &str, title: &str, album: &str) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("metadata:{}|{}|{}", artist, title, album));
        self.by_metadata.clone()
    }
}
