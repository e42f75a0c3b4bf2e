//! Tunecord - Navidrome → Discord Rich Presence
//!
//! 组装端口实现并启动 HTTP 服务

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use tunecord::application::ports::{
    ConfigSourcePort, HttpClientPort, PresenceTransportPort, UrlCachePort,
};
use tunecord::application::{CallbackRouter, PresenceOrchestrator, SpotifyUrlResolver};
use tunecord::config::{
    load_config, print_config, AppConfig, CacheBackend, LogConfig, TransportKind,
};
use tunecord::infrastructure::adapters::{
    HttpPresenceRelay, ListenBrainzClient, ListenBrainzConfig, LoggingPresenceTransport,
    PresenceRelayConfig, ReqwestHttpClient, ReqwestHttpClientConfig, StaticConfigSource,
    TemplateArtworkResolver, TomlFileConfigSource,
};
use tunecord::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tunecord::infrastructure::persistence::{SledCacheConfig, SledUrlCache};
use tunecord::infrastructure::{
    CacheSweeper, CacheSweeperConfig, CallbackWorker, CallbackWorkerConfig,
    InMemorySessionRegistry, InMemoryUrlCache, TokioScheduler,
};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},tunecord={},tower_http=debug", log.level, log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_config_source(config: &AppConfig) -> Arc<dyn ConfigSourcePort> {
    match &config.plugin.config_file {
        Some(path) => Arc::new(TomlFileConfigSource::new(path)),
        None => Arc::new(StaticConfigSource::new(config.plugin.values.clone())),
    }
}

fn build_url_cache(config: &AppConfig) -> anyhow::Result<Arc<dyn UrlCachePort>> {
    let cache: Arc<dyn UrlCachePort> = match config.cache.backend {
        CacheBackend::Memory => Arc::new(InMemoryUrlCache::new()),
        CacheBackend::Sled => {
            if let Some(parent) = std::path::Path::new(&config.cache.sled_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            let sled_config = SledCacheConfig {
                db_path: config.cache.sled_path.clone(),
            };
            Arc::new(SledUrlCache::new(&sled_config)?)
        }
    };
    Ok(cache)
}

fn build_transport(config: &AppConfig) -> anyhow::Result<Arc<dyn PresenceTransportPort>> {
    let transport: Arc<dyn PresenceTransportPort> = match config.transport.kind {
        TransportKind::Relay => {
            let http = ReqwestHttpClient::new(
                ReqwestHttpClientConfig::default().with_timeout(config.transport.timeout_secs),
            )?;
            Arc::new(HttpPresenceRelay::new(
                Arc::new(http),
                PresenceRelayConfig {
                    relay_url: config.transport.relay_url.clone(),
                },
            ))
        }
        TransportKind::Log => Arc::new(LoggingPresenceTransport::new()),
    };
    Ok(transport)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Tunecord - Navidrome Discord Rich Presence");
    print_config(&config);

    let config_source = build_config_source(&config);
    let url_cache = build_url_cache(&config)?;
    let transport = build_transport(&config)?;

    // ListenBrainz 查找
    let lookup_http: Arc<dyn HttpClientPort> = Arc::new(ReqwestHttpClient::new(
        ReqwestHttpClientConfig::default().with_timeout(config.listenbrainz.timeout_secs),
    )?);
    let lookup = Arc::new(ListenBrainzClient::new(
        lookup_http,
        ListenBrainzConfig {
            base_url: config.listenbrainz.base_url.clone(),
        },
    ));
    // 定期清理过期缓存
    let sweeper = CacheSweeper::new(
        CacheSweeperConfig {
            interval_secs: config.cache.sweep_interval_secs,
        },
        url_cache.clone(),
    );
    tokio::spawn(sweeper.run());

    let resolver = Arc::new(SpotifyUrlResolver::new(url_cache, lookup));

    let artwork = Arc::new(TemplateArtworkResolver::new(
        config.artwork.url_template.clone(),
    ));

    // 调度回调队列
    let (callback_tx, callback_rx) = mpsc::channel(1000);
    let scheduler = TokioScheduler::new(callback_tx).arc();
    let sessions = InMemorySessionRegistry::new().arc();

    let orchestrator = Arc::new(PresenceOrchestrator::new(
        config_source,
        sessions.clone(),
        transport.clone(),
        scheduler,
        artwork,
        resolver.clone(),
    ));
    let callbacks = Arc::new(CallbackRouter::new(transport, sessions));

    let worker = CallbackWorker::new(
        CallbackWorkerConfig::default(),
        callback_rx,
        callbacks.clone(),
    );
    tokio::spawn(worker.run());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(orchestrator.clone(), callbacks, orchestrator, resolver);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
