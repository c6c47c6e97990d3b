//! HTTP surface: routes, middleware and server lifecycle

mod client_ip;
mod cors;
mod error;
mod generate;
mod health;
mod origin;
mod payload;
mod rate_limit;
mod state;
mod voices;


use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use cadence_config::Config;
use cadence_guard::RateLimiters;
use cadence_voices::UploadStore;
use tokio_util::sync::CancellationToken;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

pub use error::ApiError;
pub use state::AppState;

/// Headroom above the upload limit for multipart boundaries and headers
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// How often idle client entries are dropped from the limiters
const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// Upload retention policy, active only when configured
#[derive(Debug, Clone, Copy)]
struct Retention {
    max_age: Duration,
    interval: Duration,
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    limiters: Option<RateLimiters>,
    uploads: UploadStore,
    retention: Option<Retention>,
}

impl Server {
    /// Build the server from configuration with the real upstream clients
    ///
    /// # Errors
    ///
    /// Returns an error if an upstream client, the rate limiters or the
    /// upload directory cannot be set up
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let state = AppState::from_config(config)?;
        Self::with_state(config, state).await
    }

    /// Build the server around prepared state
    ///
    /// # Errors
    ///
    /// Returns an error if the rate limiters or the upload directory cannot
    /// be set up
    pub async fn with_state(config: &Config, state: AppState) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3001)));

        state
            .uploads
            .ensure_dir()
            .await
            .map_err(|e| anyhow::anyhow!("failed to create upload directory: {e}"))?;

        let limiters = if config.server.rate_limit.enabled {
            Some(RateLimiters::from_config(&config.server.rate_limit)?)
        } else {
            tracing::warn!("rate limiting disabled");
            None
        };

        let retention = match config.voices.retention {
            Some(ref retention) => Some(Retention {
                max_age: cadence_config::parse_duration("voices.retention", retention)?,
                interval: cadence_config::parse_duration("voices.sweep_interval", &config.voices.sweep_interval)?,
            }),
            None => None,
        };

        let uploads = state.uploads.clone();
        let router = build_router(config, state, limiters.as_ref());

        Ok(Self {
            router,
            listen_address,
            limiters,
            uploads,
            retention,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests on the configured address
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve requests on an already bound listener
    ///
    /// # Errors
    ///
    /// Returns an error if serving fails
    pub async fn serve_on(self, listener: tokio::net::TcpListener, shutdown: CancellationToken) -> anyhow::Result<()> {
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        if let Some(limiters) = self.limiters {
            tokio::spawn(prune_limiters(limiters, shutdown.clone()));
        }

        if let Some(retention) = self.retention {
            tokio::spawn(sweep_uploads(self.uploads, retention, shutdown.clone()));
        }

        axum::serve(
            listener,
            self.router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            tracing::info!("graceful shutdown initiated");
        })
        .await?;

        Ok(())
    }
}

fn build_router(config: &Config, state: AppState, limiters: Option<&RateLimiters>) -> Router {
    let upload_limit = state.uploads.max_bytes().saturating_add(MULTIPART_OVERHEAD_BYTES);

    let mut audio_route = post(generate::generate_audio);
    if let Some(limiters) = limiters {
        audio_route = audio_route.layer(from_fn_with_state(
            limiters.audio.clone(),
            rate_limit::rate_limit_middleware,
        ));
    }

    let mut api = Router::new()
        .route("/api/generate-text", post(generate::generate_text))
        .route("/api/generate-audio", audio_route)
        .route(
            "/api/upload-voice",
            post(voices::upload_voice).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/preset-voices", get(voices::preset_voices));

    let health = &config.server.health;
    let mut public = Router::new();

    if health.enabled {
        if health.path.starts_with("/api/") {
            api = api.route(&health.path, get(health::health_handler));
        } else {
            public = public.route(&health.path, get(health::health_handler));
        }
    }

    // General limiter covers every /api route, including audio
    if let Some(limiters) = limiters {
        api = api.route_layer(from_fn_with_state(
            limiters.general.clone(),
            rate_limit::rate_limit_middleware,
        ));
    }

    let mut app = Router::new()
        .merge(api)
        .merge(public)
        .nest_service("/uploads", ServeDir::new(state.uploads.dir()));

    let voices = &config.voices;
    if voices.preset_dir.is_dir() {
        app = app.nest_service(&voices.preset_path, ServeDir::new(&voices.preset_dir));
    } else {
        tracing::debug!(dir = %voices.preset_dir.display(), "preset voice directory missing, not serving presets");
    }

    // Apply middleware layers (innermost first)
    let mut app = app
        .layer(from_fn_with_state(state.clone(), client_ip::client_addr_middleware))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if let Some(ref cors_config) = config.server.cors {
        app = app.layer(cors::cors_layer(cors_config));
    }

    app.layer(CatchPanicLayer::custom(error::panic_response))
}

async fn prune_limiters(limiters: RateLimiters, shutdown: CancellationToken) {
    let mut ticker = tokio::time::interval(LIMITER_PRUNE_INTERVAL);

    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            _ = ticker.tick() => limiters.prune(),
        }
    }
}

async fn sweep_uploads(uploads: UploadStore, retention: Retention, shutdown: CancellationToken) {
    let mut ticker = tokio::time::interval(retention.interval);

    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                if let Err(e) = uploads.sweep_expired(retention.max_age).await {
                    tracing::warn!(error = %e, "upload retention sweep failed");
                }
            }
        }
    }
}
