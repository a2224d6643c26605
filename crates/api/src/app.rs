use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use shared::jwt::JwtConfig;
use sqlx::PgPool;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, require_admin, require_user_auth,
    security_headers_middleware, trace_id, RateLimiterState,
};
use crate::routes::{admin, auth, events, groups, health, registrations, slots, users};
use crate::services::auth::{build_jwt_config, AuthError};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

impl AppState {
    /// Parses the JWT keys once; `rate_limit_per_minute = 0` disables limiting.
    pub fn new(config: Config, pool: PgPool) -> Result<Self, AuthError> {
        let jwt = build_jwt_config(&config.jwt)?;
        let rate_limiter = NonZeroU32::new(config.security.rate_limit_per_minute)
            .map(|limit| Arc::new(RateLimiterState::new(limit)));

        Ok(Self {
            pool,
            config: Arc::new(config),
            jwt: Arc::new(jwt),
            rate_limiter,
        })
    }
}

/// Builds the router from a config and pool.
pub fn create_app(config: Config, pool: PgPool) -> Result<Router, AuthError> {
    Ok(router(AppState::new(config, pool)?))
}

pub fn router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Layers run bottom-up: auth, then rate limiting keyed by the caller.
    let protected_routes = Router::new()
        .route("/api/v1/slots/preview", get(slots::preview_slots))
        .route("/api/v1/users/:user_id", get(users::get_profile))
        .route("/api/v1/events", post(events::create_event))
        .route(
            "/api/v1/events/group/:group_name",
            get(events::list_group_events),
        )
        .route(
            "/api/v1/events/organizer/:user_id",
            get(events::list_organizer_events),
        )
        .route(
            "/api/v1/events/:event_id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/api/v1/registrations",
            post(registrations::claim_slot).get(registrations::list_my_registrations),
        )
        .route(
            "/api/v1/registrations/:registration_id",
            delete(registrations::cancel_registration),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    let admin_routes = Router::new()
        .route("/api/v1/admin/users", get(admin::list_users))
        .route("/api/v1/admin/users/:user_id", delete(admin::delete_user))
        .route(
            "/api/v1/admin/users/:user_id/role",
            put(admin::set_user_role),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/groups", get(groups::list_groups));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
