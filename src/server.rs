use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{Environment, SecurityConfig};
use crate::database::models::{Habit, Note, Task};
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Assemble the full application router around `state`.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config.environment, &state.config.security);

    let router = Router::new()
        // Public
        .route("/", get(public::root_get))
        .route("/health", get(public::health_get))
        .merge(auth_public_routes())
        // Protected
        .merge(protected_routes(state.clone()));

    // Global middleware
    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(public::register_post))
        .route("/api/login", post(public::login_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::resources::{collection, record};

    Router::new()
        .route("/api/auth/whoami", get(protected::auth::whoami_get))
        // Tasks
        .route("/tasks", get(collection::list::<Task>).post(collection::create::<Task>))
        .route(
            "/tasks/:id",
            get(record::get::<Task>).put(record::put::<Task>).delete(record::delete::<Task>),
        )
        // Habits
        .route("/habits", get(collection::list::<Habit>).post(collection::create::<Habit>))
        .route(
            "/habits/:id",
            get(record::get::<Habit>).put(record::put::<Habit>).delete(record::delete::<Habit>),
        )
        // Notes
        .route("/notes", get(collection::list::<Note>).post(collection::create::<Note>))
        .route(
            "/notes/:id",
            get(record::get::<Note>).put(record::put::<Note>).delete(record::delete::<Note>),
        )
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

/// Permissive in development when no origins are configured, otherwise an
/// explicit origin list. A `*` entry allows any origin, without credentials.
fn cors_layer(environment: Environment, security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    if environment == Environment::Development && security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS];
    let headers = [header::AUTHORIZATION, header::CONTENT_TYPE];

    if security.cors_origins.iter().any(|origin| origin.trim() == "*") {
        tracing::warn!("CORS origin list contains '*': allowing any origin without credentials");
        return Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::any())
                .allow_methods(methods)
                .allow_headers(headers),
        );
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
    )
}
