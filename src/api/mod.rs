// API layer module (adapters for controllers)
// The HTTP surface is an adapter over the store, session, and assistant

pub mod errors;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::assistant::AssistantGateway;
use crate::session::Session;
use crate::store::Store;

/// Shared application state
///
/// The session is a single transient value for the whole process, mirroring
/// the one-browser deployment model of the portal: identity is ephemeral
/// while store data is durable.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub session: Arc<RwLock<Session>>,
    pub assistant: Arc<AssistantGateway>,
}

impl AppState {
    /// Wraps the core components for sharing across handlers
    pub fn new(store: Store, assistant: AssistantGateway) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            session: Arc::new(RwLock::new(Session::new())),
            assistant: Arc::new(assistant),
        }
    }
}

/// Builds the portal router with all routes and middleware
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::auth::health_check))
        // Auth routes
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/session", get(handlers::auth::current_session))
        .route("/api/auth/view", post(handlers::auth::switch_view))
        // User directory routes (admin console)
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/api/users/:id", delete(handlers::users::delete_user))
        // Curriculum routes
        .route(
            "/api/sections",
            get(handlers::sections::list_sections).post(handlers::sections::create_section),
        )
        .route("/api/sections/:id", delete(handlers::sections::delete_section))
        .route(
            "/api/sections/:id/summary",
            post(handlers::sections::summarize_section),
        )
        // Assistant routes
        .route("/api/assistant/ask", post(handlers::assistant::ask))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
