use std::net::SocketAddr;

use induction_api::api::{self, AppState};
use induction_api::assistant::{self, AssistantGateway};
use induction_api::infrastructure::storage::JsonFileStorage;
use induction_api::store::Store;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let data_dir = std::env::var("INDUCTION_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("INDUCTION_DATA_DIR not set, using default");
        "./data".to_string()
    });

    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("GEMINI_API_KEY not set, assistant requests will fail");
        String::new()
    });
    let model =
        std::env::var("GEMINI_MODEL").unwrap_or_else(|_| assistant::DEFAULT_MODEL.to_string());
    let base_url = std::env::var("GEMINI_BASE_URL")
        .unwrap_or_else(|_| assistant::DEFAULT_BASE_URL.to_string());

    // Load persisted state, falling back to seed data on first run
    tracing::info!(data_dir = %data_dir, "Loading induction store...");
    let store = Store::load(JsonFileStorage::new(&data_dir)).await;
    tracing::info!(
        users = store.users().len(),
        sections = store.sections().len(),
        "Store loaded"
    );

    let gateway = AssistantGateway::with_base_url(base_url, api_key, model);

    // Build router
    let app = api::router(AppState::new(store, gateway));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
