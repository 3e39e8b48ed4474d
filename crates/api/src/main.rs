#[tokio::main]
async fn main() {
    staffboard_observability::init();

    // A store that cannot be reached or seeded must abort startup; serving
    // against a broken store is never acceptable.
    let app = match staffboard_api::app::build_app().await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("startup failed: {e:#}");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
