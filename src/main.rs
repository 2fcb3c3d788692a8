use canteen_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment setup (dotenv, logging)
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Canteen order server starting...");

    // Load configuration
    let config = Config::from_env();

    // Initialize server state
    let state = ServerState::initialize(&config);

    // Run the HTTP server until shutdown
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
