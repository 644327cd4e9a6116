use std::sync::Arc;

use clap::Parser;
use pantrychef_api::{
    application::{
        http::server::http_server::{router, state},
        logger::init_logger,
        models::list_models,
    },
    args::Args,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if args.list_models {
        print!("{}", list_models(&args).await?);
        return Ok(());
    }

    let app_state = state(args.clone())?;
    let router = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Starting PantryChef API on {}", addr);
    info!("Using Gemini model {}", args.llm.gemini_model);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
