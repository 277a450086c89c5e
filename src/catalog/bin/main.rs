use std::sync::Arc;
use books_api::catalog::controller::build_router;
use books_api::catalog::factory::create_catalog_service;
use books_api::core::controller::AppState;
use books_api::core::domain::{Configuration, ServerMode};
use books_api::utils::logs::setup_tracing;
use lambda_http::{run, Error};
use tracing::info;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.json_logs);

    let catalog = Arc::from(create_catalog_service(&config));
    let state = AppState::new(config.clone(), catalog);
    match config.server_mode {
        ServerMode::Lambda => {
            info!(stage = %config.stage, "starting catalog under lambda runtime");
            run(build_router(state)).await
        }
        ServerMode::Local => {
            let addr = config.bind_addr()?;
            info!(stage = %config.stage, %addr, "Server is running on http://{}", addr);
            let app = build_router(state);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
