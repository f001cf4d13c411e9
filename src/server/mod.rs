pub mod handlers;
pub mod state;

use actix_web::{web, App, HttpServer};

use crate::config;
use crate::server::state::AppState;

/// Serves the read-only API until the process stops. Handlers only read the
/// shared snapshot; nothing here ever triggers a scrape.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(handlers::home)
            .service(handlers::scrape)
            .service(handlers::scrape_preflight)
    })
    .bind(config::BIND_ADDR)?
    .run()
    .await
}
