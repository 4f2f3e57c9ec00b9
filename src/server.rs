//! HTTP server assembly.

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::context::Context;
use crate::routes;

/// Run the dashboard API server until shutdown.
pub async fn run_server(ip: &str, port: u16, ctx: Context) -> std::io::Result<()> {
    info!(%ip, port, "starting dashboard server");

    let bind_addr = (ip.to_string(), port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(ctx.clone()))
            .service(routes::index)
            .service(routes::total_supplied)
            .service(routes::collateral_balance)
            .service(routes::sui_price)
            .service(routes::debt)
            .service(routes::apy)
    })
    .bind(bind_addr)?
    .run()
    .await
}
