use std::io;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

mod api;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = api::AppConfig::from_env().map_err(io::Error::other)?;
    let source = match config.mode {
        api::Mode::Live { api_key, base_url } => {
            let client =
                api::GraphHopperClient::new(base_url, api_key).map_err(io::Error::other)?;
            api::RouteSource::Live(client)
        }
        api::Mode::Demo => {
            log::warn!("DEMO_MODE is set; serving built-in demo routes");
            api::RouteSource::Demo
        }
    };
    let source = web::Data::new(source);
    let port = config.port;

    log::info!("Journey planner backend running on port {port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(source.clone())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
