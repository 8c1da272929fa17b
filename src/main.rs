// src/main.rs
mod aggregator;
mod assets;
mod config;
mod handlers;
mod models;
mod query;
mod render;
mod utils;

use std::sync::Arc;
use actix_files::Files;
use actix_web::{ web, App, HttpServer };
use env_logger::Env;
use log::info;
use crate::aggregator::StatusAggregator;
use crate::assets::SiteAssets;
use crate::config::Config;
use crate::query::Quake3Client;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind = config.bind();

    let assets = web::Data::new(SiteAssets::load(&config.tiles_dir()));
    let aggregator = web::Data::new(
        StatusAggregator::new(config.servers.clone(), Arc::new(Quake3Client::new()), config.query_timeout())
    );
    for server in aggregator.servers() {
        info!("Watching {} at {}:{}", server.name, server.host, server.port);
    }

    let public_dir = config.public_dir.clone();

    info!("Landing page starting on {}", bind);
    HttpServer::new(move || {
        App::new()
            .app_data(aggregator.clone())
            .app_data(assets.clone())
            .route("/", web::get().to(handlers::index::index))
            .route("/status.json", web::get().to(handlers::status::status_json))
            .service(Files::new("/", public_dir.clone()))
    })
        .bind(&bind)?
        .run().await
}
