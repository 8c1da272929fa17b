// src/handlers/index.rs
use actix_web::{http::header, web, HttpResponse};
use crate::aggregator::StatusAggregator;
use crate::assets::SiteAssets;
use crate::render::html;

/// Landing page. Offline servers are page content, so this always answers 200.
pub async fn index(
    aggregator: web::Data<StatusAggregator>,
    assets: web::Data<SiteAssets>,
) -> HttpResponse {
    let records = aggregator.query_all().await;
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .content_type("text/html; charset=utf-8")
        .body(html::render(&records, &assets.tiles))
}
