// src/handlers/status.rs
use actix_web::{web, HttpResponse};
use crate::aggregator::StatusAggregator;
use crate::render::json;

pub async fn status_json(aggregator: web::Data<StatusAggregator>) -> HttpResponse {
    let records = aggregator.query_all().await;
    HttpResponse::Ok().json(json::render(&records))
}
