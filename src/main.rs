mod config;
mod middlewares;
mod routes;
mod structs;
mod utils;

use crate::{
    config::Config,
    routes::{
        booking_routes, service_routes, user_routes,
        utils_routes::{home, route_not_found},
    },
    utils::{
        auth_utils::TokenVerifier,
        response_utils::{json_error_handler, path_error_handler, query_error_handler},
    },
};
use actix_cors::Cors;
use actix_web::{App, HttpServer, http, web};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let bind_address = format!("127.0.0.1:{}", config.port);
    let http_client = reqwest::Client::new();
    let verifier = TokenVerifier::new(http_client, config.firebase_project_id.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to create database pool.");

    tracing::info!("Running database migrations...");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations.");

    tracing::info!("Migrations complete.");

    tracing::info!("🚀 Server starting at http://{}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.client_url)
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .supports_credentials();

        let path_config = web::PathConfig::default().error_handler(path_error_handler);
        let json_config = web::JsonConfig::default().error_handler(json_error_handler);
        let query_config = web::QueryConfig::default().error_handler(query_error_handler);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(verifier.clone()))
            .app_data(path_config)
            .app_data(json_config)
            .app_data(query_config)
            .configure(service_routes::service_config)
            .configure(booking_routes::booking_config)
            .configure(user_routes::user_config)
            .service(home)
            .default_service(web::to(route_not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
