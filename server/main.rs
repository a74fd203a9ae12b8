use actix_files::Files;
use actix_web::{get, middleware, web, App, HttpServer, Responder};
use serde::Serialize;
use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "./dist";

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

#[get("/health")]
async fn health() -> impl Responder {
    web::Json(Health { status: "healthy" })
}

/// Listening port from `PORT`, falling back to the default on absence or garbage
fn port_from(value: Option<String>) -> u16 {
    match value.as_deref().map(str::parse::<u16>) {
        Some(Ok(port)) => port,
        Some(Err(_)) => {
            log::warn!("Ignoring invalid PORT value, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }
        None => DEFAULT_PORT,
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = port_from(env::var("PORT").ok());
    let dist_dir = env::var("DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST_DIR.to_string());

    log::info!("Serving EcoCitty Connect from {dist_dir} on 0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(health)
            .service(Files::new("/", dist_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test};

    #[::core::prelude::v1::test]
    fn test_port_from_env_value() {
        assert_eq!(port_from(Some("3000".to_string())), 3000);
        assert_eq!(port_from(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(port_from(None), DEFAULT_PORT);
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = to_bytes(resp.into_body()).await.expect("body");
        assert_eq!(body, r#"{"status":"healthy"}"#);
    }
}
