//! HTTP adapter around the extraction pipeline.

mod handlers;

use actix_cors::Cors;
use actix_web::{error::InternalError, error::JsonPayloadError, web, App, HttpResponse, HttpServer};
use tracing::{info, warn};

use pdex_core::models::config::{PdexConfig, ServerConfig};
use pdex_core::DocumentExtractor;

use handlers::error_body;

/// Register routes and their JSON limits. The returned closure owns its settings.
pub fn configure(server: &ServerConfig) -> impl Fn(&mut web::ServiceConfig) + Clone + use<> {
    let limit = server.max_payload_bytes;
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(json_config(limit))
            .route("/extract", web::post().to(handlers::extract))
            .route("/health", web::get().to(handlers::health));
    }
}

/// JSON extractor settings: payload limit and error bodies in the API's shape.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let response = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    warn!("Rejected upload: {}", err);
                    HttpResponse::PayloadTooLarge().json(error_body("File too large"))
                }
                _ => {
                    warn!("Rejected request body: {}", err);
                    HttpResponse::BadRequest().json(error_body("No file uploaded"))
                }
            };
            InternalError::from_response(err, response).into()
        })
}

fn cors(server: &ServerConfig) -> Cors {
    let cors = if server.allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        server
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Accept", "Content-Type", "Authorization"])
        .max_age(3600)
}

/// Bind and run the server until it is stopped.
pub async fn run(config: PdexConfig) -> std::io::Result<()> {
    let extractor = web::Data::new(DocumentExtractor::new().with_pdf_config(config.pdf.clone()));
    let server_config = config.server.clone();
    let routes = configure(&server_config);

    info!(
        "Server running on http://{}:{}",
        server_config.host, server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&server_config))
            .app_data(extractor.clone())
            .configure(routes.clone())
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
