use crate::io_struct::{ChatRequest, DraftRequest};
use crate::proxy_state::{ProxyConfig, ProxyState, internal_error};
use actix_web::{HttpRequest, HttpResponse, HttpServer, get, post, web};
use serde_json::Value;
use std::io::Write;

#[get("/health")]
pub async fn health(_req: HttpRequest, _: web::Data<ProxyState>) -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

fn parse_body(body: &web::Bytes) -> Option<Value> {
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Malformed request body: {}", e);
            None
        }
    }
}

#[post("/api/chat")]
pub async fn chat(
    _req: HttpRequest,
    body: web::Bytes,
    app_state: web::Data<ProxyState>,
) -> Result<HttpResponse, actix_web::Error> {
    let body = match parse_body(&body) {
        Some(body) => body,
        None => return Ok(internal_error()),
    };
    let request = ChatRequest::from_value(&body)?;
    log::info!(
        "Forwarding chat request: history={}, feature={}, language={}, image={}, document={}",
        request.chat_history.len(),
        request.feature,
        request.language,
        request.image_url.is_some(),
        request.document_url.is_some()
    );
    let json = match serde_json::to_value(&request) {
        Ok(json) => json,
        Err(_) => return Ok(internal_error()),
    };
    Ok(app_state.forward("/api/chat", &json).await)
}

#[post("/api/draft")]
pub async fn draft(
    _req: HttpRequest,
    body: web::Bytes,
    app_state: web::Data<ProxyState>,
) -> Result<HttpResponse, actix_web::Error> {
    let body = match parse_body(&body) {
        Some(body) => body,
        None => return Ok(internal_error()),
    };
    let request = DraftRequest::from_value(&body)?;
    log::info!(
        "Forwarding drafting request: document_type={}, parties={}, key_terms={}, language={}",
        request.document_type,
        request.parties.len(),
        request.key_terms.len(),
        request.language
    );
    let json = match serde_json::to_value(&request) {
        Ok(json) => json,
        Err(_) => return Ok(internal_error()),
    };
    Ok(app_state.forward("/api/draft", &json).await)
}

pub async fn startup(config: ProxyConfig, state: ProxyState) -> std::io::Result<()> {
    let app_state = web::Data::new(state);

    println!("Starting gateway at {}:{}", config.host, config.port);

    // default level is info
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .service(health)
            .service(chat)
            .service(draft)
    })
    .bind((config.host, config.port))?
    .run()
    .await?;

    std::io::Result::Ok(())
}
