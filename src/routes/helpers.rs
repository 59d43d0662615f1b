use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;

/// Error bodies are plain text, not JSON.
pub fn build_error_response(status_code: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status_code)
        .content_type(ContentType::plaintext())
        .body(message)
}
