use actix_web::HttpResponse;
use serde::Serialize;

use crate::errors::ApiError;

/// Body of every response: `result` on success, `error` on failure.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub code: u16,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    let body = ApiResponse {
        status: "SUCCESS".to_string(),
        code: 200,
        result: Some(data),
        error: None,
    };

    HttpResponse::Ok().json(body)
}
