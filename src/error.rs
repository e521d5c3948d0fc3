use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use serde::Serialize;

/// Requests that match no route.  Rendered as `{"detail": ...}`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for RoutingError {
    fn status_code(&self) -> StatusCode {
        match self {
            RoutingError::NotFound => StatusCode::NOT_FOUND,
            RoutingError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let RoutingError::MethodNotAllowed = self {
            // Every resource only answers GET
            response.insert_header((header::ALLOW, "GET"));
        }
        response.json(ErrorBody {
            detail: self.to_string(),
        })
    }
}
