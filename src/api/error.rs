use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Request-level failures, mapped onto the wire contract.
///
/// Clients only ever see the fixed strings below; upstream detail is logged
/// server-side when the response is rendered.
#[derive(Debug, Error)]
pub(super) enum ApiError {
    #[error("Origin and destination are required")]
    MissingPlaces,
    #[error("No routes returned")]
    NoRoutes,
    #[error("No usable routes returned")]
    NoUsableRoutes,
    #[error("Routing failed. Check GraphHopper key and request.")]
    GeocodeNotFound { place: String },
    #[error("Routing failed. Check GraphHopper key and request.")]
    Provider { detail: String },
}

impl ApiError {
    fn detail(&self) -> Option<String> {
        match self {
            ApiError::GeocodeNotFound { place } => {
                Some(format!("no geocoding result for \"{place}\""))
            }
            ApiError::Provider { detail } => Some(detail.clone()),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingPlaces => StatusCode::BAD_REQUEST,
            ApiError::NoRoutes | ApiError::NoUsableRoutes => StatusCode::NOT_FOUND,
            ApiError::GeocodeNotFound { .. } | ApiError::Provider { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Some(detail) = self.detail() {
            log::error!("GraphHopper error: {detail}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
