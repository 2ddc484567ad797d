use crate::models::ErrorDetail;

/// Failure of a client-side action. The `Display` text is what the page shows.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Network(#[from] gloo_net::Error),
    #[error("{detail}")]
    Api { status: u16, detail: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Message for a non-2xx response: the `detail` field of the body when there
/// is one, otherwise a generic status line.
pub fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorDetail>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| format!("Request failed with status code {}", status))
}

#[cfg(feature = "ssr")]
pub use server::ApiError;

#[cfg(feature = "ssr")]
mod server {
    use super::ErrorDetail;
    use actix_web::{http::StatusCode, HttpResponse, ResponseError};
    use leptos::logging::error;

    #[derive(Debug, thiserror::Error)]
    pub enum ApiError {
        #[error("Authentication credentials were not provided.")]
        Unauthorized,
        #[error("{0}")]
        NotFound(String),
        #[error("{0}")]
        BadRequest(String),
        #[error("Database error")]
        Database(#[from] rusqlite::Error),
    }

    impl ResponseError for ApiError {
        fn status_code(&self) -> StatusCode {
            match self {
                ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
                ApiError::NotFound(_) => StatusCode::NOT_FOUND,
                ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
                ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        fn error_response(&self) -> HttpResponse {
            if let ApiError::Database(err) = self {
                error!("[API] Database error: {:?}", err);
            }
            HttpResponse::build(self.status_code()).json(ErrorDetail {
                detail: self.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins() {
        assert_eq!(
            error_detail(400, r#"{"detail": "Product already reviewed"}"#),
            "Product already reviewed"
        );
    }

    #[test]
    fn falls_back_to_status_line() {
        assert_eq!(error_detail(502, "<html>Bad gateway</html>"), "Request failed with status code 502");
        assert_eq!(error_detail(500, ""), "Request failed with status code 500");
    }

    #[test]
    fn api_error_displays_detail() {
        let err = AppError::Api { status: 404, detail: "Product not found".into() };
        assert_eq!(err.to_string(), "Product not found");
    }
}
