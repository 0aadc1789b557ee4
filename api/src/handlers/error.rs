//! Conversion of domain and extractor errors into JSON error responses.
//!
//! Every failure leaves the API as an [`ErrorResponse`]. Internal error
//! messages are attached under `details` only in debug builds.

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use validator::{ValidationErrors, ValidationErrorsKind};

use sf_core::errors::{AuthError, CommerceError, DomainError, TokenError, ValidationError};
use sf_shared::{error_codes, ErrorResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Malformed body, query string or path
    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// Missing or unusable bearer token
    #[error("{0}")]
    MissingToken(&'static str),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<CommerceError> for ApiError {
    fn from(err: CommerceError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl ApiError {
    /// Status code and machine-readable error code
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
            ApiError::MissingToken(_) => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
            ApiError::Domain(err) => classify_domain(err),
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        let (status, code) = self.classify();
        match self {
            ApiError::Validation(errors) => {
                let mut fields = Vec::new();
                collect_field_errors("", errors, &mut fields);
                fields.into_iter().fold(
                    ErrorResponse::new(code, "Invalid request data"),
                    |response, (field, messages)| response.add_detail(field, messages),
                )
            }
            ApiError::Domain(DomainError::ValidationErr(err)) => {
                let response = ErrorResponse::new(code, err.to_string());
                match err {
                    ValidationError::RequiredField { field }
                    | ValidationError::InvalidFormat { field }
                    | ValidationError::OutOfRange { field, .. } => {
                        response.add_detail("field", field)
                    }
                    ValidationError::InvalidEmail => response.add_detail("field", "email"),
                }
            }
            ApiError::Domain(err) if status.is_server_error() => {
                let response = ErrorResponse::new(code, "An internal error occurred");
                if cfg!(debug_assertions) {
                    response.add_detail("internal", err.to_string())
                } else {
                    response
                }
            }
            other => ErrorResponse::new(code, other.to_string()),
        }
    }
}

/// Flatten field, nested struct and list errors into `path -> messages`,
/// e.g. `products[1].product_id`.
fn collect_field_errors(
    prefix: &str,
    errors: &ValidationErrors,
    out: &mut Vec<(String, Vec<String>)>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.push((path, messages));
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn classify_domain(err: &DomainError) -> (StatusCode, &'static str) {
    match err {
        DomainError::ValidationErr(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Unauthorized => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
        DomainError::Auth(auth) => match auth {
            AuthError::UserExists => (StatusCode::BAD_REQUEST, error_codes::USER_EXISTS),
            AuthError::UserNotFound => (StatusCode::NOT_FOUND, error_codes::USER_NOT_FOUND),
            AuthError::NotRegistered => (StatusCode::BAD_REQUEST, error_codes::USER_NOT_FOUND),
            AuthError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_CREDENTIALS)
            }
            AuthError::InvalidOrExpiredOtp => (StatusCode::BAD_REQUEST, error_codes::INVALID_OTP),
            AuthError::InvalidPendingData => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_PENDING_DATA)
            }
            AuthError::InvalidResetSession => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_RESET_SESSION)
            }
            AuthError::PasswordMismatch => (StatusCode::BAD_REQUEST, error_codes::PASSWORD_MISMATCH),
            AuthError::PasswordTooShort { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::PASSWORD_TOO_SHORT)
            }
            AuthError::InvalidCurrentPassword => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_CURRENT_PASSWORD)
            }
            AuthError::AdminRequired => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
        },
        DomainError::Token(token) => match token {
            TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
            TokenError::InvalidToken | TokenError::InvalidClaims => {
                (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID)
            }
            TokenError::TokenGenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        },
        DomainError::Commerce(commerce) => match commerce {
            CommerceError::ItemNotFound => (StatusCode::NOT_FOUND, error_codes::ITEM_NOT_FOUND),
            CommerceError::ProductNotFound => {
                (StatusCode::NOT_FOUND, error_codes::PRODUCT_NOT_FOUND)
            }
            CommerceError::OrderNotFound => (StatusCode::NOT_FOUND, error_codes::ORDER_NOT_FOUND),
            CommerceError::InvalidOrderData { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_ORDER_DATA)
            }
        },
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }
        HttpResponse::build(status).json(self.to_error_response())
    }
}

/// JSON body extractor settings with errors rendered as [`ErrorResponse`]
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            ApiError::BadRequest(format!("Invalid JSON body: {}", err)).into()
        })
}

/// Query string extractor settings with errors rendered as [`ErrorResponse`]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest(format!("Invalid query string: {}", err)).into()
    })
}

/// Path segments that fail to parse name a resource that cannot exist
pub fn path_error(resource: &str) -> ApiError {
    ApiError::Domain(DomainError::NotFound {
        resource: resource.to_string(),
    })
}
