use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::validation::Violations;
use service::ServiceError;
use tracing::{error, warn};

/// Error half of every handler. Serializes as `{"errors": "..."}`, with a
/// `violations` list when validation failed.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub violations: Option<Violations>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    errors: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<&'a Violations>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), violations: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_internal() {
            error!(code = err.code(), error = %err, "internal error");
        }
        match err {
            ServiceError::Validation(v) => Self { status: StatusCode::BAD_REQUEST, message: v.to_string(), violations: Some(v) },
            // duplicate username is reported as a plain bad request
            ServiceError::Conflict(msg) => Self::bad_request(msg),
            ServiceError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Db(_) | ServiceError::Hash(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected json body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self { Self::bad_request(rejection.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self { Self::bad_request(rejection.body_text()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { errors: &self.message, violations: self.violations.as_ref() };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation(Violations::single("first_name", "required")), StatusCode::BAD_REQUEST),
            (ServiceError::conflict("Username already exists"), StatusCode::BAD_REQUEST),
            (ServiceError::unauthorized(), StatusCode::UNAUTHORIZED),
            (ServiceError::not_found("contact"), StatusCode::NOT_FOUND),
            (ServiceError::Db("connection reset".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let api = ApiError::from(ServiceError::Db("relation \"users\" does not exist".into()));
        assert_eq!(api.message, "internal server error");
        assert!(api.violations.is_none());
        let api = ApiError::from(ServiceError::Hash("invalid salt".into()));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "internal server error");
    }

    #[test]
    fn every_internal_service_error_is_a_500() {
        let errs = [
            ServiceError::Validation(Violations::single("f", "m")),
            ServiceError::conflict("c"),
            ServiceError::unauthorized(),
            ServiceError::not_found("contact"),
            ServiceError::Db("d".into()),
            ServiceError::Hash("h".into()),
        ];
        for err in errs {
            let internal = err.is_internal();
            let api = ApiError::from(err);
            assert_eq!(api.status == StatusCode::INTERNAL_SERVER_ERROR, internal);
        }
    }

    #[test]
    fn validation_keeps_violations() {
        let api = ApiError::from(ServiceError::Validation(Violations::single("phone", "too long")));
        assert_eq!(api.message, "phone: too long");
        assert_eq!(api.violations.map(|v| v.len()), Some(1));
    }
}
