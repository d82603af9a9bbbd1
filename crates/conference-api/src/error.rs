use actix_web::{HttpResponse, http::StatusCode};
use conference_lib::{EntityKind, error::ConferenceError};

#[derive(thiserror::Error, Debug)]
pub enum ApiErrorKind {
    #[error("not found")]
    EndpointNotFound,
    #[error("{0} not found")]
    NotFound(EntityKind),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Lib(#[from] ConferenceError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl actix_web::ResponseError for ApiErrorKind {
    fn status_code(&self) -> StatusCode {
        use ApiErrorKind as E;
        use ConferenceError as LE;

        match self {
            E::EndpointNotFound | E::NotFound(_) | E::Lib(LE::NotFound(..)) => {
                StatusCode::NOT_FOUND
            }
            E::Json(_) | E::Lib(LE::DbError(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let status_code = self.status_code();

        let error = match self {
            ApiErrorKind::Lib(ConferenceError::NotFound(kind, _)) => {
                ApiErrorKind::NotFound(*kind).to_string()
            }
            _ if status_code.is_server_error() => {
                tracing::error!("{self}");
                "internal server error".to_owned()
            }
            _ => self.to_string(),
        };

        HttpResponse::build(status_code).json(ErrorResponse { error })
    }
}

pub type ApiResult<T = ()> = Result<T, ApiErrorKind>;
