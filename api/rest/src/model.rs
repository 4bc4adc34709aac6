use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use mb_error::Error;
use serde::Serialize;

pub mod marks;

#[derive(Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl Response {
    pub fn data<T: Serialize>(status_code: &StatusCode, data: T) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(Self {
                error: None,
                data: Some(data),
            }),
            Err(err) => Self::error(&Error::InternalServerError(err.to_string())),
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        Self::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
    }

    /// Client errors are logged at warn level, server errors at error level.
    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        let msg = format!("[ApiRestServer] {status_code}: {message}");
        match status_code.is_server_error() {
            true => mb_log::error(None, msg),
            false => mb_log::warn(None, msg),
        }

        HttpResponseBuilder::new(*status_code).json(Self {
            error: Some(ErrorRes {
                status: match status_code.canonical_reason() {
                    Some(status_code) => status_code.to_owned(),
                    None => "Unknown".to_owned(),
                },
                message: message.to_owned(),
            }),
            data: None,
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    status: String,
    message: String,
}
