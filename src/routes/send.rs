use crate::configuration::SenderDefaults;
use crate::domain::{Recipients, SendRequest};
use crate::email::{EmailProvider, OutboundEmail, SendError};
use crate::routes::error_chain_fmt;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, Response, State};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub const MISSING_FIELDS_ERROR: &str = "Missing required fields: to, subject, html";

#[derive(serde::Deserialize)]
pub struct BodyData {
    to: Option<Recipients>,
    subject: Option<String>,
    html: Option<String>,
    from: Option<String>,
    reply_to: Option<String>,
}

impl TryFrom<BodyData> for SendRequest {
    type Error = String;

    fn try_from(body: BodyData) -> Result<Self, Self::Error> {
        let to = body
            .to
            .filter(|recipients| !recipients.is_empty())
            .ok_or_else(|| MISSING_FIELDS_ERROR.to_string())?;
        let subject = body
            .subject
            .filter(|subject| !subject.is_empty())
            .ok_or_else(|| MISSING_FIELDS_ERROR.to_string())?;
        let html = body
            .html
            .filter(|html| !html.is_empty())
            .ok_or_else(|| MISSING_FIELDS_ERROR.to_string())?;
        Ok(SendRequest {
            to: to.into_addresses(),
            subject,
            html,
            from: body.from,
            reply_to: body.reply_to,
        })
    }
}

#[derive(serde::Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub data: serde_json::Value,
}

#[tracing::instrument(
    name = "Relaying an email send request",
    skip(body, provider, defaults),
    fields(request_id = %Uuid::new_v4())
)]
#[post("/send", format = "json", data = "<body>")]
pub async fn send(
    body: Json<BodyData>,
    provider: &State<Arc<dyn EmailProvider>>,
    defaults: &State<SenderDefaults>,
) -> Result<Json<SendResponse>, RelayError> {
    let request: SendRequest = match body.into_inner().try_into() {
        Ok(request) => request,
        Err(message) => return Err(RelayError::BadRequest(message)),
    };
    let email = OutboundEmail::new(request, defaults);
    let data = provider.send(&email).await.map_err(|e| match e {
        SendError::Rejected(message) => RelayError::Provider(message),
        SendError::Unexpected(source) => RelayError::Unexpected(source),
    })?;
    Ok(Json(SendResponse {
        success: true,
        data,
    }))
}

// Browsers send an OPTIONS preflight before a cross-origin POST; answer it
// with an empty 200 and let the CORS fairing add the headers.
#[options("/send")]
pub async fn send_preflight() {}

// The `Json` data guard forwards instead of failing when the request body is
// not declared as JSON; catch the forward and answer with the same
// validation failure as an unparseable body.
#[post("/send", rank = 2)]
pub async fn send_not_json() -> RelayError {
    RelayError::BadRequest(MISSING_FIELDS_ERROR.to_string())
}

#[get("/send")]
pub async fn send_get() -> RelayError {
    RelayError::MethodNotAllowed
}

#[put("/send")]
pub async fn send_put() -> RelayError {
    RelayError::MethodNotAllowed
}

#[delete("/send")]
pub async fn send_delete() -> RelayError {
    RelayError::MethodNotAllowed
}

#[patch("/send")]
pub async fn send_patch() -> RelayError {
    RelayError::MethodNotAllowed
}

#[derive(thiserror::Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Provider(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<'r> Responder<'r, 'static> for RelayError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        tracing::warn!("RelayError: {:?}", self);
        let status = match &self {
            RelayError::MethodNotAllowed => Status::MethodNotAllowed,
            RelayError::BadRequest(_) => Status::BadRequest,
            RelayError::Provider(_) | RelayError::Unexpected(_) => Status::InternalServerError,
        };
        let body = Json(json!({ "error": self.to_string() }));
        Response::build_from(body.respond_to(request)?)
            .status(status)
            .ok()
    }
}
