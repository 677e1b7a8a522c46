//! Login server reached over `fetch`.

use crate::dom::{js_error_message, post_form};
use async_trait::async_trait;
use psclient_core::{ClientError, LoginRequest, LoginResponse, LoginServer};

pub struct WebLoginServer {
    url: String,
}

impl WebLoginServer {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Encode `request` as `act=<action>&key=value...`.
#[must_use]
pub fn form_body(request: &LoginRequest) -> String {
    std::iter::once(("act", request.action.as_str()))
        .chain(
            request
                .params
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )
        .map(|(key, value)| {
            format!(
                "{}={}",
                String::from(js_sys::encode_uri_component(key)),
                String::from(js_sys::encode_uri_component(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait(?Send)]
impl LoginServer for WebLoginServer {
    async fn query(&self, request: LoginRequest) -> Result<LoginResponse, ClientError> {
        log::debug!("login server action {}", request.action);
        let body = post_form(&self.url, &form_body(&request))
            .await
            .map_err(|err| ClientError::Transport(js_error_message(&err)))?;
        LoginResponse::parse(&body)
    }
}
