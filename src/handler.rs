use lambda_http::{tracing, Body, Error, Request, Response};

use crate::{
    config::{MISSING_SECRET_MESSAGE, SECRET_ENV_VAR, SUCCESS_MARKER},
    env::{Environment, ProcessEnv},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretStatus {
    Present,
    Missing,
}

/// Checks whether the secret is set. An empty value counts as missing.
pub fn check_secret(env: &impl Environment) -> SecretStatus {
    match env.var_os(SECRET_ENV_VAR) {
        Some(value) if !value.is_empty() => {
            tracing::debug!(var = SECRET_ENV_VAR, "secret present");
            SecretStatus::Present
        }
        _ => {
            tracing::warn!(var = SECRET_ENV_VAR, "{MISSING_SECRET_MESSAGE}");
            SecretStatus::Missing
        }
    }
}

pub fn secret_marker(env: &impl Environment) -> Option<&'static str> {
    match check_secret(env) {
        SecretStatus::Present => Some(SUCCESS_MARKER),
        SecretStatus::Missing => None,
    }
}

/// Renders the check as an HTTP response. The request is not inspected.
///
/// A missing secret still answers 200, with an empty body.
pub fn handle(env: &impl Environment, _event: &Request) -> Response<Body> {
    let body = match secret_marker(env) {
        Some(marker) => Body::from(marker),
        None => Body::Empty,
    };

    Response::new(body)
}

pub async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    Ok(handle(&ProcessEnv, &event))
}
