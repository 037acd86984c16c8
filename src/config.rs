/// Environment variable the deployment injects the secret into.
pub const SECRET_ENV_VAR: &str = "SECRET_KEY";

pub const SUCCESS_MARKER: &str = "OK";

pub const MISSING_SECRET_MESSAGE: &str = "The secret was not found, exiting.";
