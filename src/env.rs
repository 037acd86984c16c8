use std::{collections::HashMap, ffi::OsString};

/// Read-only source of environment values.
pub trait Environment {
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl Environment for HashMap<String, String> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}
