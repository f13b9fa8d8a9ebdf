//! Environment variable reader.
//!
//! Production code uses [`Env::real()`], which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] so nothing mutates the process environment.

use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Creates an `Env` backed only by the given key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }
}
