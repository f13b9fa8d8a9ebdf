//! Private key lookup and a short, escaped preview of it.

use std::env::VarError;
use thiserror::Error;

use crate::core::env::Env;

pub const PRIVATE_KEY_VAR: &str = "SNOWFLAKE_PRIVATE_KEY";

/// Number of characters shown in a preview.
pub const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("SNOWFLAKE_PRIVATE_KEY not set")]
    NotSet,

    #[error("SNOWFLAKE_PRIVATE_KEY is not valid unicode")]
    NotUnicode,
}

/// Reads the private key. An empty value counts as set.
pub fn read_private_key(env: &Env) -> Result<String, KeyError> {
    env.var(PRIVATE_KEY_VAR).map_err(|e| match e {
        VarError::NotPresent => KeyError::NotSet,
        VarError::NotUnicode(_) => KeyError::NotUnicode,
    })
}

/// The first [`PREVIEW_CHARS`] characters of `key` as a single-quoted,
/// escaped literal, so PEM line breaks show up as `\n`.
///
pub fn preview(key: &str) -> String {
    let mut out = String::from("'");
    for c in key.chars().take(PREVIEW_CHARS) {
        match c {
            '\'' => out.push_str("\\'"),
            '"' => out.push('"'),
            _ => out.extend(c.escape_debug()),
        }
    }
    out.push('\'');
    out
}

/// The line printed by the `keypreview` binary.
pub fn preview_line(key: &str) -> String {
    format!("First {PREVIEW_CHARS} chars: {}", preview(key))
}
