//! Loading knowledge bases from JSON documents.
//!
//! [`try_load`] propagates every failure. [`load`] is the form the front end
//! uses: failures are logged and an empty knowledge base is returned, so the
//! matcher simply answers "no match".

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info};

use crate::error::{Error, Result};
use crate::knowledge::KnowledgeBase;

/// Parses a knowledge base from a JSON string.
///
/// The top-level value must be an object.
pub fn from_json_str(json: &str) -> Result<KnowledgeBase> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(Error::Format(serde::de::Error::custom(
            "knowledge base must be a JSON object",
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// Reads and parses the knowledge base at `path`.
pub fn try_load(path: impl AsRef<Path>) -> Result<KnowledgeBase> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let kb = from_json_str(&text)?;
    info!(
        "Loaded knowledge base {}: {} condition(s), {} rule(s), {} exclusion set(s)",
        path.display(),
        kb.conditions().len(),
        kb.rules().len(),
        kb.exclusions().len()
    );
    Ok(kb)
}

/// Reads the knowledge base at `path`, falling back to an empty one.
///
/// The failure is logged with [`describe_failure`].
pub fn load(path: impl AsRef<Path>) -> KnowledgeBase {
    let path = path.as_ref();
    match try_load(path) {
        Ok(kb) => kb,
        Err(e) => {
            error!("{}", describe_failure(path, &e));
            KnowledgeBase::new()
        }
    }
}

/// Message reported when loading `path` fails with `err`.
///
/// A missing file reads `Cannot find file: <path>`, malformed content
/// `The format of file <path> is wrong`.
pub fn describe_failure(path: &Path, err: &Error) -> String {
    match err {
        Error::Io(e) if e.kind() == ErrorKind::NotFound => {
            format!("Cannot find file: {}", path.display())
        }
        Error::Io(e) => format!("Cannot read file {}: {}", path.display(), e),
        e => format!("The format of file {} is wrong: {}", path.display(), e),
    }
}
