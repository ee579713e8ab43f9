//! Reading serialized model artifacts.
//!
//! Artifacts are serde object graphs written by the parser's training
//! pipeline. The loader does not interpret them; it only maps every way a
//! read can go wrong onto [`Error::ModelLoad`].

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Deserialize a model of type `T` from `path`.
///
/// # Errors
/// Returns [`Error::ModelLoad`] if the file is missing, unreadable, or does
/// not decode as `T`.
pub fn load_serialized<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::model_load(path, "file not found"));
    }
    let file = File::open(path).map_err(|e| Error::model_load(path, e.to_string()))?;
    let model = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        Error::model_load(
            path,
            format!("not a serialized {}: {}", std::any::type_name::<T>(), e),
        )
    })?;
    log::debug!("[loader] Read {} from {}", std::any::type_name::<T>(), path.display());
    Ok(model)
}
