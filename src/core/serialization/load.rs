// src/core/serialization/load.rs

use std::fs;
use std::path::Path;
use log::debug;
use crate::core::linear_system::LinearSystem;
use crate::core::serialization::types::{SerializableSystems, SolveReport};
use crate::core::serialization::SerializationError;

pub fn generic<T: serde::de::DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, SerializationError> {
    let path = path.as_ref();
    let load_json = fs::read_to_string(path).map_err(|e| SerializationError::io(path, e))?;
    Ok(serde_json::from_str(&load_json)?)
}

/// Reads a file holding one system or an array of systems.
pub fn systems<P: AsRef<Path>>(path: P) -> Result<Vec<LinearSystem>, SerializationError> {
    let systems: Vec<LinearSystem> = generic::<SerializableSystems, _>(path.as_ref())?.into();
    debug!("Loaded {} systems from {}", systems.len(), path.as_ref().display());
    Ok(systems)
}

pub fn reports<P: AsRef<Path>>(path: P) -> Result<Vec<SolveReport>, SerializationError> {
    generic(path)
}
