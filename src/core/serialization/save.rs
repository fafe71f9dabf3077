// src/core/serialization/save.rs

use std::fs;
use std::path::Path;
use serde::Serialize;
use log::debug;
use crate::core::batch::SolveOutcome;
use crate::core::serialization::types::SolveReport;
use crate::core::serialization::SerializationError;

pub fn object<T: Serialize, P: AsRef<Path>>(obj: &T, path: P, pretty: bool) -> Result<(), SerializationError> {
    let path = path.as_ref();
    let save_json = if pretty {
        serde_json::to_string_pretty(obj)?
    } else {
        serde_json::to_string(obj)?
    };
    fs::write(path, save_json).map_err(|e| SerializationError::io(path, e))
}

pub fn reports<P: AsRef<Path>>(outcomes: &[SolveOutcome], path: P, pretty: bool) -> Result<(), SerializationError> {
    let reports: Vec<SolveReport> = outcomes.iter().map(SolveReport::from).collect();
    object(&reports, path.as_ref(), pretty)?;
    debug!("Saved {} reports to {}", reports.len(), path.as_ref().display());
    Ok(())
}
