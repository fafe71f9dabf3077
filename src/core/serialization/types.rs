// src/core/serialization/types.rs

use serde::{Deserialize, Serialize};
use crate::core::batch::SolveOutcome;
use crate::core::linear_system::LinearSystem;
use crate::matrix::row_role::PivotRelation;
use crate::matrix::solution::Classification;

/// A system file holds either one system or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializableSystems {
    One(LinearSystem),
    Many(Vec<LinearSystem>),
}

impl From<SerializableSystems> for Vec<LinearSystem> {
    fn from(systems: SerializableSystems) -> Self {
        match systems {
            SerializableSystems::One(system) => vec![system],
            SerializableSystems::Many(systems) => systems,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ReportOutcome {
    Inconsistent {
        row: usize,
        constant: u64,
    },
    Unique {
        values: Vec<u64>,
    },
    Infinite {
        free_columns: Vec<usize>,
        relations: Vec<PivotRelation>,
    },
    Error {
        error: String,
    },
}

impl From<&Classification> for ReportOutcome {
    fn from(classification: &Classification) -> Self {
        match classification {
            Classification::Inconsistent { row, constant } => ReportOutcome::Inconsistent {
                row: *row,
                constant: *constant,
            },
            Classification::Unique(values) => ReportOutcome::Unique { values: values.clone() },
            Classification::Infinite(family) => ReportOutcome::Infinite {
                free_columns: family.free_columns.clone(),
                relations: family.relations.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub modulus: u64,
    pub unknowns: usize,
    #[serde(flatten)]
    pub outcome: ReportOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<u64>>>,
}

impl From<&SolveOutcome> for SolveReport {
    fn from(outcome: &SolveOutcome) -> Self {
        let report_outcome = match &outcome.result {
            Ok(classification) => ReportOutcome::from(classification),
            Err(e) => ReportOutcome::Error { error: e.to_string() },
        };

        SolveReport {
            name: outcome.name.clone(),
            modulus: outcome.modulus,
            unknowns: outcome.unknowns,
            outcome: report_outcome,
            matrix: outcome.reduced.as_ref().map(|m| m.rows()),
        }
    }
}
