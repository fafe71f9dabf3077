// src/config/mod.rs

pub mod solver_config;

// Re-export main types for convenience
pub use solver_config::{ReportConfig, SolverConfig};
