// src/lib.rs

pub mod config;
pub mod core;
pub mod integer_math;
pub mod matrix;

pub use crate::matrix::{Classification, ModularLinearSystemSolver, SolveError};
