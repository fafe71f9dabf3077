// src/matrix/mod.rs

pub mod augmented_matrix;
pub mod error;
pub mod modular_solver;
pub mod row_role;
pub mod solution;

pub use augmented_matrix::AugmentedMatrix;
pub use error::SolveError;
pub use modular_solver::{ModularLinearSystemSolver, Stage};
pub use row_role::{PivotRelation, RowRole};
pub use solution::{Classification, Underdetermined};
