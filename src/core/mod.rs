// src/core/mod.rs

pub mod batch;
pub mod linear_system;
pub mod serialization;
