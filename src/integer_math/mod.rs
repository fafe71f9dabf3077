// src/integer_math/mod.rs

pub mod gcd;
pub mod modular_inverse;
pub mod primality;
pub mod residue;
