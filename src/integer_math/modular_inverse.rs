// src/integer_math/modular_inverse.rs

use num::Integer;
use log::debug;
use crate::integer_math::primality::Primality;

/// Precomputed inverses `inv[1..m-1]` for a prime modulus.
///
/// Built with the linear recurrence `inv[i] = m - (m / i) * inv[m % i] mod m`, which only
/// holds when every `1..m-1` is invertible, i.e. when `m` is prime.
#[derive(Debug, Clone)]
pub struct InverseTable {
    modulus: u64,
    table: Vec<u64>,
}

impl InverseTable {
    /// Returns `None` when `modulus` is not prime.
    pub fn new(modulus: u64) -> Option<Self> {
        if !Primality::is_prime(modulus) {
            return None;
        }

        let size = modulus as usize;
        let mut table = vec![0u64; size];
        table[1] = 1;
        for i in 2..size {
            let quotient = modulus / i as u64;
            let previous = table[(modulus % i as u64) as usize];
            let product = (quotient as u128 * previous as u128 % modulus as u128) as u64;
            table[i] = (modulus - product) % modulus;
        }

        debug!("Built inverse table for modulus {} ({} entries)", modulus, size);
        Some(InverseTable { modulus, table })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn get(&self, value: u64) -> Option<u64> {
        match value % self.modulus {
            0 => None,
            v => Some(self.table[v as usize]),
        }
    }
}

/// Inverse of `value` mod `modulus` by the extended Euclidean algorithm, `None` when
/// `gcd(value, modulus) != 1`.
pub fn invert(value: u64, modulus: u64) -> Option<u64> {
    let m = modulus as i128;
    let egcd = (value as i128 % m).extended_gcd(&m);
    if egcd.gcd != 1 {
        return None;
    }
    Some(egcd.x.rem_euclid(m) as u64)
}

/// Inverse lookup for one fixed modulus: table-backed when the modulus is a prime no
/// larger than the configured limit, extended Euclid otherwise.
#[derive(Debug, Clone)]
pub struct ModularInverse {
    modulus: u64,
    table: Option<InverseTable>,
}

impl ModularInverse {
    pub fn new(modulus: u64, table_limit: u64) -> Self {
        let table = if modulus <= table_limit {
            InverseTable::new(modulus)
        } else {
            None
        };
        ModularInverse { modulus, table }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn inverse(&self, value: u64) -> Option<u64> {
        match &self.table {
            Some(table) => table.get(value),
            None => invert(value, self.modulus),
        }
    }
}
