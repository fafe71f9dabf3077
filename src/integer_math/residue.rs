// src/integer_math/residue.rs
//
// Residue arithmetic over u64 moduli. Products go through u128 so no modulus below 2^64
// can overflow an intermediate value.

pub struct Residue;

impl Residue {
    /// Maps a raw signed coefficient into `[0, m)`: `((c % m) + m) % m`.
    pub fn normalize(value: i64, modulus: u64) -> u64 {
        let m = modulus as i128;
        (((value as i128 % m) + m) % m) as u64
    }

    pub fn reduce(value: u64, modulus: u64) -> u64 {
        value % modulus
    }

    pub fn add_mod(left: u64, right: u64, modulus: u64) -> u64 {
        ((left as u128 + right as u128) % modulus as u128) as u64
    }

    /// `left - right` reduced into `[0, m)`. Both operands must already be reduced.
    pub fn sub_mod(left: u64, right: u64, modulus: u64) -> u64 {
        if left >= right {
            left - right
        } else {
            modulus - (right - left)
        }
    }

    pub fn mul_mod(left: u64, right: u64, modulus: u64) -> u64 {
        (left as u128 * right as u128 % modulus as u128) as u64
    }

    pub fn pow_mod(base: u64, exp: u64, modulus: u64) -> u64 {
        if modulus == 1 {
            return 0;
        }

        let mut result = 1u64;
        let mut base = base % modulus;
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = Self::mul_mod(result, base, modulus);
            }
            exp >>= 1;
            base = Self::mul_mod(base, base, modulus);
        }

        result
    }

    /// `(left * a - right * b) mod m`, the row-combination kernel.
    pub fn combine(left: u64, a: u64, right: u64, b: u64, modulus: u64) -> u64 {
        Self::sub_mod(
            Self::mul_mod(left, a, modulus),
            Self::mul_mod(right, b, modulus),
            modulus,
        )
    }

    /// Evaluates `sum coefficients[k] * values[k] mod m`.
    pub fn dot(coefficients: &[u64], values: &[u64], modulus: u64) -> u64 {
        coefficients
            .iter()
            .zip(values.iter())
            .fold(0, |acc, (&c, &v)| Self::add_mod(acc, Self::mul_mod(c, v, modulus), modulus))
    }
}
