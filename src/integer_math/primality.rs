// src/integer_math/primality.rs

use crate::integer_math::residue::Residue;

pub struct Primality;

impl Primality {
    // Testing against the first twelve primes is deterministic for every u64.
    const PRIME_CHECK_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    /// Deterministic Miller-Rabin for u64 inputs.
    pub fn is_prime(input: u64) -> bool {
        if input < 2 {
            return false;
        }

        for &p in &Self::PRIME_CHECK_BASES {
            if input == p {
                return true;
            }
            if input % p == 0 {
                return false;
            }
        }

        let mut d = input - 1;
        let mut s = 0;
        while d % 2 == 0 {
            d /= 2;
            s += 1;
        }

        for &a in &Self::PRIME_CHECK_BASES {
            let mut x = Residue::pow_mod(a, d, input);
            if x == 1 || x == input - 1 {
                continue;
            }
            let mut r = 1;
            while r < s {
                x = Residue::mul_mod(x, x, input);
                if x == 1 {
                    return false;
                }
                if x == input - 1 {
                    break;
                }
                r += 1;
            }
            if x != input - 1 {
                return false;
            }
        }
        true
    }
}
