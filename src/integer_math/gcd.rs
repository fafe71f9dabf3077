// src/integer_math/gcd.rs

pub struct GCD;

impl GCD {
    /// Euclidean gcd, iterative. `gcd(0, 0)` is 0.
    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        let mut a = left;
        let mut b = right;

        while b != 0 {
            let temp = b;
            b = a % b;
            a = temp;
        }

        a
    }

    /// Splits `(x, y)` into `(x / g, y / g)` for `g = gcd(x, y)`.
    ///
    /// These are the cofactors used to cancel one entry against another without dividing
    /// by it: `x' * y - y' * x = 0`.
    pub fn cofactors(x: u64, y: u64) -> (u64, u64) {
        let g = Self::find_gcd_pair(x, y);
        if g == 0 {
            return (0, 0);
        }
        (x / g, y / g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_pair() {
        assert_eq!(GCD::find_gcd_pair(48, 18), 6);
        assert_eq!(GCD::find_gcd_pair(18, 48), 6);
        assert_eq!(GCD::find_gcd_pair(17, 5), 1);
        assert_eq!(GCD::find_gcd_pair(0, 9), 9);
        assert_eq!(GCD::find_gcd_pair(9, 0), 9);
        assert_eq!(GCD::find_gcd_pair(0, 0), 0);
    }

    #[test]
    fn test_gcd_matches_num() {
        use num::Integer;
        for a in 0u64..60 {
            for b in 1u64..60 {
                assert_eq!(GCD::find_gcd_pair(a, b), a.gcd(&b), "gcd({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_cofactors_cancel() {
        let (a, b) = GCD::cofactors(6, 4);
        assert_eq!((a, b), (3, 2));
        assert_eq!(a * 4, b * 6);
        assert_eq!(GCD::find_gcd_pair(a, b), 1);
    }
}
