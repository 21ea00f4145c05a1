use std::cmp::Ordering;
use std::fmt::Display;

/// Absolute tolerance, lengths are in millimetres and areas rarely exceed 10⁷ mm²
const EPSILON: f64 = 1e-6;
const ULPS: i64 = 64;

///Floating point number compared with a tolerance, see [`float_cmp::approx_eq!()`].
///Used to check placements and area sums, never inside the packers.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = EPSILON, ulps = ULPS)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_compare_equal() {
        let sum = [0.1, 0.2, 0.3].iter().sum::<f64>();
        assert_ne!(sum, 0.6);
        assert_eq!(FPA(sum), FPA(0.6));
        assert!(FPA(sum) <= FPA(0.6));
        assert!(FPA(0.6 + 1e-3) > FPA(0.6));
    }
}
