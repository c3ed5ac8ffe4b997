//! Distance Functions
//!
//! Weighting curves describing how strongly a bit at distance `i` pulls
//! on its neighbour.

/// Influence decay curve between bit positions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceFunction {
    /// `distance^-i`, evaluated in double precision
    Exponential,
    /// `1 / (1 + i * distance)`
    Linear,
    /// `1 / (1 + i^2 * distance)`
    Quadratic,
}

impl DistanceFunction {
    /// Weight of a neighbour `i` bits away (`i` in 1..=12)
    #[inline]
    pub fn weight(self, distance: f32, i: i32) -> f32 {
        match self {
            DistanceFunction::Exponential => f64::from(distance).powf(f64::from(-i)) as f32,
            DistanceFunction::Linear => 1.0 / (1.0 + i as f32 * distance),
            DistanceFunction::Quadratic => 1.0 / (1.0 + (i * i) as f32 * distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential() {
        assert_relative_eq!(DistanceFunction::Exponential.weight(2.0, 1), 0.5);
        assert_relative_eq!(DistanceFunction::Exponential.weight(2.0, 3), 0.125);
        // distance below 1 grows with i
        assert!(DistanceFunction::Exponential.weight(0.5, 2) > 1.0);
    }

    #[test]
    fn test_exponential_rounds_from_double() {
        // double precision pow narrowed to f32, bit for bit
        let cases = [
            (2.14537621f32, 1, 0x3eeea71d),
            (2.14537621, 6, 0x3c2808e7),
            (2.14537621, 12, 0x38dc9760),
            (1.1, 12, 0x3ea32391),
            (9.08618164, 6, 0x35ee84a4),
            (9.08618164, 12, 0x2c5e3ae6),
        ];
        for (d, i, bits) in cases {
            let w = DistanceFunction::Exponential.weight(d, i);
            assert_eq!(w.to_bits(), bits, "d={d} i={i}");
        }
    }

    #[test]
    fn test_exponential_overflow_saturates_to_infinity() {
        let d = 0.00036806846;
        assert!(DistanceFunction::Exponential.weight(d, 12).is_infinite());
        assert!(DistanceFunction::Exponential.weight(d, 11).is_finite());
    }

    #[test]
    fn test_linear() {
        assert_relative_eq!(DistanceFunction::Linear.weight(0.5, 2), 0.5);
        assert_relative_eq!(DistanceFunction::Linear.weight(1.0, 1), 0.5);
    }

    #[test]
    fn test_quadratic() {
        assert_relative_eq!(DistanceFunction::Quadratic.weight(0.25, 2), 0.5);
        assert_relative_eq!(DistanceFunction::Quadratic.weight(1.0, 3), 0.1);
    }

    #[test]
    fn test_weights_decay_with_distance() {
        for f in [
            DistanceFunction::Exponential,
            DistanceFunction::Linear,
            DistanceFunction::Quadratic,
        ] {
            for i in 1..12 {
                assert!(
                    f.weight(1.5, i + 1) < f.weight(1.5, i),
                    "{f:?} not decaying at i={i}"
                );
            }
        }
    }
}
