//! Linear and logarithmic representations of pitch distances.

/// Number of cents per octave.
pub const CENTS_PER_OCTAVE: f64 = 1200.0;

/// The relative distance between two pitches, stored as linear frequency factor.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use tune_ruler::ratio::Ratio;
/// assert_approx_eq!(Ratio::from_fraction(3, 2).as_cents(), 701.955);
/// assert_approx_eq!(Ratio::from_fraction(4, 1).as_octaves(), 2.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ratio {
    float_value: f64,
}

impl Ratio {
    /// Creates a [`Ratio`] from an integer fraction.
    ///
    /// # Panics
    ///
    /// Panics if `numer` or `denom` is zero.
    ///
    /// ```should_panic
    /// # use tune_ruler::ratio::Ratio;
    /// Ratio::from_fraction(3, 0);
    /// ```
    pub fn from_fraction(numer: u32, denom: u32) -> Self {
        assert!(
            numer > 0 && denom > 0,
            "Fraction must be positive but was {numer}/{denom}"
        );
        Self {
            float_value: f64::from(numer) / f64::from(denom),
        }
    }

    pub fn as_cents(self) -> f64 {
        self.as_octaves() * CENTS_PER_OCTAVE
    }

    pub fn as_octaves(self) -> f64 {
        self.float_value.log2()
    }
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn octave_and_unison_are_exact() {
        assert_eq!(Ratio::from_fraction(2, 1).as_cents(), 1200.0);
        assert_eq!(Ratio::from_fraction(4, 2).as_cents(), 1200.0);
        assert_eq!(Ratio::from_fraction(1, 1).as_cents(), 0.0);
        assert_eq!(Ratio::from_fraction(7, 7).as_octaves(), 0.0);
    }

    #[test]
    fn cents_of_just_intervals() {
        let test_cases = [
            ((9, 8), 203.910),
            ((6, 5), 315.641),
            ((5, 4), 386.314),
            ((4, 3), 498.045),
            ((7, 5), 582.512),
            ((8, 5), 813.686),
            ((7, 4), 968.826),
        ];

        for ((numer, denom), expected) in test_cases {
            assert_approx_eq!(Ratio::from_fraction(numer, denom).as_cents(), expected, 0.001);
        }
    }

    #[test]
    fn ratios_are_ordered_by_size() {
        assert!(Ratio::from_fraction(9, 8) < Ratio::from_fraction(8, 7));
        assert!(Ratio::from_fraction(7, 4) > Ratio::from_fraction(16, 9));
    }
}
