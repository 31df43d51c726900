//! Visual encoding of intervals: vertical position, tick color and tick length.

use crate::color::Rgb;
use crate::color::DEFAULT_COLOR;
use crate::math;
use crate::ratio::CENTS_PER_OCTAVE;

/// Lightness of the finest EDO in a batch. The coarsest EDO is drawn in black.
const MAX_EDO_LIGHTNESS: f64 = 160.0;

/// Tick lengths in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineLengths {
    /// Length of the tick with the smallest prime rank.
    pub min: f64,
    /// Length of the tick with the largest prime rank.
    pub max: f64,
    /// Length of the unison and octave ticks.
    pub constant: f64,
    /// Length of the ticks of the finest EDO.
    pub edo_min: f64,
    /// Length of the ticks of the coarsest EDO.
    pub edo_max: f64,
}

impl Default for LineLengths {
    fn default() -> Self {
        Self {
            min: 25.0,
            max: 400.0,
            constant: 100.0,
            edo_min: 20.0,
            edo_max: 50.0,
        }
    }
}

/// Color and length of a tick mark.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickStyle {
    pub color: Rgb,
    pub line_length: f64,
}

/// Maps `cents` linearly onto a ruler of `ruler_height` pixels spanning one octave.
///
/// # Examples
///
/// ```
/// # use tune_ruler::encode;
/// assert_eq!(encode::position(0.0, 800.0), 0.0);
/// assert_eq!(encode::position(600.0, 800.0), 400.0);
/// assert_eq!(encode::position(1200.0, 800.0), 800.0);
/// ```
pub fn position(cents: f64, ruler_height: f64) -> f64 {
    cents / CENTS_PER_OCTAVE * ruler_height
}

/// Interpolates the tick length of `prime` by its rank among all primes up to `prime_limit`.
///
/// A `prime` beyond `prime_limit` is ranked as if it was part of the list. If the list consists of a single prime
/// the maximum length is used.
///
/// # Examples
///
/// ```
/// # use tune_ruler::encode::{self, LineLengths};
/// let lengths = LineLengths::default();
///
/// // Primes 2, 3, 5, 7
/// assert_eq!(encode::line_length_for_prime(2, 7, &lengths), 25.0);
/// assert_eq!(encode::line_length_for_prime(3, 7, &lengths), 150.0);
/// assert_eq!(encode::line_length_for_prime(5, 7, &lengths), 275.0);
/// assert_eq!(encode::line_length_for_prime(7, 7, &lengths), 400.0);
///
/// // Only prime 2
/// assert_eq!(encode::line_length_for_prime(2, 2, &lengths), 400.0);
/// ```
pub fn line_length_for_prime(prime: u32, prime_limit: u32, lengths: &LineLengths) -> f64 {
    let primes = math::primes_up_to(prime_limit);
    let (rank, num_primes) = match primes.binary_search(&prime) {
        Ok(rank) => (rank, primes.len()),
        Err(rank) => (rank, primes.len() + 1),
    };

    if num_primes <= 1 {
        return lengths.max;
    }

    interpolate(lengths.min, lengths.max, rank as f64 / (num_primes - 1) as f64)
}

/// Determines the tick style of a just interval with the given dominant prime.
///
/// The unison (no prime) and the octave (prime 2) are reference marks with a constant length and the default color.
///
/// # Examples
///
/// ```
/// # use tune_ruler::color::{Rgb, DEFAULT_COLOR};
/// # use tune_ruler::encode::{self, LineLengths, TickStyle};
/// let lengths = LineLengths::default();
///
/// assert_eq!(
///     encode::ji_style(1, 5, &lengths),
///     TickStyle { color: DEFAULT_COLOR, line_length: 100.0 }
/// );
/// assert_eq!(
///     encode::ji_style(5, 5, &lengths),
///     TickStyle { color: Rgb::for_prime(5), line_length: 400.0 }
/// );
/// ```
pub fn ji_style(dominant_prime: u32, prime_limit: u32, lengths: &LineLengths) -> TickStyle {
    if dominant_prime <= 2 {
        return TickStyle {
            color: DEFAULT_COLOR,
            line_length: lengths.constant,
        };
    }

    TickStyle {
        color: Rgb::for_prime(dominant_prime),
        line_length: line_length_for_prime(dominant_prime, prime_limit, lengths),
    }
}

/// Tick styles of several EDOs rendered side by side.
///
/// Each EDO is placed on a gray scale between the coarsest (black, long ticks) and the finest (light gray, short
/// ticks) EDO of the batch.
#[derive(Clone, Debug)]
pub struct EdoStyles {
    min_num_steps: u16,
    max_num_steps: u16,
    lengths: LineLengths,
}

impl EdoStyles {
    /// Returns [`None`] if `edo_values` is empty.
    pub fn new(edo_values: &[u16], lengths: LineLengths) -> Option<Self> {
        Some(Self {
            min_num_steps: edo_values.iter().copied().min()?,
            max_num_steps: edo_values.iter().copied().max()?,
            lengths,
        })
    }

    /// # Examples
    ///
    /// ```
    /// # use tune_ruler::color::Rgb;
    /// # use tune_ruler::encode::{EdoStyles, LineLengths, TickStyle};
    /// let styles = EdoStyles::new(&[12, 22, 32], LineLengths::default()).unwrap();
    ///
    /// assert_eq!(
    ///     styles.style_for(12),
    ///     TickStyle { color: Rgb::gray(0), line_length: 50.0 }
    /// );
    /// assert_eq!(
    ///     styles.style_for(22),
    ///     TickStyle { color: Rgb::gray(80), line_length: 35.0 }
    /// );
    /// assert_eq!(
    ///     styles.style_for(32),
    ///     TickStyle { color: Rgb::gray(160), line_length: 20.0 }
    /// );
    /// ```
    pub fn style_for(&self, num_steps: u16) -> TickStyle {
        let fineness = self.fineness_of(num_steps);
        TickStyle {
            color: Rgb::gray(interpolate(0.0, MAX_EDO_LIGHTNESS, fineness).round() as u8),
            line_length: interpolate(self.lengths.edo_max, self.lengths.edo_min, fineness),
        }
    }

    /// Normalizes `num_steps` to `0.0..=1.0` within the batch. A batch of equal EDOs is placed in the middle.
    fn fineness_of(&self, num_steps: u16) -> f64 {
        if self.min_num_steps == self.max_num_steps {
            return 0.5;
        }

        let fineness = f64::from(num_steps.saturating_sub(self.min_num_steps))
            / f64::from(self.max_num_steps - self.min_num_steps);
        fineness.clamp(0.0, 1.0)
    }
}

fn interpolate(from: f64, to: f64, fraction: f64) -> f64 {
    from + (to - from) * fraction
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn position_is_monotonic() {
        let positions: Vec<_> = (0..=1200)
            .map(|cents| position(f64::from(cents), 1000.0))
            .collect();

        assert_eq!(positions.first(), Some(&0.0));
        assert_eq!(positions.last(), Some(&1000.0));
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn line_lengths_of_eleven_limit() {
        let lengths = LineLengths::default();

        // Primes 2, 3, 5, 7, 11
        let test_cases = [(3, 118.75), (5, 212.5), (7, 306.25), (11, 400.0)];
        for (prime, expected) in test_cases {
            assert_approx_eq!(line_length_for_prime(prime, 11, &lengths), expected);
        }
    }

    #[test]
    fn line_length_of_prime_beyond_limit() {
        let lengths = LineLengths::default();

        // Primes 2, 3, 5 + 13
        assert_approx_eq!(line_length_for_prime(13, 5, &lengths), 400.0);
        assert_approx_eq!(line_length_for_prime(5, 5, &lengths), 400.0);
        // Primes 2, 3, 5, 7, 11 + 13
        assert_approx_eq!(line_length_for_prime(13, 11, &lengths), 400.0);
        assert_approx_eq!(line_length_for_prime(11, 11, &lengths), 400.0);
    }

    #[test]
    fn line_length_of_single_prime_is_max() {
        let lengths = LineLengths::default();

        let line_length = line_length_for_prime(2, 2, &lengths);
        assert!(line_length.is_finite());
        assert_eq!(line_length, lengths.max);
    }

    #[test]
    fn ji_style_of_reference_marks() {
        let lengths = LineLengths::default();

        for prime_limit in [2, 3, 7, 31] {
            for reference_prime in [1, 2] {
                let style = ji_style(reference_prime, prime_limit, &lengths);
                assert_eq!(style.color, DEFAULT_COLOR);
                assert_eq!(style.line_length, lengths.constant);
            }
        }
    }

    #[test]
    fn ji_style_uses_custom_lengths() {
        let lengths = LineLengths {
            min: 10.0,
            max: 20.0,
            ..LineLengths::default()
        };

        // Primes 2, 3, 5
        assert_eq!(
            ji_style(3, 5, &lengths),
            TickStyle {
                color: Rgb::for_prime(3),
                line_length: 15.0,
            }
        );
    }

    #[test]
    fn single_edo_is_placed_in_the_middle() {
        let styles = EdoStyles::new(&[31], LineLengths::default()).unwrap();

        let style = styles.style_for(31);
        assert_eq!(style.color, Rgb::gray(80));
        assert_eq!(style.line_length, 35.0);
    }

    #[test]
    fn equal_edos_are_placed_in_the_middle() {
        let styles = EdoStyles::new(&[12, 12], LineLengths::default()).unwrap();

        assert_eq!(styles.style_for(12).color, Rgb::gray(80));
    }

    #[test]
    fn edo_styles_are_ordered_by_fineness() {
        let styles = EdoStyles::new(&[53, 5, 12, 31], LineLengths::default()).unwrap();

        let line_lengths: Vec<_> = [5, 12, 31, 53]
            .into_iter()
            .map(|num_steps| styles.style_for(num_steps).line_length)
            .collect();
        assert!(line_lengths.windows(2).all(|pair| pair[0] > pair[1]));

        let lightnesses: Vec<_> = [5, 12, 31, 53]
            .into_iter()
            .map(|num_steps| styles.style_for(num_steps).color.r)
            .collect();
        assert!(lightnesses.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn no_edo_styles_for_empty_batch() {
        assert!(EdoStyles::new(&[], LineLengths::default()).is_none());
    }
}
