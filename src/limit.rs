//! Enumeration of just intonation intervals within a prime limit and an odd limit.

use crate::math;
use crate::ratio::Ratio;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Dominant prime assigned to intervals without any prime factor, i.e. the unison 1/1.
pub const NO_PRIME: u32 = 1;

/// A reduced just intonation interval within the range of one octave.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    numer: u32,
    denom: u32,
    cents: f64,
    dominant_prime: u32,
}

impl Interval {
    fn new(numer: u32, denom: u32) -> Self {
        Self {
            numer,
            denom,
            cents: Ratio::from_fraction(numer, denom).as_cents(),
            dominant_prime: math::dominant_prime(numer, denom).unwrap_or(NO_PRIME),
        }
    }

    pub fn numer(&self) -> u32 {
        self.numer
    }

    pub fn denom(&self) -> u32 {
        self.denom
    }

    pub fn cents(&self) -> f64 {
        self.cents
    }

    /// The largest prime factor of the numerator and the denominator or [`NO_PRIME`] for the unison.
    pub fn dominant_prime(&self) -> u32 {
        self.dominant_prime
    }

    pub fn is_unison(&self) -> bool {
        self.numer == 1 && self.denom == 1
    }

    pub fn is_octave(&self) -> bool {
        self.numer == 2 && self.denom == 1
    }
}

/// ```
/// # use tune_ruler::limit;
/// let intervals = limit::generate_intervals(3, 3).unwrap();
/// let formatted: Vec<_> = intervals.iter().map(ToString::to_string).collect();
/// assert_eq!(formatted, ["1/1", "4/3", "3/2", "2/1"]);
/// ```
impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// Error reported when the limits of [`generate_intervals`] are out of range.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LimitError {
    /// The prime limit is smaller than 2.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tune_ruler::limit::{self, LimitError};
    /// assert_eq!(limit::generate_intervals(1, 5), Err(LimitError::PrimeLimitTooSmall(1)));
    /// ```
    PrimeLimitTooSmall(u32),

    /// The odd limit is smaller than 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tune_ruler::limit::{self, LimitError};
    /// assert_eq!(limit::generate_intervals(5, 0), Err(LimitError::OddLimitTooSmall(0)));
    /// ```
    OddLimitTooSmall(u32),
}

/// Enumerates all reduced ratios between 1/1 and 2/1 (inclusive) within the given limits.
///
/// A ratio is accepted if none of its prime factors exceeds `prime_limit` and the odd parts of its numerator and
/// denominator do not exceed `odd_limit`. The result is sorted by ascending cents.
///
/// The candidates are checked by brute force which takes `O(odd_limit²)` steps.
///
/// # Examples
///
/// ```
/// # use tune_ruler::limit;
/// let intervals = limit::generate_intervals(5, 5).unwrap();
/// let formatted: Vec<_> = intervals
///     .iter()
///     .map(|interval| format!("{interval} {:.1}", interval.cents()))
///     .collect();
///
/// assert_eq!(
///     formatted,
///     [
///         "1/1 0.0", "6/5 315.6", "5/4 386.3", "4/3 498.0",
///         "3/2 702.0", "8/5 813.7", "5/3 884.4", "2/1 1200.0",
///     ]
/// );
/// ```
pub fn generate_intervals(prime_limit: u32, odd_limit: u32) -> Result<Vec<Interval>, LimitError> {
    if prime_limit < 2 {
        return Err(LimitError::PrimeLimitTooSmall(prime_limit));
    }
    if odd_limit < 1 {
        return Err(LimitError::OddLimitTooSmall(odd_limit));
    }

    let max_term = odd_limit.saturating_mul(2);

    let mut intervals = Vec::new();
    for numer in 1..=max_term {
        for denom in (numer / 2 + numer % 2).max(1)..=numer {
            if is_within_limits(numer, denom, prime_limit, odd_limit) {
                intervals.push(Interval::new(numer, denom));
            }
        }
    }

    intervals.sort_by(|a, b| a.cents.total_cmp(&b.cents));
    Ok(intervals)
}

fn is_within_limits(numer: u32, denom: u32, prime_limit: u32, odd_limit: u32) -> bool {
    math::gcd(numer, denom) == 1
        && u64::from(numer) <= 2 * u64::from(denom)
        && math::odd_part(numer).max(math::odd_part(denom)) <= odd_limit
        && math::dominant_prime(numer, denom).unwrap_or(NO_PRIME) <= prime_limit
}
