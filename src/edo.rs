//! Steps of an equal division of the octave.

use crate::ratio::CENTS_PER_OCTAVE;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// A single step of an `n`-EDO.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdoStep {
    index: u16,
    num_steps: u16,
}

impl EdoStep {
    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn num_steps(&self) -> u16 {
        self.num_steps
    }

    /// ```
    /// # use tune_ruler::edo;
    /// let steps = edo::edo_steps(12);
    /// assert_eq!(steps[7].cents(), 700.0);
    /// assert_eq!(steps[12].cents(), 1200.0);
    /// ```
    pub fn cents(&self) -> f64 {
        CENTS_PER_OCTAVE * f64::from(self.index) / f64::from(self.num_steps)
    }
}

/// ```
/// # use tune_ruler::edo;
/// assert_eq!(edo::edo_steps(19)[5].to_string(), "5\\19");
/// ```
impl Display for EdoStep {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}\\{}", self.index, self.num_steps)
    }
}

/// Returns the steps `0..=num_steps` of the given EDO, i.e. including the unison and the octave.
///
/// A zero-step EDO yields no steps at all.
pub fn edo_steps(num_steps: u16) -> Vec<EdoStep> {
    if num_steps == 0 {
        return Vec::new();
    }

    (0..=num_steps)
        .map(|index| EdoStep { index, num_steps })
        .collect()
}
