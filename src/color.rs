//! Colors of the ruler's tick marks.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Odd multiplier spreading consecutive primes across the RGB cube (Knuth's multiplicative hash constant).
const PRIME_HASH_MULTIPLIER: u32 = 2_654_435_761;

/// Colors above this luminance are hard to read on a light background.
const BRIGHTNESS_THRESHOLD: f64 = 200.0;

const DARKEN_FACTOR: f64 = 0.7;

/// Color of the unison and the octave.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0, 0, 0);

/// An sRGB color with 8 bits per channel.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray with all channels set to `lightness`.
    pub const fn gray(lightness: u8) -> Self {
        Self::new(lightness, lightness, lightness)
    }

    /// Derives a legible color from `prime` alone.
    ///
    /// The prime is hashed into the three color channels. Colors that would be too bright are darkened.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tune_ruler::color::Rgb;
    /// assert_eq!(Rgb::for_prime(3), Rgb::new(166, 109, 19));
    /// assert_eq!(Rgb::for_prime(5), Rgb::new(21, 96, 117));
    /// assert_eq!(Rgb::for_prime(7), Rgb::new(132, 83, 215));
    ///
    /// // Too bright, thus darkened
    /// assert_eq!(Rgb::for_prime(23), Rgb::new(175, 166, 161));
    /// ```
    pub fn for_prime(prime: u32) -> Self {
        let hash = prime.wrapping_mul(PRIME_HASH_MULTIPLIER);
        let [_, r, g, b] = hash.to_be_bytes();
        let color = Self::new(r, g, b);

        if color.luminance() > BRIGHTNESS_THRESHOLD {
            color.darkened(DARKEN_FACTOR)
        } else {
            color
        }
    }

    /// Perceptual luminance in the range `0.0..=255.0`.
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    fn darkened(self, factor: f64) -> Self {
        let darken = |channel: u8| (f64::from(channel) * factor).floor() as u8;
        Self::new(darken(self.r), darken(self.g), darken(self.b))
    }
}

/// Formats the color as CSS value.
///
/// ```
/// # use tune_ruler::color::Rgb;
/// assert_eq!(Rgb::new(1, 22, 255).to_string(), "rgb(1, 22, 255)");
/// ```
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
