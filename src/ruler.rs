//! Assembly of the ruler's tick marks.
//!
//! [`render`] turns the ruler parameters into an ordered list of [`Drawable`]s: first the steps of every EDO, then
//! the just intervals. Materializing the ticks (as text, SVG, etc.) is left to a [`RulerSink`].

use crate::color::Rgb;
use crate::edo;
use crate::encode;
use crate::encode::EdoStyles;
use crate::encode::LineLengths;
use crate::limit;
use crate::limit::LimitError;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Input of a single render pass.
#[derive(Clone, Debug)]
pub struct RulerParams {
    pub edo_values: Vec<u16>,
    pub prime_limit: u32,
    pub odd_limit: u32,
    pub ruler_height: u32,
    pub line_lengths: LineLengths,
}

impl RulerParams {
    pub fn new(edo_values: Vec<u16>, prime_limit: u32, odd_limit: u32, ruler_height: u32) -> Self {
        Self {
            edo_values,
            prime_limit,
            odd_limit,
            ruler_height,
            line_lengths: LineLengths::default(),
        }
    }

    pub fn with_line_lengths(mut self, line_lengths: LineLengths) -> Self {
        self.line_lengths = line_lengths;
        self
    }
}

/// The side of the ruler a tick mark is attached to.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    /// Just intervals
    Left,
    /// EDO steps
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// A labeled tick mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    /// Vertical offset from the unison in pixels.
    pub position: f64,
    pub label: String,
    pub color: Rgb,
    pub line_length: f64,
    pub side: Side,
}

/// Receiver of the [`Drawable`]s emitted by [`render_into`].
pub trait RulerSink {
    fn draw(&mut self, drawable: Drawable);
}

impl RulerSink for Vec<Drawable> {
    fn draw(&mut self, drawable: Drawable) {
        self.push(drawable);
    }
}

/// Error reported when the [`RulerParams`] are invalid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RulerError {
    /// No EDO was given.
    NoEdoValues,

    /// One of the EDOs has zero steps.
    EdoIsZero,

    /// The ruler has no extent.
    RulerHeightIsZero,

    /// The limits of the just intervals are invalid.
    Limit(LimitError),
}

impl From<LimitError> for RulerError {
    fn from(v: LimitError) -> Self {
        RulerError::Limit(v)
    }
}

/// Renders the ruler into a new [`Vec`].
///
/// # Examples
///
/// ```
/// # use tune_ruler::ruler::{self, RulerParams, Side};
/// let drawables = ruler::render(&RulerParams::new(vec![5], 3, 3, 600)).unwrap();
/// let labels: Vec<_> = drawables
///     .iter()
///     .map(|drawable| format!("{} {:.1} {}", drawable.side, drawable.position, drawable.label))
///     .collect();
///
/// assert_eq!(
///     labels,
///     [
///         "right 0.0 0\\5 0.0¢",
///         "right 120.0 1\\5 240.0¢",
///         "right 240.0 2\\5 480.0¢",
///         "right 360.0 3\\5 720.0¢",
///         "right 480.0 4\\5 960.0¢",
///         "right 600.0 5\\5 1200.0¢",
///         "left 0.0 1/1 0.0¢",
///         "left 249.0 4/3 498.0¢",
///         "left 351.0 3/2 702.0¢",
///         "left 600.0 2/1 1200.0¢",
///     ]
/// );
/// ```
pub fn render(params: &RulerParams) -> Result<Vec<Drawable>, RulerError> {
    let mut drawables = Vec::new();
    render_into(params, &mut drawables)?;
    Ok(drawables)
}

/// Renders the ruler into the given `sink`.
///
/// The parameters are validated before the first [`Drawable`] is emitted, s.t. a failing call leaves the sink
/// untouched.
pub fn render_into(params: &RulerParams, sink: &mut impl RulerSink) -> Result<(), RulerError> {
    if params.edo_values.contains(&0) {
        return Err(RulerError::EdoIsZero);
    }
    if params.ruler_height == 0 {
        return Err(RulerError::RulerHeightIsZero);
    }
    let edo_styles = EdoStyles::new(&params.edo_values, params.line_lengths)
        .ok_or(RulerError::NoEdoValues)?;
    let intervals = limit::generate_intervals(params.prime_limit, params.odd_limit)?;

    let ruler_height = f64::from(params.ruler_height);

    for &num_steps in &params.edo_values {
        let style = edo_styles.style_for(num_steps);
        for step in edo::edo_steps(num_steps) {
            let cents = step.cents();
            sink.draw(Drawable {
                position: encode::position(cents, ruler_height),
                label: format!("{step} {cents:.1}¢"),
                color: style.color,
                line_length: style.line_length,
                side: Side::Right,
            });
        }
    }

    for interval in intervals {
        let cents = interval.cents();
        let style = encode::ji_style(
            interval.dominant_prime(),
            params.prime_limit,
            &params.line_lengths,
        );
        sink.draw(Drawable {
            position: encode::position(cents, ruler_height),
            label: format!("{interval} {cents:.1}¢"),
            color: style.color,
            line_length: style.line_length,
            side: Side::Left,
        });
    }

    Ok(())
}
