//! Compare equal divisions of the octave (EDOs) against just intonation (JI) ratios.
//!
//! The crate computes two sets of tick marks for a vertical ruler spanning one octave:
//! the steps of one or more EDOs and all JI ratios within a given prime limit and odd limit.
//! Every tick is encoded as a [`ruler::Drawable`] which can be materialized by any [`ruler::RulerSink`].

pub mod color;
pub mod edo;
pub mod encode;
pub mod limit;
pub mod math;
pub mod ratio;
pub mod ruler;
