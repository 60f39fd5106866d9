// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives for ophis.
//!
//! This module provides spelled chroma, interval qualities and numbers,
//! and pitches, together with the arithmetic that connects them.

pub mod addend;
pub mod chroma;
pub mod chroma_set;
pub mod interval;
pub mod pitch;
pub mod quality;

pub use addend::{Addend, Difference, Distance, Sum};
pub use chroma::{essential_set, Chroma, Letter, LetterKey, Modifier, Preference, ALL_CHROMA};
pub use chroma_set::ChromaSet;
pub use interval::{Interval, QualifiedInterval};
pub use pitch::{Pitch, MIDDLE_C};
pub use quality::{NumberKind, Quality};

/// Signed distance in half-steps (semitones)
pub type HalfSteps = i32;

/// Half-steps per octave
pub const OCTAVE: HalfSteps = 12;

/// Split `n` into a remainder in `0..modulus` and a whole count of
/// moduli, flooring toward negative infinity.
pub fn octave_reduce(n: HalfSteps, modulus: HalfSteps) -> (HalfSteps, i32) {
    (n.rem_euclid(modulus), n.div_euclid(modulus))
}

/// Text renderings shared by chroma, intervals and pitches
pub trait Notation {
    fn ascii(&self) -> String;
    fn unicode(&self) -> String;
    fn verbose(&self) -> String;
    fn lilypond(&self) -> String;
}
