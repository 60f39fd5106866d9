// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory engine.

use thiserror::Error;

/// Errors raised by chroma, interval and pitch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A numeric coordinate fell outside its allowed range
    #[error("{what} {value} is out of range {min}..={max}{hint}")]
    Range {
        what: &'static str,
        value: i32,
        min: i32,
        max: i32,
        hint: &'static str,
    },

    /// Reduction was asked to collapse chroma that do not share a value
    #[error("chroma are not enharmonic: {members}")]
    NotEnharmonic { members: String },

    /// Reduction was asked to collapse an empty set
    #[error("cannot reduce an empty chroma set")]
    EmptySet,

    /// No interval satisfies the requested coordinates
    #[error("no interval matches {query}")]
    NoMatch { query: String },

    /// The quality does not exist for this interval number (e.g. a major fifth)
    #[error("{quality} is not a valid quality for interval number {number}")]
    InvalidQuality { quality: &'static str, number: u8 },

    #[error("unknown chroma name: {0:?}")]
    UnknownChroma(String),

    #[error("unknown letter: {0:?}")]
    UnknownLetter(String),

    #[error("unknown interval name: {0:?}")]
    UnknownInterval(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
