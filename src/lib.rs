// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Symbolic music theory: spelled chroma, intervals and pitches.
//!
//! The [`music`] module holds the algebra. [`config`] carries the spelling
//! and display preferences used by the command-line front end.

pub mod config;
pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
