//! Error types for setup and configuration.
//!
//! Per-tick simulation never fails: invalid numbers are clamped in place.
//! Errors only come out of binding a component to its host or validating a
//! configuration up front.

use core::fmt;

/// Errors that can occur while setting up gameplay components.
#[derive(Debug, Clone, PartialEq)]
pub enum JiggleError {
    /// No parent transform was supplied when binding a jiggle bone.
    MissingParent,
    /// Rotation bound must be in (0, 180) degrees.
    InvalidBound,
    /// Maximum health must be positive and finite.
    InvalidHealth,
    /// A sound bank needs at least one clip.
    EmptySoundBank,
}

impl fmt::Display for JiggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JiggleError::MissingParent => write!(f, "jiggle bone has no parent transform to drive"),
            JiggleError::InvalidBound => write!(f, "rotation bound must be in (0, 180) degrees"),
            JiggleError::InvalidHealth => write!(f, "max health must be positive and finite"),
            JiggleError::EmptySoundBank => write!(f, "sound bank has no clips"),
        }
    }
}

impl core::error::Error for JiggleError {}
