//! Error types for mode construction and mode-token parsing.

use std::error::Error;
use std::fmt;

/// Errors from building or parsing a [`Mode`](crate::Mode).
///
/// These are configuration errors: a front end is expected to catch them
/// and fall back to printing [`USAGE`](crate::USAGE) instead of running a
/// simulation with malformed input.
#[derive(Clone, Debug, PartialEq)]
pub enum ModeError {
    /// The caller asked for the usage text instead of a run.
    HelpRequested,
    /// A token did not have the `amplitude,frequency` shape.
    MalformedToken {
        /// The offending token as given.
        token: String,
    },
    /// The amplitude half of a token is not a real number.
    InvalidAmplitude {
        /// The offending token as given.
        token: String,
    },
    /// The frequency half of a token is not an integer.
    InvalidFrequency {
        /// The offending token as given.
        token: String,
    },
    /// The frequency parsed as an integer but is below zero.
    NegativeFrequency {
        /// The offending token as given.
        token: String,
        /// The parsed value.
        value: i64,
    },
    /// The amplitude is NaN or infinite.
    NonFiniteAmplitude {
        /// The rejected amplitude.
        value: f64,
    },
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HelpRequested => write!(f, "usage requested"),
            Self::MalformedToken { token } => {
                write!(f, "mode '{token}' is not of the form amplitude,frequency")
            }
            Self::InvalidAmplitude { token } => {
                write!(f, "mode '{token}': amplitude is not a real number")
            }
            Self::InvalidFrequency { token } => {
                write!(f, "mode '{token}': frequency is not an integer")
            }
            Self::NegativeFrequency { token, value } => {
                write!(f, "mode '{token}': frequency must be >= 0, got {value}")
            }
            Self::NonFiniteAmplitude { value } => {
                write!(f, "amplitude must be finite, got {value}")
            }
        }
    }
}

impl Error for ModeError {}
