//! Leapfrog phase state machine.

use std::fmt;

/// Which field component the next transition updates.
///
/// The recurrence starts in [`Phase::Electric`] and alternates on every
/// transition; the component not named by the phase is carried forward
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Update the electric field from the magnetic field's spatial difference.
    Electric,
    /// Update the magnetic field from the electric field's spatial difference.
    Magnetic,
}

impl Phase {
    /// Phase of the first transition (`n = 0`).
    pub const INITIAL: Self = Self::Electric;

    /// The phase that follows this one.
    pub fn next(self) -> Self {
        match self {
            Self::Electric => Self::Magnetic,
            Self::Magnetic => Self::Electric,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electric => write!(f, "electric"),
            Self::Magnetic => write!(f, "magnetic"),
        }
    }
}
