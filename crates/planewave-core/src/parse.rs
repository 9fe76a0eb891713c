//! Mode-token parsing for command-line style front ends.
//!
//! Each token has the form `amplitude,frequency`, for example `1,2` or
//! `0.5,7`. Amplitudes are real numbers, frequencies non-negative integers.
//! An empty token list means the canonical single mode [`DEFAULT_MODE`].

use crate::error::ModeError;
use crate::mode::{Mode, ModeList};
use smallvec::smallvec;

/// The mode used when no tokens are given: amplitude 1, two peaks.
pub const DEFAULT_MODE: Mode = Mode::new(1.0, 2);

/// Help text shown when parsing fails or `help` is requested.
pub const USAGE: &str = "\
usage: plane_wave [help | AMPLITUDE,FREQUENCY ...]

try: plane_wave 1,2
    The 1 is the amplitude of the initial sine wave, the 2 is the
    number of peaks it has across the grid.

try: plane_wave 1,1 3,4
    The initial condition is a sine wave of amplitude 1 with 1 peak,
    plus a sine wave of amplitude 3 with 4 peaks.

With no arguments the simulation starts from 1,2.";

/// Parse a single `amplitude,frequency` token.
///
/// Whitespace around either half is ignored.
pub fn parse_mode(token: &str) -> Result<Mode, ModeError> {
    let mut parts = token.split(',');
    let (amp, freq) = match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(f), None) => (a.trim(), f.trim()),
        _ => {
            return Err(ModeError::MalformedToken {
                token: token.to_string(),
            })
        }
    };

    let amplitude: f64 = amp.parse().map_err(|_| ModeError::InvalidAmplitude {
        token: token.to_string(),
    })?;
    let raw: i64 = freq.parse().map_err(|_| ModeError::InvalidFrequency {
        token: token.to_string(),
    })?;
    if raw < 0 {
        return Err(ModeError::NegativeFrequency {
            token: token.to_string(),
            value: raw,
        });
    }
    let frequency = u32::try_from(raw).map_err(|_| ModeError::InvalidFrequency {
        token: token.to_string(),
    })?;

    let mode = Mode::new(amplitude, frequency);
    mode.validate()?;
    Ok(mode)
}

/// Parse a list of mode tokens.
///
/// A leading `help` token returns [`ModeError::HelpRequested`]. An empty
/// list yields `[DEFAULT_MODE]`. Parsing stops at the first bad token.
///
/// # Examples
///
/// ```
/// use planewave_core::{parse_mode_list, Mode, DEFAULT_MODE};
///
/// let modes = parse_mode_list(["1,1", "3,4"]).unwrap();
/// assert_eq!(modes.as_slice(), &[Mode::new(1.0, 1), Mode::new(3.0, 4)]);
///
/// let none: [&str; 0] = [];
/// assert_eq!(parse_mode_list(none).unwrap().as_slice(), &[DEFAULT_MODE]);
/// ```
pub fn parse_mode_list<I, S>(tokens: I) -> Result<ModeList, ModeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = tokens.into_iter().peekable();
    match tokens.peek() {
        None => return Ok(smallvec![DEFAULT_MODE]),
        Some(first) if first.as_ref().trim() == "help" => {
            return Err(ModeError::HelpRequested)
        }
        Some(_) => {}
    }
    tokens.map(|t| parse_mode(t.as_ref())).collect()
}
