//! Enum for the record format stored in the low nibble of the first FAT
//! byte.

use std::fmt;

/// Represents the framing of individual records inside the file.
///
/// # Values
/// - `Undefined`: no record structure
/// - `Fixed`: fixed-length records
/// - `Variable`: variable-length records
/// - `Vfc`: variable-length records with a fixed-length control area
/// - `Stream`: byte stream, records delimited by CRLF
/// - `StreamLf`: byte stream, records delimited by LF
/// - `StreamCr`: byte stream, records delimited by CR
/// - `Unrecognized`: any other code, preserved as the raw nibble value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Undefined,
    Fixed,
    Variable,
    Vfc,
    Stream,
    StreamLf,
    StreamCr,
    Unrecognized(u8),
}

impl RecordFormat {
    /// Creates a `RecordFormat` instance from the raw nibble value.
    ///
    /// # Parameters
    /// - `nibble`: The low nibble of the first FAT byte.
    ///
    /// # Returns
    /// - The matching format for codes 0 through 6.
    /// - `RecordFormat::Unrecognized(nibble)` for any other value.
    pub fn from_nibble(nibble: u8) -> Self {
        match nibble {
            0 => RecordFormat::Undefined,
            1 => RecordFormat::Fixed,
            2 => RecordFormat::Variable,
            3 => RecordFormat::Vfc,
            4 => RecordFormat::Stream,
            5 => RecordFormat::StreamLf,
            6 => RecordFormat::StreamCr,
            other => RecordFormat::Unrecognized(other),
        }
    }
}

/// Displays the format as its summary token; unrecognized codes fall back
/// to the raw value in hex rather than failing.
impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Undefined => write!(f, "udf"),
            RecordFormat::Fixed => write!(f, "fix"),
            RecordFormat::Variable => write!(f, "var"),
            RecordFormat::Vfc => write!(f, "vfc"),
            RecordFormat::Stream => write!(f, "stm"),
            RecordFormat::StreamLf => write!(f, "stmlf"),
            RecordFormat::StreamCr => write!(f, "stmcr"),
            RecordFormat::Unrecognized(code) => write!(f, "0x{code:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_names() {
        assert_eq!(RecordFormat::from_nibble(1), RecordFormat::Fixed);
        assert_eq!(RecordFormat::from_nibble(3).to_string(), "vfc");
        assert_eq!(RecordFormat::from_nibble(6).to_string(), "stmcr");
    }

    #[test]
    fn unknown_codes_fall_back_to_hex() {
        assert_eq!(RecordFormat::from_nibble(15), RecordFormat::Unrecognized(15));
        assert_eq!(RecordFormat::from_nibble(15).to_string(), "0x0f");
    }
}
