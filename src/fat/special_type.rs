//! Enum for the special-file subtype code.
//!
//! When the file organization is `Special`, the attribute byte of the FAT
//! stops being a flag set and holds one of these codes instead.

use std::fmt;

/// Represents the subtype of a special (non-regular) file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialType {
    None,
    Fifo,
    Character,
    Block,
    Symlink,
    SymbolicLink,
    Unrecognized(u8),
}

impl SpecialType {
    /// Creates a `SpecialType` instance from the raw attribute byte.
    ///
    /// # Parameters
    /// - `byte`: The whole attribute byte of the FAT record.
    ///
    /// # Returns
    /// - The matching subtype for codes 0 through 5.
    /// - `SpecialType::Unrecognized(byte)` for any other value.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => SpecialType::None,
            1 => SpecialType::Fifo,
            2 => SpecialType::Character,
            3 => SpecialType::Block,
            4 => SpecialType::Symlink,
            5 => SpecialType::SymbolicLink,
            other => SpecialType::Unrecognized(other),
        }
    }
}

/// Displays the subtype as its summary token; unrecognized codes fall back
/// to the raw value in hex rather than failing.
impl fmt::Display for SpecialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialType::None => write!(f, "none"),
            SpecialType::Fifo => write!(f, "fifo"),
            SpecialType::Character => write!(f, "char"),
            SpecialType::Block => write!(f, "block"),
            SpecialType::Symlink => write!(f, "symlink"),
            SpecialType::SymbolicLink => write!(f, "symbolic_link"),
            SpecialType::Unrecognized(code) => write!(f, "0x{code:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_names() {
        assert_eq!(SpecialType::from_byte(0).to_string(), "none");
        assert_eq!(SpecialType::from_byte(2).to_string(), "char");
        assert_eq!(SpecialType::from_byte(5).to_string(), "symbolic_link");
    }

    #[test]
    fn unknown_codes_fall_back_to_hex() {
        assert_eq!(SpecialType::from_byte(0xC3), SpecialType::Unrecognized(0xC3));
        assert_eq!(SpecialType::from_byte(0xC3).to_string(), "0xc3");
    }
}
