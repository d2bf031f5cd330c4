//! Enum for the file organization stored in the high nibble of the first
//! FAT byte.
//!
//! The organization is the top-level discriminant of the record: it decides
//! whether the attribute byte holds record-attribute flags or a special-file
//! subtype code.

use std::fmt;

/// Represents the organization of a file's records on disk.
///
/// # Values
/// - `Sequential`: records stored one after another
/// - `Relative`: fixed-size record cells addressed by record number
/// - `Indexed`: records reached through one or more key indexes
/// - `Directory`: a directory file
/// - `Special`: a non-regular file (FIFO, device, symlink)
/// - `Unrecognized`: any other code, preserved as the raw nibble value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrg {
    Sequential,
    Relative,
    Indexed,
    Directory,
    Special,
    Unrecognized(u8),
}

impl FileOrg {
    /// Creates a `FileOrg` instance from the raw nibble value.
    ///
    /// # Parameters
    /// - `nibble`: The high nibble of the first FAT byte.
    ///
    /// # Returns
    /// - The matching organization for codes 0 through 4.
    /// - `FileOrg::Unrecognized(nibble)` for any other value.
    pub fn from_nibble(nibble: u8) -> Self {
        match nibble {
            0 => FileOrg::Sequential,
            1 => FileOrg::Relative,
            2 => FileOrg::Indexed,
            3 => FileOrg::Directory,
            4 => FileOrg::Special,
            other => FileOrg::Unrecognized(other),
        }
    }
}

/// Displays the organization as its summary token; unrecognized codes fall
/// back to the raw value in hex rather than failing.
impl fmt::Display for FileOrg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOrg::Sequential => write!(f, "seq"),
            FileOrg::Relative => write!(f, "rel"),
            FileOrg::Indexed => write!(f, "idx"),
            FileOrg::Directory => write!(f, "dir"),
            FileOrg::Special => write!(f, "special"),
            FileOrg::Unrecognized(code) => write!(f, "0x{code:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_names() {
        assert_eq!(FileOrg::from_nibble(0), FileOrg::Sequential);
        assert_eq!(FileOrg::from_nibble(4), FileOrg::Special);
        assert_eq!(FileOrg::from_nibble(1).to_string(), "rel");
    }

    #[test]
    fn unknown_codes_fall_back_to_hex() {
        assert_eq!(FileOrg::from_nibble(7), FileOrg::Unrecognized(7));
        assert_eq!(FileOrg::from_nibble(7).to_string(), "0x07");
        assert_eq!(FileOrg::from_nibble(0x0F).to_string(), "0x0f");
    }
}
