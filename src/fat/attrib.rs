//! Classification of the FAT attribute byte.
//!
//! The attribute byte has no meaning of its own: depending on the file
//! organization it is either a set of record-attribute flags or a
//! special-file subtype code. This module resolves that choice exactly once
//! and hands the renderer a typed view.

use super::file_org::FileOrg;
use super::special_type::SpecialType;

/// Bits 5-7 of the attribute byte are reserved. When any of them is set the
/// five flag bits cannot be trusted as independent booleans, so the whole
/// byte is surfaced as an opaque value.
pub const ATTRIB_RESERVED_MASK: u8 = 0xE0;

/// The five independent record-attribute flags, bits 0-4 of the attribute
/// byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribFlags(u8);

impl AttribFlags {
    /// FORTRAN carriage control.
    pub fn fortran_cc(&self) -> bool {
        self.0 & 0x01 != 0
    }

    /// Implied carriage control.
    pub fn implied_cc(&self) -> bool {
        self.0 & 0x02 != 0
    }

    /// Print file carriage control.
    pub fn print_cc(&self) -> bool {
        self.0 & 0x04 != 0
    }

    /// No spanned records.
    pub fn nospan(&self) -> bool {
        self.0 & 0x08 != 0
    }

    /// Record control word stored most-significant byte first.
    pub fn msb_rcw(&self) -> bool {
        self.0 & 0x10 != 0
    }

    /// Returns the summary abbreviation of every set flag, in the fixed
    /// bit order fortran_cc, implied_cc, print_cc, nospan, msb_rcw.
    pub fn abbreviations(&self) -> Vec<&'static str> {
        let mut abbrevs = vec![];
        if self.fortran_cc() {
            abbrevs.push("ftn");
        }
        if self.implied_cc() {
            abbrevs.push("cr");
        }
        if self.print_cc() {
            abbrevs.push("prn");
        }
        if self.nospan() {
            abbrevs.push("blk");
        }
        if self.msb_rcw() {
            abbrevs.push("msb");
        }
        abbrevs
    }
}

/// The resolved interpretation of the attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAttributes {
    /// The file organization is special: the byte is a subtype code.
    Special(SpecialType),
    /// A reserved bit is set: the byte is surfaced as-is.
    Opaque(u8),
    /// No flag is set.
    None,
    /// Independent record-attribute flags.
    Flags(AttribFlags),
}

impl RecordAttributes {
    /// Resolves the attribute byte under its governing discriminant.
    ///
    /// # Parameters
    /// - `file_org`: The decoded file organization.
    /// - `rattrib`: The raw attribute byte.
    ///
    /// # Returns
    /// - `RecordAttributes::Special` when the organization is special,
    ///   regardless of the byte value.
    /// - `RecordAttributes::Opaque` when any reserved bit 5-7 is set.
    /// - `RecordAttributes::None` when the byte is zero.
    /// - `RecordAttributes::Flags` otherwise.
    pub fn classify(file_org: FileOrg, rattrib: u8) -> Self {
        if file_org == FileOrg::Special {
            return RecordAttributes::Special(SpecialType::from_byte(rattrib));
        }

        if rattrib & ATTRIB_RESERVED_MASK != 0 {
            return RecordAttributes::Opaque(rattrib);
        }

        if rattrib == 0 {
            return RecordAttributes::None;
        }

        RecordAttributes::Flags(AttribFlags(rattrib))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_org_wins_over_every_byte_value() {
        for byte in [0x00, 0x01, 0x1F, 0xE0, 0xFF] {
            let attrs = RecordAttributes::classify(FileOrg::Special, byte);
            assert!(matches!(attrs, RecordAttributes::Special(_)), "byte 0x{byte:02x}");
        }
        assert_eq!(
            RecordAttributes::classify(FileOrg::Special, 1),
            RecordAttributes::Special(SpecialType::Fifo)
        );
    }

    #[test]
    fn reserved_bits_make_the_byte_opaque() {
        for byte in [0x20, 0x40, 0x80, 0x60, 0xA0, 0xE0, 0xE1, 0xFF] {
            assert_eq!(
                RecordAttributes::classify(FileOrg::Sequential, byte),
                RecordAttributes::Opaque(byte),
                "byte 0x{byte:02x}"
            );
        }
    }

    #[test]
    fn zero_byte_classifies_as_none() {
        assert_eq!(
            RecordAttributes::classify(FileOrg::Sequential, 0),
            RecordAttributes::None
        );
    }

    #[test]
    fn flags_decode_individually() {
        let attrs = RecordAttributes::classify(FileOrg::Sequential, 0x09);
        let RecordAttributes::Flags(flags) = attrs else {
            panic!("expected flags, got {attrs:?}");
        };
        assert!(flags.fortran_cc());
        assert!(!flags.implied_cc());
        assert!(!flags.print_cc());
        assert!(flags.nospan());
        assert!(!flags.msb_rcw());
        assert_eq!(flags.abbreviations(), vec!["ftn", "blk"]);
    }

    #[test]
    fn abbreviations_keep_bit_order() {
        let RecordAttributes::Flags(flags) =
            RecordAttributes::classify(FileOrg::Sequential, 0x1F)
        else {
            panic!("expected flags");
        };
        assert_eq!(flags.abbreviations(), vec!["ftn", "cr", "prn", "blk", "msb"]);
    }
}
