//! The decoded FAT record.
//!
//! This module implements:
//! - The exact byte layout of the 32-byte packed record
//! - Decoding from the raw attribute buffer
//! - Typed accessors for the two discriminant nibbles and the classified
//!   attribute byte

use binread::{BinRead, BinReaderExt};
use getset::Getters;
use std::io::Cursor;

use super::attrib::RecordAttributes;
use super::fat_error::FatError;
use super::file_org::FileOrg;
use super::record_format::RecordFormat;
use crate::constants::FAT_SIZE;

/// The raw FAT record as fetched from the driver, before decoding.
pub type RawFat = [u8; FAT_SIZE];

/// A virtual block number stored as a (high, low) pair of 16-bit words,
/// high word first.
///
/// Neither word means anything alone; the block number is always the
/// composed 32-bit value.
#[derive(BinRead, Debug, Clone, Copy, PartialEq, Eq, Getters)]
#[br(little)]
pub struct VbnPair {
    /// Upper 16 bits of the block number.
    #[get = "pub"]
    high: u16,
    /// Lower 16 bits of the block number.
    #[get = "pub"]
    low: u16,
}

impl VbnPair {
    /// Composes the 32-bit block number from the word pair.
    pub fn value(&self) -> u32 {
        u32::from(self.high) * 0x1_0000 + u32::from(self.low)
    }
}

/// File Attribute Table record for an ODS5 file.
///
/// The layout follows the driver's packed struct byte for byte; every byte
/// of the fixed buffer has a destination field, including two reserved
/// slots that are decoded but never surfaced.
#[derive(BinRead, Debug, Clone, PartialEq, Eq, Getters)]
#[br(little)]
pub struct Fat {
    /// Record format (low nibble) and file organization (high nibble).
    rtype: u8,
    /// Record attributes; meaning depends on the file organization.
    #[get = "pub"]
    rattrib: u8,
    /// Record size, in bytes.
    #[get = "pub"]
    rsize: u16,
    /// Highest allocated VBN.
    #[get = "pub"]
    hiblk: VbnPair,
    /// End-of-file VBN.
    #[get = "pub"]
    efblk: VbnPair,
    /// First free byte in the end-of-file block.
    #[get = "pub"]
    ffbyte: u16,
    /// Bucket size, in blocks.
    #[get = "pub"]
    bktsize: u8,
    /// Size, in bytes, of the fixed-length control area for VFC records.
    #[get = "pub"]
    vfcsize: u8,
    /// Maximum record size, in bytes.
    #[get = "pub"]
    maxrec: u16,
    /// Default extend quantity, in blocks.
    #[get = "pub"]
    defext: u16,
    /// Global buffer count (legacy 16-bit field).
    #[get = "pub"]
    gbc: u16,
    /// Flags for the record attribute area, passed through unchanged.
    #[get = "pub"]
    recattr_flags: u8,
    /// Unused space; decoded but never surfaced.
    fill_0: u8,
    /// Global buffer count (32-bit field, authoritative when present).
    #[get = "pub"]
    gbc32: u32,
    /// Spare space; decoded but never surfaced.
    fill_1: u16,
    /// Default version limit for directory files.
    #[get = "pub"]
    versions: u16,
}

impl Fat {
    /// Decodes a raw FAT buffer into its fields.
    ///
    /// Decoding is deterministic and succeeds for every buffer of the fixed
    /// size; the error path only satisfies the reader API.
    ///
    /// # Parameters
    /// - `raw`: The 32-byte attribute buffer returned by the driver.
    ///
    /// # Returns
    /// - `Ok(Fat)`: The decoded record.
    pub fn decode(raw: &RawFat) -> Result<Fat, FatError> {
        let mut reader = Cursor::new(&raw[..]);
        Ok(reader.read_le()?)
    }

    /// Returns the raw record format code, the low nibble of the first byte.
    pub fn rtype_code(&self) -> u8 {
        self.rtype & 0x0F
    }

    /// Returns the raw file organization code, the high nibble of the first
    /// byte.
    pub fn fileorg_code(&self) -> u8 {
        self.rtype >> 4
    }

    /// Returns the record format, preserving unrecognized codes.
    pub fn record_format(&self) -> RecordFormat {
        RecordFormat::from_nibble(self.rtype_code())
    }

    /// Returns the file organization, preserving unrecognized codes.
    pub fn file_org(&self) -> FileOrg {
        FileOrg::from_nibble(self.fileorg_code())
    }

    /// Resolves the attribute byte under the file organization discriminant.
    pub fn attributes(&self) -> RecordAttributes {
        RecordAttributes::classify(self.file_org(), self.rattrib)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_total_over_degenerate_buffers() {
        assert!(Fat::decode(&[0x00; FAT_SIZE]).is_ok());
        assert!(Fat::decode(&[0xFF; FAT_SIZE]).is_ok());
    }

    #[test]
    fn decode_is_deterministic() {
        let mut raw = [0u8; FAT_SIZE];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(37).wrapping_add(11);
        }

        let first = Fat::decode(&raw).unwrap();
        let second = Fat::decode(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_byte_lands_on_its_documented_field() {
        let mut raw = [0u8; FAT_SIZE];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = i as u8;
        }

        let fat = Fat::decode(&raw).unwrap();
        assert_eq!(fat.rtype_code(), 0x0);
        assert_eq!(fat.fileorg_code(), 0x0);
        assert_eq!(*fat.rattrib(), 0x01);
        assert_eq!(*fat.rsize(), 0x0302);
        assert_eq!(*fat.hiblk().high(), 0x0504);
        assert_eq!(*fat.hiblk().low(), 0x0706);
        assert_eq!(*fat.efblk().high(), 0x0908);
        assert_eq!(*fat.efblk().low(), 0x0B0A);
        assert_eq!(*fat.ffbyte(), 0x0D0C);
        assert_eq!(*fat.bktsize(), 0x0E);
        assert_eq!(*fat.vfcsize(), 0x0F);
        assert_eq!(*fat.maxrec(), 0x1110);
        assert_eq!(*fat.defext(), 0x1312);
        assert_eq!(*fat.gbc(), 0x1514);
        assert_eq!(*fat.recattr_flags(), 0x16);
        assert_eq!(*fat.gbc32(), 0x1B1A1918);
        assert_eq!(*fat.versions(), 0x1F1E);
    }

    #[test]
    fn first_byte_splits_into_nibbles() {
        let mut raw = [0u8; FAT_SIZE];
        raw[0] = 0x13; // fileorg 1, rtype 3

        let fat = Fat::decode(&raw).unwrap();
        assert_eq!(fat.rtype_code(), 3);
        assert_eq!(fat.fileorg_code(), 1);
        assert_eq!(fat.record_format(), RecordFormat::Vfc);
        assert_eq!(fat.file_org(), FileOrg::Relative);
    }

    #[test]
    fn vbn_pair_composes_over_boundary_values() {
        for high in [0u16, 1, 0xFFFF] {
            for low in [0u16, 1, 0xFFFF] {
                let pair = VbnPair { high, low };
                assert_eq!(pair.value(), u32::from(high) * 65536 + u32::from(low));
            }
        }
    }
}
