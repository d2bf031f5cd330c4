//! Decoding and classification of the ODS5 File Attribute Table (FAT) record.
//!
//! The FAT is a fixed-size packed record the driver exposes per file. This
//! module imposes the documented bit layout on the raw bytes and resolves
//! the discriminant-dependent subfields into typed values.

pub mod attrib;
pub mod fat_error;
pub mod file_org;
pub mod record;
pub mod record_format;
pub mod special_type;
