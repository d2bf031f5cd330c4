//!
//! ods_rats: A library and CLI for inspecting ODS5 file attribute records.
//!
//! This crate provides tools for:
//! - Fetching the packed File Attribute Table (FAT) record the ODS5 driver
//!   exposes per file
//! - Decoding the record's exact bit layout into typed fields
//! - Classifying discriminant-dependent subfields (record attributes vs.
//!   special-file subtype)
//! - Rendering the record as raw bytes, labeled fields or a friendly
//!   one-line summary
//!
//! The library carries all the semantics; the `rats` binary is a thin shell
//! around it.
//!
//! # Re-exports
//! - [`Fat`]: the decoded record
//! - [`FatError`]: boundary errors (fetch and decode)
//! - [`OutputMode`]: the set of requested representations

pub mod constants;
pub mod fat;
pub mod render;
pub mod xattr;

/// The decoded FAT record (see [`fat::record::Fat`]).
pub use crate::fat::record::Fat;
/// Boundary errors for fetch and decode (see [`fat::fat_error::FatError`]).
pub use crate::fat::fat_error::FatError;
/// The set of requested representations (see [`render::OutputMode`]).
pub use crate::render::OutputMode;
