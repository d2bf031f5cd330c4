//! Error types for fetching and decoding the FAT record.
//!
//! All failures happen at the boundary: a file may not be governed by the
//! ODS5 driver, or the attribute fetch may fail at the OS level. Decoding a
//! correctly sized record and classifying its fields never fail.

use std::io;
use thiserror::Error;

/// Errors that can occur while obtaining or decoding a FAT record.
#[derive(Error, Debug)]
pub enum FatError {
    /// The target file is not governed by the ODS5 driver, so it carries no
    /// FAT attribute.
    #[error("not an ODS5 file")]
    NotOds5,

    /// The FAT attribute exists but does not have the documented fixed size.
    #[error("unexpected FAT size: {0} bytes")]
    BadSize(usize),

    /// Underlying I/O errors that occur while fetching the attribute.
    #[error("{0}")]
    Fetch(#[from] io::Error),

    /// Parsing error occurred during record decoding.
    #[error("{0}")]
    BinRead(#[from] binread::Error),
}
