//! Fetching the raw FAT record from the ODS5 driver.
//!
//! The driver exposes the packed record as an extended attribute on each
//! file it governs. Fetching is the only fallible step of the pipeline;
//! everything downstream of a correctly sized buffer is total.

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::constants::{FAT_SIZE, ODS_XATTR_FAT};
use crate::fat::fat_error::FatError;
use crate::fat::record::RawFat;

/// Fetches the raw FAT record for the given file.
///
/// # Parameters
/// - `path`: The file whose attributes are inspected.
///
/// # Returns
/// - `Ok(RawFat)`: The 32-byte attribute buffer.
///
/// # Errors
/// - `FatError::NotOds5` if the file is not governed by the ODS5 driver.
/// - `FatError::BadSize` if the attribute exists with an unexpected size.
/// - `FatError::Fetch` for any other OS-level failure.
pub fn get_fat(path: &Path) -> Result<RawFat, FatError> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let mut raw: RawFat = [0; FAT_SIZE];
    let read_sz = unsafe {
        libc::getxattr(
            c_path.as_ptr(),
            ODS_XATTR_FAT.as_ptr(),
            raw.as_mut_ptr().cast::<libc::c_void>(),
            FAT_SIZE,
        )
    };

    if read_sz < 0 {
        let err = io::Error::last_os_error();
        return match err.raw_os_error() {
            Some(libc::EOPNOTSUPP) => Err(FatError::NotOds5),
            // The driver reports an oversized attribute as ERANGE before
            // writing anything into the buffer.
            Some(libc::ERANGE) => Err(FatError::BadSize(attribute_size(&c_path))),
            _ => Err(FatError::Fetch(err)),
        };
    }

    let read_sz = read_sz as usize;
    if read_sz != FAT_SIZE {
        return Err(FatError::BadSize(read_sz));
    }

    Ok(raw)
}

/// Queries the size of the FAT attribute without fetching it, for error
/// reporting when it does not fit the documented record.
fn attribute_size(c_path: &CString) -> usize {
    let size = unsafe {
        libc::getxattr(
            c_path.as_ptr(),
            ODS_XATTR_FAT.as_ptr(),
            std::ptr::null_mut(),
            0,
        )
    };

    if size < 0 { 0 } else { size as usize }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_files_outside_the_driver_are_reported_as_such() {
        // Regular filesystems do not carry the attribute: the fetch must
        // fail per-file without panicking, whatever the error kind.
        let result = get_fat(Path::new("/"));
        assert!(result.is_err());
    }

    #[test]
    fn missing_files_report_a_fetch_error() {
        let result = get_fat(Path::new("/nonexistent/rats/probe"));
        assert!(matches!(result, Err(FatError::Fetch(_))));
    }
}
