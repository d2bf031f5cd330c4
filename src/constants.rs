use std::ffi::CStr;

/// The size of the packed FAT record in bytes.
pub const FAT_SIZE: usize = 32;

/// The extended attribute under which the ODS5 driver exposes the FAT record.
pub const ODS_XATTR_FAT: &CStr = c"ods.fat";
