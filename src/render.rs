//! Rendering of a decoded FAT record.
//!
//! This module implements the three output representations: the raw byte
//! stream, the labeled field dump, and the friendly one-line summary. All
//! functions are pure; callers perform the actual output.

use std::fmt::Write as FmtWrite;

use crate::fat::attrib::RecordAttributes;
use crate::fat::file_org::FileOrg;
use crate::fat::record::{Fat, RawFat};
use crate::fat::record_format::RecordFormat;

/// How much of the record the friendly summary reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Only the tokens relevant to the file's organization and format.
    Default,
    /// Every attribute, unconditionally.
    Full,
}

/// The set of representations requested for one invocation.
///
/// Raw bytes and labeled fields are independent toggles; the friendly
/// summary is the default when neither is requested and is forced by the
/// all-attributes flag.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    raw_bytes: bool,
    labeled_fields: bool,
    summary: bool,
    depth: Depth,
}

impl OutputMode {
    /// Derives the output mode from the command-line flags.
    ///
    /// # Parameters
    /// - `all`: Format all attributes (`-a`).
    /// - `raw`: Print the record as a byte stream (`-b`).
    /// - `fields`: Print field names with their data (`-f`).
    pub fn from_flags(all: bool, raw: bool, fields: bool) -> Self {
        OutputMode {
            raw_bytes: raw,
            labeled_fields: fields,
            summary: all || (!raw && !fields),
            depth: if all { Depth::Full } else { Depth::Default },
        }
    }
}

/// Renders every requested representation of the record, in the fixed order
/// raw bytes, labeled fields, friendly summary.
pub fn render(raw: &RawFat, fat: &Fat, mode: OutputMode) -> String {
    let mut out = String::new();

    if mode.raw_bytes {
        out.push_str(&raw_bytes(raw));
    }
    if mode.labeled_fields {
        out.push_str(&labeled_fields(fat));
    }
    if mode.summary {
        out.push_str(&friendly_summary(fat, mode.depth));
    }

    out
}

/// Renders the raw record as one line of concatenated two-digit hex bytes.
pub fn raw_bytes(raw: &RawFat) -> String {
    let mut out = String::new();

    for byte in raw {
        write!(out, "{byte:02x}").unwrap();
    }
    out.push('\n');

    out
}

/// Renders every surfaced field in layout order as `name: 0x<hex>`, one per
/// line. Hex width follows the field's natural byte width; the nibble
/// discriminants print unpadded and the block fields print as their word
/// pairs.
pub fn labeled_fields(fat: &Fat) -> String {
    let mut out = String::new();

    writeln!(out, "rtype: 0x{:x}", fat.rtype_code()).unwrap();
    writeln!(out, "fileorg: 0x{:x}", fat.fileorg_code()).unwrap();
    writeln!(out, "rattrib: 0x{:02x}", fat.rattrib()).unwrap();
    writeln!(out, "rsize: 0x{:04x}", fat.rsize()).unwrap();
    writeln!(
        out,
        "hiblk(h,l): (0x{:04x},0x{:04x})",
        fat.hiblk().high(),
        fat.hiblk().low()
    )
    .unwrap();
    writeln!(
        out,
        "efblk(h,l): (0x{:04x},0x{:04x})",
        fat.efblk().high(),
        fat.efblk().low()
    )
    .unwrap();
    writeln!(out, "ffbyte: 0x{:04x}", fat.ffbyte()).unwrap();
    writeln!(out, "bktsize: 0x{:02x}", fat.bktsize()).unwrap();
    writeln!(out, "vfcsize: 0x{:02x}", fat.vfcsize()).unwrap();
    writeln!(out, "maxrec: 0x{:04x}", fat.maxrec()).unwrap();
    writeln!(out, "defext: 0x{:04x}", fat.defext()).unwrap();
    writeln!(out, "gbc: 0x{:04x}", fat.gbc()).unwrap();
    writeln!(out, "recattr_flags: 0x{:02x}", fat.recattr_flags()).unwrap();
    writeln!(out, "gbc32: 0x{:08x}", fat.gbc32()).unwrap();
    writeln!(out, "versions: 0x{:04x}", fat.versions()).unwrap();

    out
}

/// Renders the one-line summary of space-separated `key=value` tokens.
///
/// Token order is fixed: organization, format, attribute token(s), record
/// size, then detail tokens per the requested depth. Unrecognized codes
/// degrade to hex values inside their tokens rather than failing.
pub fn friendly_summary(fat: &Fat, depth: Depth) -> String {
    let mut out = String::new();

    write!(out, "org={} rfm={}", fat.file_org(), fat.record_format()).unwrap();

    match fat.attributes() {
        RecordAttributes::Special(subtype) => {
            write!(out, " special_type={subtype}").unwrap();
        }
        RecordAttributes::Opaque(byte) => {
            write!(out, " rat=0x{byte:02x}").unwrap();
        }
        RecordAttributes::None => {
            write!(out, " rat=none").unwrap();
        }
        RecordAttributes::Flags(flags) => {
            for abbrev in flags.abbreviations() {
                write!(out, " rat={abbrev}").unwrap();
            }
        }
    }

    write!(out, " lrl={}", fat.rsize()).unwrap();

    match depth {
        Depth::Default => {
            if fat.file_org() == FileOrg::Relative {
                write!(out, " bks={}", fat.bktsize()).unwrap();
            }
            if fat.record_format() == RecordFormat::Vfc {
                write!(out, " fsz={}", fat.vfcsize()).unwrap();
            }
        }
        Depth::Full => {
            write!(
                out,
                " hbk={} ebk={} ffb={} bks={} fsz={} mrs={} deq={} gbc={} gbx={} vrs={}",
                fat.hiblk().value(),
                fat.efblk().value(),
                fat.ffbyte(),
                fat.bktsize(),
                fat.vfcsize(),
                fat.maxrec(),
                fat.defext(),
                fat.gbc(),
                fat.gbc32(),
                fat.versions()
            )
            .unwrap();
        }
    }

    out.push('\n');
    out
}
