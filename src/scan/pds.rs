//! PDS3 label probe
//!
//! Decides whether a file is a displayable planetary image by looking at its
//! attached label. The answer is a plain yes/no: nothing from the label is
//! kept or exposed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Attached labels live at the start of the file; don't read past this
const LABEL_SCAN_BYTES: u64 = 64 * 1024;

/// Sample sizes we know how to display
const SUPPORTED_SAMPLE_BITS: [u32; 3] = [8, 16, 32];

/// Check a file on disk. Unreadable files are simply not displayable.
pub fn is_displayable(path: &Path) -> bool {
    match read_label_text(path) {
        Ok(text) => is_displayable_label(&text),
        Err(e) => {
            log::debug!("Can't probe {}: {}", path.display(), e);
            false
        }
    }
}

fn read_label_text(path: &Path) -> Result<String> {
    let mut buffer = Vec::new();
    File::open(path)?
        .take(LABEL_SCAN_BYTES)
        .read_to_end(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Check label text
///
/// Accepts a PDS3 label that points at an uncompressed IMAGE object with a
/// supported sample size.
pub fn is_displayable_label(text: &str) -> bool {
    let mut first = true;
    let mut has_pointer = false;
    let mut has_image = false;
    let mut sample_bits: Option<u32> = None;
    let mut compressed = false;

    // Depth of OBJECT nesting inside the IMAGE object (0 = outside it)
    let mut image_depth = 0usize;

    for line in text.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }
        if line == "END" {
            break;
        }

        let (key, value) = match line.split_once('=') {
            Some((k, v)) => (k.trim(), unquote(v.trim())),
            // Continuation of a multi-line value
            None => continue,
        };

        if first {
            if key != "PDS_VERSION_ID" {
                return false;
            }
            first = false;
            continue;
        }

        match key {
            "^IMAGE" => has_pointer = true,
            "OBJECT" if image_depth > 0 => image_depth += 1,
            "OBJECT" if value == "IMAGE" => {
                has_image = true;
                image_depth = 1;
            }
            "END_OBJECT" if image_depth > 0 => image_depth -= 1,
            "SAMPLE_BITS" if image_depth == 1 => sample_bits = value.parse().ok(),
            "ENCODING_TYPE" if image_depth == 1 => compressed = true,
            _ => {}
        }
    }

    !first
        && has_pointer
        && has_image
        && !compressed
        && sample_bits.is_some_and(|bits| SUPPORTED_SAMPLE_BITS.contains(&bits))
}

fn strip_comment(line: &str) -> &str {
    match line.find("/*") {
        Some(start) => &line[..start],
        None => line,
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"').trim()
}
