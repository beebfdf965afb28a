use crate::utils::error::{ExportError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a NID written in hex, with or without a `0x` prefix.
pub fn parse_nid(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // from_str_radix would accept a leading sign
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ExportError::InvalidNid {
            value: value.to_string(),
        });
    }

    u32::from_str_radix(digits, 16).map_err(|_| ExportError::InvalidNid {
        value: value.to_string(),
    })
}
