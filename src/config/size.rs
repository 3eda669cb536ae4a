use super::error::{ConfigError, Result};
use lazy_regex::regex_captures;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Parses a byte size such as `4096`, `512K`, `650M` or `2G`.
///
/// A bare integer is a byte count. A single trailing `B`, `K`, `M` or `G`
/// scales by 1, 1024, 1024² or 1024³.
pub fn parse_size(value: &str) -> Result<u64> {
    let invalid = || ConfigError::InvalidSize {
        value: value.to_string(),
    };

    let Some((_, digits, suffix)) = regex_captures!(r"^(\d+)(\D?)$", value.trim()) else {
        return Err(invalid());
    };

    let base: u64 = digits.parse().map_err(|_| invalid())?;

    let multiplier = match suffix.chars().next() {
        None | Some('B') => 1,
        Some('K') => KIB,
        Some('M') => MIB,
        Some('G') => GIB,
        Some(other) => {
            return Err(ConfigError::InvalidSizeSuffix {
                value: value.to_string(),
                suffix: other,
            });
        }
    };

    base.checked_mul(multiplier).ok_or_else(invalid)
}
