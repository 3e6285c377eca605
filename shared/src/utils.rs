//! # Address Formatting
//!
//! Wallet identifiers are shown in the header as `head...tail`. The identifier
//! is never parsed or validated, only shortened for display.
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! assert_eq!(truncate_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"), "8W6Q...JKAL");
//! ```

/// Keep the first `prefix_len` and last `suffix_len` characters of `address`.
///
/// Addresses that are not longer than `prefix_len + suffix_len` characters are
/// returned unchanged. Counting is done in characters, so non-ASCII input
/// never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Header form of an address: four characters on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
