// crates/lcec-configgen/src/scan.rs

//! A tiny rule engine for scraping line-oriented `ethercat` tool output.
//!
//! Each parser declares an ordered table of [`LineRule`]s. Every input line is
//! tested against the rules in order; the first rule whose pattern matches
//! receives the captures and the remaining rules are skipped. Lines matching
//! no rule are ignored.

use crate::error::ConfigGenError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Handler invoked with the parser state and the captures of a matching line.
pub(crate) type LineHandler<S> = fn(&mut S, &Captures<'_>) -> Result<(), ConfigGenError>;

/// A (line-pattern, handler) pair.
pub(crate) struct LineRule<S> {
    pub pattern: &'static Lazy<Regex>,
    pub handler: LineHandler<S>,
}

/// Runs `rules` over every line of `text`, threading `state` through the handlers.
pub(crate) fn scan_lines<S>(
    text: &str,
    rules: &[LineRule<S>],
    state: &mut S,
) -> Result<(), ConfigGenError> {
    for line in text.lines() {
        for rule in rules {
            if let Some(caps) = rule.pattern.captures(line) {
                (rule.handler)(state, &caps)?;
                break;
            }
        }
    }
    Ok(())
}

/// Returns capture group `i` as a `&str`, or `""` if the group did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Returns capture group `i` if it participated and is non-empty.
pub(crate) fn optional_group<'t>(caps: &Captures<'t>, i: usize) -> Option<&'t str> {
    caps.get(i).map(|m| m.as_str()).filter(|s| !s.is_empty())
}

/// Parses a "0x..." or "..." hex string into a u32.
pub(crate) fn parse_hex_u32(s: &str) -> Result<u32, ConfigGenError> {
    let trimmed = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(trimmed, 16).map_err(|_| ConfigGenError::invalid_number("hex u32", s))
}

/// Parses a "0x..." or "..." hex string into a u16.
pub(crate) fn parse_hex_u16(s: &str) -> Result<u16, ConfigGenError> {
    let trimmed = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(trimmed, 16).map_err(|_| ConfigGenError::invalid_number("hex u16", s))
}

/// Parses a "0x..." or "..." hex string into a u8.
pub(crate) fn parse_hex_u8(s: &str) -> Result<u8, ConfigGenError> {
    let trimmed = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(trimmed, 16).map_err(|_| ConfigGenError::invalid_number("hex u8", s))
}

/// Parses an unsigned integer whose base is given by its prefix:
/// `0x` hex, `0b` binary, `0o` or a bare leading `0` octal, decimal otherwise.
pub(crate) fn parse_prefixed_u32(s: &str) -> Result<u32, ConfigGenError> {
    let lower = s.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };
    u32::from_str_radix(digits, radix).map_err(|_| ConfigGenError::invalid_number("integer", s))
}
