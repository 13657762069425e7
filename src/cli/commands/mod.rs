//! Interactive flow implementations

pub mod catalog;
pub mod create;
pub mod menu;
pub mod modify;

/// Parse a 1-based menu selection against a list of `len` items.
///
/// Returns the 0-based index, or `None` for non-numeric or out-of-range
/// input.
pub(crate) fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let number: usize = input.parse().ok()?;
    if (1..=len).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}
