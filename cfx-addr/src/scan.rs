//  SCAN.rs
//    by Lut99
//
//  Created:
//    13 Oct 2026, 16:02:27
//  Last edited:
//    14 Oct 2026, 09:11:50
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the (tiny) character scan used to find where a join code
//!   ends.
//


/***** LIBRARY *****/
/// Finds the first character in the given string that is NOT an ASCII alphanumeric character.
///
/// Only `0-9`, `A-Z` and `a-z` count as alphanumeric; anything else (including non-ASCII letters)
/// terminates the run.
///
/// # Arguments
/// - `s`: The string to scan.
///
/// # Returns
/// The byte index of the first non-alphanumeric character, or [`None`] if the entire string is
/// alphanumeric (which includes the empty string).
#[inline]
pub fn scan_alpha_numeric_run(s: &str) -> Option<usize> { s.char_indices().find(|(_, c)| !c.is_ascii_alphanumeric()).map(|(i, _)| i) }

/// Checks whether the given string consists exclusively of ASCII alphanumeric characters.
#[inline]
pub fn is_alpha_numeric(s: &str) -> bool { scan_alpha_numeric_run(s).is_none() }





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_alpha_numeric_run() {
        assert_eq!(scan_alpha_numeric_run("abc123XYZ"), None);
        assert_eq!(scan_alpha_numeric_run(""), None);
        assert_eq!(scan_alpha_numeric_run("abc123/extra"), Some(6));
        assert_eq!(scan_alpha_numeric_run("?x=1"), Some(0));
        assert_eq!(scan_alpha_numeric_run("ab c"), Some(2));
        assert_eq!(scan_alpha_numeric_run("ab_c"), Some(2));
    }

    #[test]
    fn test_scan_non_ascii() {
        // Non-ASCII letters are not part of a join code
        assert_eq!(scan_alpha_numeric_run("abcé"), Some(3));
        assert_eq!(scan_alpha_numeric_run("ñ"), Some(0));
        assert!(!is_alpha_numeric("caf\u{e9}"));
        assert!(is_alpha_numeric("Cafe42"));
    }
}
