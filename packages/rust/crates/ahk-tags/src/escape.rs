//! Escaping of matched source lines for tag addresses.
//!
//! Works on the raw bytes of the line and follows the classic
//! string-escape convention: backslash and single quote are prefixed with a
//! backslash, TAB/LF/CR use their mnemonic escapes and every other byte
//! outside printable ASCII becomes `\xhh`. The `/` delimiter is left as is,
//! so a matched line containing `/` yields an address editors may misread.

use std::fmt::Write;

/// Escape `text` so it can sit between the `/^` and `$/` of an address.
#[must_use]
pub fn escape_address_text(text: &[u8]) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out
}

/// Wrap escaped text into a full-line search address: `/^text$/`.
#[must_use]
pub fn format_address(text: &[u8]) -> String {
    format!("/^{}$/", escape_address_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_address_text(b"Foo(a, b) {"), "Foo(a, b) {");
    }

    #[test]
    fn test_backslash_and_tab() {
        assert_eq!(escape_address_text(b"\tx = C:\\dir"), "\\tx = C:\\\\dir");
    }

    #[test]
    fn test_single_quote() {
        assert_eq!(escape_address_text(b"s = 'a'"), "s = \\'a\\'");
    }

    #[test]
    fn test_control_and_non_ascii_bytes() {
        assert_eq!(escape_address_text(b"a\x07b"), "a\\x07b");
        assert_eq!(escape_address_text(b"a\x7f"), "a\\x7f");
        assert_eq!(escape_address_text("é:".as_bytes()), "\\xc3\\xa9:");
    }

    #[test]
    fn test_latin1_byte_escaped_without_decoding() {
        assert_eq!(format_address(b"; caf\xe9"), "/^; caf\\xe9$/");
    }

    #[test]
    fn test_slash_is_not_escaped() {
        assert_eq!(format_address(b"x = a/b"), "/^x = a/b$/");
    }
}
