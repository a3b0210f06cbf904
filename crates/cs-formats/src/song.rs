//! Raw and hex-text song loading.

use cs_ir::END_OF_SONG;
use log::{debug, warn};

use crate::FormatError;

/// Load a raw binary song.
pub fn load_raw(data: &[u8]) -> Result<Vec<u8>, FormatError> {
    if data.is_empty() {
        return Err(FormatError::Empty);
    }
    check_terminated(data);
    Ok(data.to_vec())
}

/// Load a song written as hex text, usually a C array initialiser.
///
/// Tokens are separated by commas or whitespace and may carry a `0x`
/// prefix. When the text contains braces only the first `{ ... }` body is
/// read, so declarations around the array are ignored. `//` and `/* */`
/// comments are skipped.
pub fn load_hex_text(text: &str) -> Result<Vec<u8>, FormatError> {
    let clean = strip_comments(text)?;
    let (body, first_line) = array_body(&clean)?;

    let mut song = Vec::new();
    for (n, line) in body.lines().enumerate() {
        for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            song.push(parse_byte(token).ok_or_else(|| FormatError::InvalidToken {
                token: token.to_string(),
                line: first_line + n,
            })?);
        }
    }

    if song.is_empty() {
        return Err(FormatError::Empty);
    }
    debug!("hex text: {} bytes", song.len());
    check_terminated(&song);
    Ok(song)
}

/// Load a song, detecting hex text or raw bytes.
///
/// Raw songs end in `0xFF`, which is never valid UTF-8, so anything that
/// decodes as plain ASCII is treated as text.
pub fn load_song(data: &[u8]) -> Result<Vec<u8>, FormatError> {
    match std::str::from_utf8(data) {
        Ok(text) if !text.is_empty() && text.is_ascii() => load_hex_text(text),
        _ => load_raw(data),
    }
}

fn parse_byte(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Replace comments with spaces, keeping newlines so line numbers hold.
fn strip_comments(text: &str) -> Result<String, FormatError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('/') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if tail.starts_with("//") {
            match tail.find('\n') {
                Some(end) => rest = &tail[end..],
                None => rest = "",
            }
        } else if let Some(inner) = tail.strip_prefix("/*") {
            let end = inner.find("*/").ok_or(FormatError::UnterminatedComment)?;
            out.extend(inner[..end].chars().filter(|&c| c == '\n'));
            out.push(' ');
            rest = &inner[end + 2..];
        } else {
            out.push('/');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// The text between the first pair of braces, or all of it, plus the
/// 1-based line that body starts on.
fn array_body(text: &str) -> Result<(&str, usize), FormatError> {
    let Some(open) = text.find('{') else {
        return Ok((text, 1));
    };
    let inner = &text[open + 1..];
    let close = inner.find('}').ok_or(FormatError::UnterminatedArray)?;
    let line = text[..open].matches('\n').count() + 1;
    Ok((&inner[..close], line))
}

fn check_terminated(song: &[u8]) {
    if !song.contains(&END_OF_SONG) {
        warn!("song has no end marker, playback stops at the last byte");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_rejects_empty() {
        assert_eq!(load_raw(&[]), Err(FormatError::Empty));
    }

    #[test]
    fn raw_copies_bytes() {
        assert_eq!(load_raw(&[0x35, 0x8a, 0xff]).unwrap(), [0x35, 0x8a, 0xff]);
    }

    #[test]
    fn hex_with_prefix_and_commas() {
        let song = load_hex_text("{0x35,0x41,0x8a,0xff}").unwrap();
        assert_eq!(song, [0x35, 0x41, 0x8a, 0xff]);
    }

    #[test]
    fn hex_bare_tokens_and_whitespace() {
        let song = load_hex_text("35 41\n8A\tFF").unwrap();
        assert_eq!(song, [0x35, 0x41, 0x8a, 0xff]);
    }

    #[test]
    fn hex_trailing_comma() {
        assert_eq!(load_hex_text("{ 0x01, 0xff, }").unwrap(), [0x01, 0xff]);
    }

    #[test]
    fn hex_ignores_declaration_and_second_array() {
        let text = "const unsigned char song[] = {0x01, 0xff};\nconst char other[] = {0x02};";
        assert_eq!(load_hex_text(text).unwrap(), [0x01, 0xff]);
    }

    #[test]
    fn hex_skips_comments() {
        let text = "// intro\n{ 0x01, /* chord */ 0x02,\n 0x81, // wait\n 0xff }";
        assert_eq!(load_hex_text(text).unwrap(), [0x01, 0x02, 0x81, 0xff]);
    }

    #[test]
    fn hex_division_sign_is_a_bad_token() {
        assert!(matches!(
            load_hex_text("{0x01 / 0x02}"),
            Err(FormatError::InvalidToken { .. })
        ));
    }

    #[test]
    fn hex_reports_line_of_bad_token() {
        let err = load_hex_text("// header\nconst x[] = {\n0x01,\n0x1zz,\n0xff}").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidToken { token: "0x1zz".to_string(), line: 4 }
        );
    }

    #[test]
    fn hex_rejects_out_of_range() {
        assert!(load_hex_text("{0x100}").is_err());
        assert!(load_hex_text("{0x}").is_err());
    }

    #[test]
    fn hex_unterminated() {
        assert_eq!(load_hex_text("{0x01, 0xff"), Err(FormatError::UnterminatedArray));
        assert_eq!(load_hex_text("/* 0x01"), Err(FormatError::UnterminatedComment));
    }

    #[test]
    fn hex_empty_array() {
        assert_eq!(load_hex_text("{}"), Err(FormatError::Empty));
        assert_eq!(load_hex_text("  // nothing\n"), Err(FormatError::Empty));
    }

    #[test]
    fn detect_text_and_raw() {
        assert_eq!(load_song(b"{0x05, 0x81, 0xff}").unwrap(), [0x05, 0x81, 0xff]);
        assert_eq!(load_song(&[0x05, 0x81, 0xff]).unwrap(), [0x05, 0x81, 0xff]);
        assert_eq!(load_song(&[]), Err(FormatError::Empty));
    }

    #[test]
    fn error_messages() {
        let err = FormatError::InvalidToken { token: "zz".to_string(), line: 3 };
        assert_eq!(err.to_string(), "line 3: 'zz' is not a hex byte");
        assert_eq!(FormatError::UnterminatedArray.to_string(), "missing closing '}'");
    }
}
