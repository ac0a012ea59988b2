use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::error::{DevError, Result};

const BASE64_ENGINE: &base64_simd::Base64 = &base64_simd::STANDARD;
const URL_SAFE_ENGINE: &base64_simd::Base64 = &base64_simd::URL_SAFE_NO_PAD;

/// Standard alphabet with at most two trailing pad characters.
static BASE64_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").expect("static regex"));

/// Options shared by encode and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Use the RFC 4648 §5 alphabet (`-`, `_`) without `=` padding.
    pub url_safe: bool,
    /// Strip `\r` and `\n` from encoded output.
    pub remove_line_breaks: bool,
    /// Split encoded output into lines of `chunk_size` characters.
    pub chunk_output: bool,
    pub chunk_size: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            url_safe: false,
            remove_line_breaks: false,
            chunk_output: false,
            chunk_size: 76,
        }
    }
}

/// Encode UTF-8 text to Base64.
pub fn encode(text: &str, opts: &ConversionOptions) -> Result<String> {
    encode_bytes(text.as_bytes(), opts)
}

/// Encode arbitrary bytes to Base64, applying the output options in order:
/// alphabet, line-break removal, then chunking.
pub fn encode_bytes(data: &[u8], opts: &ConversionOptions) -> Result<String> {
    if opts.chunk_output && opts.chunk_size == 0 {
        return Err(DevError::InvalidChunkSize);
    }
    if data.is_empty() {
        return Ok(String::new());
    }

    let engine = if opts.url_safe {
        URL_SAFE_ENGINE
    } else {
        BASE64_ENGINE
    };
    let mut encoded = engine.encode_to_string(data);

    if opts.remove_line_breaks {
        strip_line_breaks(&mut encoded);
    }

    if opts.chunk_output && encoded.len() > opts.chunk_size {
        trace!(
            "wrapping {} encoded chars at {} columns",
            encoded.len(),
            opts.chunk_size
        );
        encoded = wrap_lines(&encoded, opts.chunk_size);
    }

    Ok(encoded)
}

/// Decode Base64 (standard or URL-safe, optionally multi-line) to UTF-8 text.
/// Invalid UTF-8 is a hard error; no replacement characters are substituted.
pub fn decode(input: &str, opts: &ConversionOptions) -> Result<String> {
    let bytes = decode_to_bytes(input, opts)?;
    Ok(String::from_utf8(bytes)?)
}

/// Decode Base64 to raw bytes.
///
/// Whitespace anywhere in the input is ignored. Input is treated as
/// URL-safe when `opts.url_safe` is set or when it contains neither `+`
/// nor `/`, and is mapped back to the standard alphabet. Missing `=`
/// padding is restored for either alphabet before validation.
pub fn decode_to_bytes(input: &str, opts: &ConversionOptions) -> Result<Vec<u8>> {
    let mut clean = strip_whitespace(input.trim().as_bytes());
    if clean.is_empty() {
        return Ok(Vec::new());
    }

    let looks_url_safe = memchr::memchr2(b'+', b'/', &clean).is_none();
    if opts.url_safe || looks_url_safe {
        for b in clean.iter_mut() {
            match *b {
                b'-' => *b = b'+',
                b'_' => *b = b'/',
                _ => {}
            }
        }
    }

    // A lone trailing sextet cannot encode a whole byte.
    if clean.len() % 4 == 1 {
        return Err(DevError::InvalidBase64);
    }
    while clean.len() % 4 != 0 {
        clean.push(b'=');
    }

    if !is_valid_base64(&clean) {
        return Err(DevError::InvalidBase64);
    }

    BASE64_ENGINE
        .decode_to_vec(&clean)
        .map_err(|_| DevError::InvalidBase64)
}

/// Check cleaned input against the Base64 character class.
fn is_valid_base64(data: &[u8]) -> bool {
    match std::str::from_utf8(data) {
        Ok(text) => BASE64_RE.is_match(text),
        Err(_) => false,
    }
}

/// Remove every `\r` and `\n`. Fast path when there are none.
pub(super) fn strip_line_breaks(s: &mut String) {
    if memchr::memchr2(b'\r', b'\n', s.as_bytes()).is_some() {
        s.retain(|c| c != '\r' && c != '\n');
    }
}

/// Remove all ASCII whitespace.
fn strip_whitespace(data: &[u8]) -> Vec<u8> {
    if !data.iter().any(|&b| is_whitespace(b)) {
        return data.to_vec();
    }
    data.iter().copied().filter(|&b| !is_whitespace(b)).collect()
}

/// Check if a byte is ASCII whitespace.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Split `encoded` into `width`-column lines joined by `\n`, with no
/// trailing newline. Base64 output is ASCII so byte offsets are char
/// boundaries.
fn wrap_lines(encoded: &str, width: usize) -> String {
    let mut out = String::with_capacity(encoded.len() + encoded.len() / width);
    let mut rest = encoded;
    while rest.len() > width {
        let (line, tail) = rest.split_at(width);
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }
    out.push_str(rest);
    out
}
