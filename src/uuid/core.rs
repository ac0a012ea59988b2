use rand::RngCore;

use crate::common::random::fill_random;
use crate::error::Result;
use crate::error::check_count;
use crate::hash::hex_encode;

/// Smallest and largest batch `generate_batch` accepts.
pub const MIN_BATCH: usize = 1;
pub const MAX_BATCH: usize = 100;

/// Presentation options for batch output.
/// The default produces the canonical lowercase hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidOptions {
    pub uppercase: bool,
    pub hyphens: bool,
    /// Wrap in `{…}` (Microsoft GUID registry style).
    pub braces: bool,
}

impl Default for UuidOptions {
    fn default() -> Self {
        Self {
            uppercase: false,
            hyphens: true,
            braces: false,
        }
    }
}

/// Generate one random (version 4) UUID in canonical form using the OS
/// random source.
pub fn generate_v4() -> String {
    let mut bytes = [0u8; 16];
    fill_random(&mut bytes);
    format_uuid(&stamp_v4(bytes), &UuidOptions::default())
}

/// Generate one version 4 UUID from a caller-supplied generator.
pub fn generate_v4_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    format_uuid(&stamp_v4(bytes), &UuidOptions::default())
}

/// Generate `count` independent v4 UUIDs in canonical form.
/// Duplicates are not filtered.
pub fn generate_batch(count: usize) -> Result<Vec<String>> {
    generate_batch_formatted(count, &UuidOptions::default())
}

/// Generate `count` v4 UUIDs from the OS random source, formatted per `opts`.
pub fn generate_batch_formatted(count: usize, opts: &UuidOptions) -> Result<Vec<String>> {
    check_count(count, MIN_BATCH, MAX_BATCH)?;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let mut bytes = [0u8; 16];
        fill_random(&mut bytes);
        out.push(format_uuid(&stamp_v4(bytes), opts));
    }
    Ok(out)
}

/// Generate `count` v4 UUIDs from `rng`, formatted per `opts`.
pub fn generate_batch_with<R: RngCore + ?Sized>(
    count: usize,
    opts: &UuidOptions,
    rng: &mut R,
) -> Result<Vec<String>> {
    check_count(count, MIN_BATCH, MAX_BATCH)?;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        out.push(format_uuid(&stamp_v4(bytes), opts));
    }
    Ok(out)
}

/// Force the RFC 4122 version (0100) and variant (10) bits.
pub fn stamp_v4(mut bytes: [u8; 16]) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Render 16 bytes as 8-4-4-4-12 hex, adjusted by `opts`.
pub fn format_uuid(bytes: &[u8; 16], opts: &UuidOptions) -> String {
    let hex = hex_encode(bytes, opts.uppercase);
    let mut out = String::with_capacity(38);
    if opts.braces {
        out.push('{');
    }
    if opts.hyphens {
        out.push_str(&hex[0..8]);
        out.push('-');
        out.push_str(&hex[8..12]);
        out.push('-');
        out.push_str(&hex[12..16]);
        out.push('-');
        out.push_str(&hex[16..20]);
        out.push('-');
        out.push_str(&hex[20..32]);
    } else {
        out.push_str(&hex);
    }
    if opts.braces {
        out.push('}');
    }
    out
}
