use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use digest::Digest;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::{DevError, Result};

/// Returned by [`digest`] in place of an MD5 hash.
pub const MD5_UNAVAILABLE: &str = "MD5 not available";

/// Hash algorithms offered by the generator.
///
/// `Md5` is recognised so it can be selected and reported, but no digest is
/// ever computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Md5,
}

impl HashAlgorithm {
    /// Every algorithm that produces a real digest, in output order.
    pub const SUPPORTED: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Md5 => "MD5",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = DevError;

    /// Accepts "SHA-256", "sha256", "Sha-256" and so on.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|&c| c != '-' && c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "md5" => Ok(HashAlgorithm::Md5),
            _ => Err(DevError::UnknownOption {
                kind: "hash algorithm",
                value: s.to_string(),
            }),
        }
    }
}

/// How raw digest bytes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashEncoding {
    #[default]
    Hex,
    Base64,
}

impl FromStr for HashEncoding {
    type Err = DevError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(HashEncoding::Hex),
            "base64" => Ok(HashEncoding::Base64),
            _ => Err(DevError::UnknownOption {
                kind: "hash encoding",
                value: s.to_string(),
            }),
        }
    }
}

/// Options for a single digest. `uppercase` only affects hex output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    pub algorithm: HashAlgorithm,
    pub encoding: HashEncoding,
    pub uppercase: bool,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha256,
            encoding: HashEncoding::Hex,
            uppercase: false,
        }
    }
}

/// One rendered digest, stamped when it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashResult {
    pub algorithm: String,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
}

impl HashResult {
    /// Wrap an already rendered digest, stamping it with the current time.
    pub fn new(algorithm: HashAlgorithm, hash: String) -> Self {
        Self {
            algorithm: algorithm.name().to_string(),
            hash,
            timestamp: Utc::now(),
        }
    }
}

/// Compute the raw digest of `data`.
/// MD5 yields `UnsupportedAlgorithm` rather than a hash.
pub fn digest_bytes(data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>> {
    let bytes = match algorithm {
        HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        HashAlgorithm::Md5 => {
            return Err(DevError::UnsupportedAlgorithm(
                algorithm.name().to_string(),
            ));
        }
    };
    Ok(bytes)
}

/// Hash `text` and render the digest. Never fails: MD5 returns the
/// [`MD5_UNAVAILABLE`] sentinel string.
pub fn digest(
    text: &str,
    algorithm: HashAlgorithm,
    encoding: HashEncoding,
    uppercase: bool,
) -> String {
    digest_data(text.as_bytes(), algorithm, encoding, uppercase)
}

/// Byte-level form of [`digest`], used for file input.
pub fn digest_data(
    data: &[u8],
    algorithm: HashAlgorithm,
    encoding: HashEncoding,
    uppercase: bool,
) -> String {
    match digest_bytes(data, algorithm) {
        Ok(raw) => render(&raw, encoding, uppercase),
        Err(_) => {
            debug!("{} requested; returning sentinel", algorithm);
            MD5_UNAVAILABLE.to_string()
        }
    }
}

/// Hash `data` and wrap the rendered digest (or MD5 sentinel) in a
/// [`HashResult`].
pub fn digest_result(
    data: &[u8],
    algorithm: HashAlgorithm,
    encoding: HashEncoding,
    uppercase: bool,
) -> HashResult {
    HashResult::new(algorithm, digest_data(data, algorithm, encoding, uppercase))
}

/// [`digest`] driven by a [`HashOptions`].
pub fn digest_with(text: &str, opts: &HashOptions) -> String {
    digest(text, opts.algorithm, opts.encoding, opts.uppercase)
}

/// Hash `text` with every supported algorithm, in [`HashAlgorithm::SUPPORTED`]
/// order. Digests run in parallel; each result carries its own timestamp.
pub fn digest_all(text: &str, encoding: HashEncoding, uppercase: bool) -> Vec<HashResult> {
    digest_all_data(text.as_bytes(), encoding, uppercase)
}

/// Byte-level form of [`digest_all`].
pub fn digest_all_data(data: &[u8], encoding: HashEncoding, uppercase: bool) -> Vec<HashResult> {
    HashAlgorithm::SUPPORTED
        .par_iter()
        .map(|&algo| digest_result(data, algo, encoding, uppercase))
        .collect()
}

fn render(raw: &[u8], encoding: HashEncoding, uppercase: bool) -> String {
    match encoding {
        HashEncoding::Hex => hex_encode(raw, uppercase),
        HashEncoding::Base64 => base64_simd::STANDARD.encode_to_string(raw),
    }
}

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Convert bytes to a hex string via nibble lookup.
pub(crate) fn hex_encode(bytes: &[u8], uppercase: bool) -> String {
    let table = if uppercase { HEX_UPPER } else { HEX_LOWER };
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(table[(b >> 4) as usize] as char);
        s.push(table[(b & 0x0f) as usize] as char);
    }
    s
}
