mod core;


pub use self::core::{
    HashAlgorithm, HashEncoding, HashOptions, HashResult, MD5_UNAVAILABLE, digest, digest_all,
    digest_all_data, digest_bytes, digest_data, digest_result, digest_with,
};
pub(crate) use self::core::hex_encode;
