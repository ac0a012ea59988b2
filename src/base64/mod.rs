mod core;


pub use self::core::{ConversionOptions, decode, decode_to_bytes, encode, encode_bytes};
