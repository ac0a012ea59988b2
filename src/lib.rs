/// Use mimalloc as the global allocator for all binaries.
/// Faster than glibc malloc for the many short-lived strings
/// the generators build.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod base64;
pub mod common;
pub mod error;
pub mod hash;
pub mod lorem;
pub mod uuid;

pub use error::{DevError, Result};
