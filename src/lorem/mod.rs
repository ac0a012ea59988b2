mod core;

#[cfg(test)]
mod tests;

pub use self::core::{
    LoremFormat, LoremOptions, LoremUnit, MAX_COUNT, MIN_COUNT, generate, generate_with,
};
