mod core;


pub use self::core::{
    MAX_BATCH, MIN_BATCH, UuidOptions, format_uuid, generate_batch, generate_batch_formatted,
    generate_batch_with, generate_v4, generate_v4_with, stamp_v4,
};
