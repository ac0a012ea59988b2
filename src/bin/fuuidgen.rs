use std::io::{self, Write};
use std::process;

use clap::Parser;

use devutils_rs::common::random::seeded;
use devutils_rs::common::{die, io_error_msg, reset_sigpipe};
use devutils_rs::uuid::{self, UuidOptions};

const TOOL_NAME: &str = "fuuidgen";

#[derive(Parser)]
#[command(
    name = "fuuidgen",
    about = "Generate random (version 4) UUIDs, one per line.",
    version
)]
struct Cli {
    /// Number of UUIDs to generate (1-100)
    #[arg(short = 'n', long = "count", default_value = "1")]
    count: usize,

    /// Upper-case hex digits
    #[arg(short = 'U', long = "uppercase")]
    uppercase: bool,

    /// Omit the hyphens
    #[arg(long = "no-hyphens")]
    no_hyphens: bool,

    /// Wrap each UUID in braces
    #[arg(long = "braces")]
    braces: bool,

    /// Seed a deterministic generator instead of the OS random source
    #[arg(long = "seed", value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    let opts = UuidOptions {
        uppercase: cli.uppercase,
        hyphens: !cli.no_hyphens,
        braces: cli.braces,
    };

    let ids = match cli.seed {
        Some(seed) => uuid::generate_batch_with(cli.count, &opts, &mut seeded(seed)),
        None => uuid::generate_batch_formatted(cli.count, &opts),
    };
    let ids = ids.unwrap_or_else(|e| die(TOOL_NAME, e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = ids
        .iter()
        .try_for_each(|id| writeln!(out, "{}", id))
        .and_then(|()| out.flush());

    if let Err(e) = result {
        if e.kind() == io::ErrorKind::BrokenPipe {
            process::exit(0);
        }
        die(TOOL_NAME, io_error_msg(&e));
    }
}
