use std::io::{self, Write};
use std::process;

use clap::Parser;

use devutils_rs::common::random::seeded;
use devutils_rs::common::{die, io_error_msg, reset_sigpipe};
use devutils_rs::lorem::{self, LoremFormat, LoremOptions, LoremUnit};

const TOOL_NAME: &str = "florem";

#[derive(Parser)]
#[command(
    name = "florem",
    about = "Generate Lorem Ipsum placeholder text.",
    version
)]
struct Cli {
    /// Unit that COUNT refers to: words, sentences or paragraphs
    #[arg(short = 'u', long = "unit", value_name = "UNIT", default_value = "paragraphs")]
    unit: LoremUnit,

    /// Number of units to generate (1-100)
    #[arg(short = 'n', long = "count", default_value = "5")]
    count: usize,

    /// Do not start with the canonical "Lorem ipsum dolor sit amet" opening
    #[arg(long = "no-lorem")]
    no_lorem: bool,

    /// Output format: plain, html or markdown
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "plain")]
    format: LoremFormat,

    /// Seed a deterministic generator
    #[arg(long = "seed", value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    let opts = LoremOptions {
        unit: cli.unit,
        count: cli.count,
        start_with_lorem: !cli.no_lorem,
        format: cli.format,
    };

    let text = match cli.seed {
        Some(seed) => lorem::generate_with(&opts, &mut seeded(seed)),
        None => lorem::generate(opts.unit, opts.count, opts.start_with_lorem, opts.format),
    };
    let text = text.unwrap_or_else(|e| die(TOOL_NAME, e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = writeln!(out, "{}", text).and_then(|()| out.flush());

    if let Err(e) = result {
        if e.kind() == io::ErrorKind::BrokenPipe {
            process::exit(0);
        }
        die(TOOL_NAME, io_error_msg(&e));
    }
}
