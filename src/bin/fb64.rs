use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;

use devutils_rs::base64::{self as b64, ConversionOptions};
use devutils_rs::common::io::read_input;
use devutils_rs::common::{die, io_error_msg, reset_sigpipe};

const TOOL_NAME: &str = "fb64";

#[derive(Parser)]
#[command(
    name = "fb64",
    about = "Base64 encode or decode FILE, or standard input, to standard output.",
    after_help = "With no FILE, or when FILE is -, read standard input.\n\n\
        Encoding uses the standard RFC 4648 alphabet, or the URL-safe alphabet\n\
        without padding when --url-safe is given. Decoding accepts either\n\
        alphabet and ignores whitespace, so wrapped output decodes as-is.",
    version
)]
struct Cli {
    /// Decode data
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// Use the URL-safe alphabet ('-' and '_', no '=' padding)
    #[arg(short = 'u', long = "url-safe")]
    url_safe: bool,

    /// Strip CR/LF from the encoded output
    #[arg(short = 'r', long = "remove-line-breaks")]
    remove_line_breaks: bool,

    /// Wrap encoded lines after COLS characters (0 disables wrapping)
    #[arg(short = 'w', long = "wrap", value_name = "COLS", default_value = "0")]
    wrap: usize,

    /// Write decoded bytes verbatim instead of requiring UTF-8 text
    #[arg(short = 'b', long = "binary")]
    binary: bool,

    /// File to process (reads stdin if omitted or -)
    file: Option<String>,
}

impl Cli {
    fn options(&self) -> ConversionOptions {
        ConversionOptions {
            url_safe: self.url_safe,
            remove_line_breaks: self.remove_line_breaks,
            chunk_output: self.wrap > 0,
            chunk_size: if self.wrap > 0 { self.wrap } else { 76 },
        }
    }
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    let filename = cli.file.as_deref().unwrap_or("-");

    let data = match read_input(cli.file.as_deref()) {
        Ok(d) => d,
        Err(e) if filename == "-" => die(TOOL_NAME, io_error_msg(&e)),
        Err(e) => die(TOOL_NAME, format!("{}: {}", filename, io_error_msg(&e))),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = run(&cli, &data, &mut out).and_then(|()| Ok(out.flush()?));

    if let Err(e) = result {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                process::exit(0);
            }
        }
        die(TOOL_NAME, format!("{:#}", e));
    }
}

fn run(cli: &Cli, data: &[u8], out: &mut impl Write) -> anyhow::Result<()> {
    let opts = cli.options();
    if cli.decode {
        let text = std::str::from_utf8(data).context("input is not text")?;
        let decoded = if cli.binary {
            b64::decode_to_bytes(text, &opts)?
        } else {
            b64::decode(text, &opts)?.into_bytes()
        };
        out.write_all(&decoded)?;
    } else {
        let encoded = b64::encode_bytes(data, &opts)?;
        if !encoded.is_empty() {
            out.write_all(encoded.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
