use std::io::{self, Write};
use std::process;

use clap::Parser;

use devutils_rs::common::io::read_input;
use devutils_rs::common::{die, io_error_msg, reset_sigpipe};
use devutils_rs::hash::{self, HashAlgorithm, HashEncoding};

const TOOL_NAME: &str = "fhashgen";

#[derive(Parser)]
#[command(
    name = "fhashgen",
    about = "Print SHA digests of FILE, or standard input.",
    after_help = "With no FILE, or when FILE is -, read standard input.\n\n\
        MD5 is accepted as an algorithm name but is not computed; it prints\n\
        \"MD5 not available\" instead of a digest.",
    version
)]
struct Cli {
    /// Hash algorithm: sha1, sha224, sha256, sha384, sha512 or md5
    /// (dashes and case are ignored, e.g. SHA-256)
    #[arg(short = 'a', long = "algorithm", value_name = "ALGO", default_value = "sha256")]
    algorithm: HashAlgorithm,

    /// Compute every supported algorithm
    #[arg(long = "all", conflicts_with = "algorithm")]
    all: bool,

    /// Digest encoding: hex or base64
    #[arg(short = 'e', long = "encoding", value_name = "ENC", default_value = "hex")]
    encoding: HashEncoding,

    /// Upper-case hex output
    #[arg(short = 'U', long = "uppercase")]
    uppercase: bool,

    /// Print results as JSON (algorithm, hash, timestamp)
    #[arg(long = "json")]
    json: bool,

    /// Strip one trailing newline from the input before hashing
    #[arg(short = 'n', long = "strip-newline")]
    strip_newline: bool,

    /// File to hash (reads stdin if omitted or -)
    file: Option<String>,
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    let filename = cli.file.as_deref().unwrap_or("-");

    let mut data = match read_input(cli.file.as_deref()) {
        Ok(d) => d,
        Err(e) if filename == "-" => die(TOOL_NAME, io_error_msg(&e)),
        Err(e) => die(TOOL_NAME, format!("{}: {}", filename, io_error_msg(&e))),
    };
    if cli.strip_newline && data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }

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
    if cli.all {
        let results = hash::digest_all_data(data, cli.encoding, cli.uppercase);
        if cli.json {
            serde_json::to_writer_pretty(&mut *out, &results)?;
            writeln!(out)?;
        } else {
            for r in &results {
                writeln!(out, "{:<8} {}", r.algorithm, r.hash)?;
            }
        }
        return Ok(());
    }

    let result = hash::digest_result(data, cli.algorithm, cli.encoding, cli.uppercase);
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", result.hash)?;
    }
    Ok(())
}
