use anyhow::Context;
use clap::Parser;
use copper_list::config::Config;
use copper_list::{CArray, CopperSource, Layout, SourceError};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::{env, iter};
use tracing::debug;

const USAGE: &str = "Usage: bin2c.rb [-c] <binfile>";

/// Converts a copper list binary to a C array of uint16_t
#[derive(Parser, Debug)]
#[command(name = "bin2c", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Nine words per line instead of one instruction per line
    #[arg(short = 'c')]
    compact: bool,

    /// Copper list binary
    #[arg(allow_hyphen_values = true)]
    files: Vec<PathBuf>,
}

impl Args {
    /// `-c` is the only option and may sit anywhere. Every other argument,
    /// dashes and `--` included, is taken as a path.
    fn from_raw<I: IntoIterator<Item = OsString>>(raw: I) -> Result<Args, clap::Error> {
        let (flags, rest): (Vec<_>, Vec<_>) = raw.into_iter().partition(|a| *a == "-c");

        Args::try_parse_from(
            iter::once(OsString::from("bin2c"))
                .chain(flags.into_iter().take(1))
                .chain(iter::once(OsString::from("--")))
                .chain(rest),
        )
    }
}

fn main() -> ExitCode {
    let config = Config::default();

    if let Some(level) = config.log_level {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .init();
    }

    let args = match Args::from_raw(env::args_os().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            debug!("rejected arguments: {}", e);
            println!("{}", USAGE);

            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bin2c: {:#}", e);

            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let input = match &args.files[..] {
        [one] => one,
        other => {
            debug!("expected one input file, got {}", other.len());
            println!("{}", USAGE);

            return Ok(ExitCode::FAILURE);
        }
    };

    let source = CopperSource::resolve(input).context("couldn't resolve input path")?;

    let words = match source.read() {
        Ok(words) => words,
        Err(SourceError::NotFound(path)) => {
            println!("Error: '{}' not found", path.display());

            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", source.path().display()));
        }
    };

    let name = source.name();
    let array = CArray::new(&name, &words, Layout::from_compact(args.compact));

    let stdout = io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());

    write!(stdout, "{}", array)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
