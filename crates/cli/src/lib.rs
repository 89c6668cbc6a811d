#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `rdigest`
//! workspace. The crate is intentionally small: it parses the algorithm name
//! and the `-p`/`-q`/`-r`/`-s` switches, materializes each input (standard
//! input, literal strings, or whole files) into memory, and delegates the
//! actual hashing to [`hashes::digest`]. Every byte source is fully read
//! before the engine sees it; no streaming hashing exists anywhere in the
//! workspace.
//!
//! # Design
//!
//! The crate exposes [`run_with`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for standard output
//! and error, so the whole surface is testable in-process without spawning a
//! binary. Internally a [`clap`](https://docs.rs/clap/) command definition
//! performs a light-weight builder parse; help is rendered from a static
//! snapshot so the wording stays stable.
//!
//! # Invariants
//!
//! - [`run_with`] never panics; unexpected I/O failures surface as non-zero
//!   exit codes.
//! - A file that cannot be read is reported on stderr and does not abort the
//!   processing of the remaining operands.
//! - Output lines are written in operand order: standard input first (when
//!   hashed), then `-s` literals, then files.
//!
//! # Errors
//!
//! Usage errors (unknown switches, unknown algorithm names, a missing `-s`
//! value) print a diagnostic and the usage line to stderr and yield
//! [`EXIT_USAGE`] (64). Per-input I/O failures and allocation failures inside
//! the engine yield [`EXIT_FAILURE`] (1) once all operands have been
//! attempted.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run_with(["rdigest", "md5", "-q", "-s", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(code, cli::EXIT_OK);
//! assert_eq!(stdout, b"900150983cd24fb0d6963f7d28e17f72\n");
//! assert!(stderr.is_empty());
//! ```

mod format;
mod source;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use hashes::Algorithm;

use format::{OutputStyle, Source, write_digest_line};

/// Exit status for a run in which every requested digest was produced.
pub const EXIT_OK: u8 = 0;

/// Exit status when at least one input could not be hashed.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for usage and argument errors (EX_USAGE).
pub const EXIT_USAGE: u8 = 64;

/// One-line usage summary printed alongside argument diagnostics.
const USAGE: &str = "usage: rdigest md5|sha224|sha256|sha384|sha512 [-pqr] [-s string] [file ...]";

/// Static help snapshot rendered for `-h`/`--help`.
const HELP_TEXT: &str = concat!(
    "rdigest - compute MD5 and SHA-2 message digests\n",
    "\n",
    "Usage: rdigest ALGORITHM [-pqr] [-s string] [file ...]\n",
    "\n",
    "Algorithms: md5, sha224, sha256, sha384, sha512\n",
    "\n",
    "Options:\n",
    "  -p           Echo standard input to standard output before the digest.\n",
    "  -q           Quiet mode: print only the digest.\n",
    "  -r           Reverse the output format: digest first, then the source.\n",
    "  -s string    Hash the given string instead of a file.\n",
    "  -h, --help   Show this help message and exit.\n",
    "\n",
    "With no file operands and no -s, standard input is hashed.\n",
);

/// A fully parsed invocation.
struct Invocation {
    algorithm: Algorithm,
    echo_stdin: bool,
    strings: Vec<String>,
    files: Vec<OsString>,
    style: OutputStyle,
}

/// Installs the stderr `tracing` subscriber honouring `RDIGEST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RDIGEST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the digest front-end over the given arguments and output handles.
///
/// Returns the process exit status: [`EXIT_OK`], [`EXIT_FAILURE`], or
/// [`EXIT_USAGE`].
pub fn run_with<A, S, O, E>(args: A, stdout: &mut O, stderr: &mut E) -> u8
where
    A: IntoIterator<Item = S>,
    S: Into<OsString>,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        let _ = stdout.write_all(HELP_TEXT.as_bytes());
        return EXIT_OK;
    }

    let invocation = match parse(args) {
        Ok(invocation) => invocation,
        Err(message) => {
            let _ = writeln!(stderr, "rdigest: {message}");
            let _ = writeln!(stderr, "{USAGE}");
            return EXIT_USAGE;
        }
    };

    match execute(&invocation, stdout, stderr) {
        Ok(false) => EXIT_OK,
        Ok(true) => EXIT_FAILURE,
        // Failing to write an output line (e.g. a closed pipe) aborts the run.
        Err(_) => EXIT_FAILURE,
    }
}

/// Builds the clap command definition for the front-end.
fn command() -> Command {
    Command::new("rdigest")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(Arg::new("algorithm").value_name("ALGORITHM").required(true))
        .arg(Arg::new("print").short('p').action(ArgAction::SetTrue))
        .arg(Arg::new("quiet").short('q').action(ArgAction::SetTrue))
        .arg(Arg::new("reverse").short('r').action(ArgAction::SetTrue))
        .arg(
            Arg::new("string")
                .short('s')
                .value_name("STRING")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .num_args(1..)
                .value_parser(OsStringValueParser::new()),
        )
}

fn parse(args: Vec<OsString>) -> Result<Invocation, String> {
    let matches = command()
        .try_get_matches_from(args)
        .map_err(|error| error.to_string().trim_end().to_owned())?;

    let name = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or_default();
    let algorithm = Algorithm::from_name(name)
        .ok_or_else(|| format!("unknown algorithm '{name}'"))?;

    Ok(Invocation {
        algorithm,
        echo_stdin: matches.get_flag("print"),
        strings: matches
            .get_many::<String>("string")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        files: matches
            .get_many::<OsString>("file")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        style: OutputStyle {
            quiet: matches.get_flag("quiet"),
            reverse: matches.get_flag("reverse"),
        },
    })
}

/// Hashes every operand in order. Returns whether any input failed; write
/// errors on the output handle propagate as `Err` and abort the run.
fn execute<O: Write, E: Write>(
    invocation: &Invocation,
    stdout: &mut O,
    stderr: &mut E,
) -> io::Result<bool> {
    let algorithm = invocation.algorithm;
    let mut failed = false;

    let hash_stdin =
        invocation.echo_stdin || (invocation.strings.is_empty() && invocation.files.is_empty());
    if hash_stdin {
        match source::read_stdin() {
            Ok(data) => {
                if invocation.echo_stdin {
                    stdout.write_all(&data)?;
                }
                failed |= emit(algorithm, &data, Source::Stdin, invocation, stdout, stderr)?;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to read standard input");
                let _ = writeln!(stderr, "rdigest: {}: stdin: {error}", algorithm.name());
                failed = true;
            }
        }
    }

    for literal in &invocation.strings {
        failed |= emit(
            algorithm,
            literal.as_bytes(),
            Source::Literal(literal),
            invocation,
            stdout,
            stderr,
        )?;
    }

    for file in &invocation.files {
        let path = Path::new(file);
        match source::read_file(path) {
            Ok(data) => {
                failed |= emit(
                    algorithm,
                    &data,
                    Source::Path(path),
                    invocation,
                    stdout,
                    stderr,
                )?;
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read input file");
                let _ = writeln!(
                    stderr,
                    "rdigest: {}: {}: {error}",
                    algorithm.name(),
                    path.display()
                );
                failed = true;
            }
        }
    }

    Ok(failed)
}

/// Hashes one materialized input and writes its output line. Returns whether
/// the digest computation itself failed.
fn emit<O: Write, E: Write>(
    algorithm: Algorithm,
    data: &[u8],
    origin: Source<'_>,
    invocation: &Invocation,
    stdout: &mut O,
    stderr: &mut E,
) -> io::Result<bool> {
    match hashes::digest(algorithm, data) {
        Ok(digest) => {
            write_digest_line(stdout, algorithm, &digest, origin, invocation.style)?;
            Ok(false)
        }
        Err(error) => {
            let _ = writeln!(stderr, "rdigest: {}: {error}", algorithm.name());
            Ok(true)
        }
    }
}
