//! Digest output formatting.
//!
//! The default line is `ALG(source)= <lowercase hex>`; `-r` swaps it to
//! `<lowercase hex> source`; `-q` and standard input reduce the line to the
//! bare digest. Literal (`-s`) sources render in double quotes, file sources
//! as the path exactly as given.

use std::io::{self, Write};
use std::path::Path;

use hashes::{Algorithm, Digest};

/// Where the hashed bytes came from, for rendering purposes.
#[derive(Clone, Copy)]
pub(crate) enum Source<'a> {
    /// Standard input: no name, so only the digest is printed.
    Stdin,
    /// A `-s` literal, rendered in double quotes.
    Literal(&'a str),
    /// A file operand, rendered as its path.
    Path(&'a Path),
}

/// Output-shape switches (`-q`, `-r`).
#[derive(Clone, Copy)]
pub(crate) struct OutputStyle {
    pub(crate) quiet: bool,
    pub(crate) reverse: bool,
}

pub(crate) fn write_digest_line<W: Write>(
    out: &mut W,
    algorithm: Algorithm,
    digest: &Digest,
    source: Source<'_>,
    style: OutputStyle,
) -> io::Result<()> {
    match source {
        Source::Stdin => writeln!(out, "{digest}"),
        _ if style.quiet => writeln!(out, "{digest}"),
        Source::Literal(literal) if style.reverse => writeln!(out, "{digest} \"{literal}\""),
        Source::Literal(literal) => {
            writeln!(out, "{}(\"{literal}\")= {digest}", algorithm.display_name())
        }
        Source::Path(path) if style.reverse => writeln!(out, "{digest} {}", path.display()),
        Source::Path(path) => {
            writeln!(out, "{}({})= {digest}", algorithm.display_name(), path.display())
        }
    }
}
