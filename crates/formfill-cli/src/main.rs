//! 99-bottles demonstration host for the formfill engine.
//!
//! Builds a verse/JSON/HTTP-response form and renders it in a countdown
//! loop through one persistent buffer, so every iteration after the first
//! pays only for the blank regions. Two naive printers are included as
//! throughput baselines; they format directly with no templating.

use std::io::{self, BufWriter, Write};

use clap::{Parser, ValueEnum};
use formfill_core::{values, Fill, Form, PersistentBuffer};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "formfill")]
#[command(about = "Renders 99-bottles stanzas as HTTP/JSON responses")]
#[command(version)]
struct Cli {
    /// Starting bottle count
    #[arg(default_value_t = 0xFF_FFFF)]
    count: u32,

    /// Printing strategy
    #[arg(short, long, value_enum, default_value_t = Mode::Engine)]
    mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Templated renders through a persistent buffer
    Engine,
    /// One formatted write per stanza (baseline)
    Format,
    /// One write per line (baseline)
    Lines,
}

/// Errors the demo can hit while writing output.
#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The four verse lines, with every count as a fixed-width blank.
///
/// The static text is identical for every `count`, which is what lets the
/// persistent buffer skip recopying it across loop iterations.
fn stanza(count: u32) -> Form<impl Fill> {
    values::integer(count)
        + Form::literal(" bottles of beer on the wall,\n")
        + values::integer(count)
        + Form::literal(" bottles of beer.\n")
        + Form::literal("Take one down, pass it around,\n")
        + values::integer(count - 1)
        + Form::literal(" bottles of beer on the wall.\n")
}

/// `{"count":N,"text":"…"}` with the stanza quoted inline.
///
/// The stanza contains newlines, which strict JSON would require escaping;
/// the engine performs none (matching its quoted-value contract).
fn stanza_json(count: u32) -> Form<impl Fill> {
    Form::literal("{\"count\":")
        + values::integer(count)
        + Form::literal(",\"text\":")
        + values::quoted_value(stanza(count))
        + Form::literal("}")
}

/// An HTTP response around `body`, embedding the body's byte length as a
/// static numeral. `body.length()` is known from layout alone, before any
/// value is rendered.
fn http_response<F: Fill>(status: &str, body: Form<F>) -> Form<impl Fill> {
    Form::literal("HTTP/1.1 ")
        + Form::literal(status)
        + Form::literal("\r\nContent-Length:")
        + Form::numeral(body.length() as u64)
        + Form::literal("\r\nContent-Type:application/json\r\n\r\n")
        + body
}

fn run_engine(max_count: u32, out: &mut impl Write) -> io::Result<()> {
    let mut buf = PersistentBuffer::new(512);
    for count in (1..=max_count).rev() {
        let form = http_response("200 OK", stanza_json(count));
        let len = form.length();
        form.write_to(&mut buf);
        out.write_all(&buf.bytes()[..len])?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn run_format(max_count: u32, out: &mut impl Write) -> io::Result<()> {
    for count in (1..=max_count).rev() {
        write!(
            out,
            "{:<10} bottles of beer on the wall,\n{:<10} bottles of beer.\nTake one down, pass it around,\n{:<10} bottles of beer on the wall.\n\n",
            count,
            count,
            count - 1
        )?;
    }
    Ok(())
}

fn run_lines(max_count: u32, out: &mut impl Write) -> io::Result<()> {
    for count in (1..=max_count).rev() {
        writeln!(out, "{count} bottles of beer on the wall,")?;
        writeln!(out, "{count} bottles of beer.")?;
        writeln!(out, "Take one down, pass it around,")?;
        writeln!(out, "{} bottles of beer on the wall.", count - 1)?;
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.mode {
        Mode::Engine => run_engine(cli.count, &mut out)?,
        Mode::Format => run_format(cli.count, &mut out)?,
        Mode::Lines => run_lines(cli.count, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
