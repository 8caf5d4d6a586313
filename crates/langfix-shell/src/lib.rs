pub mod settings;

use anyhow::{Context, Result};
use langfix_core::{Conversion, ConvertHandler, ResultSink, SinkError};
use settings::Settings;
use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::{info, warn, Level};

pub const APP_NAME: &str = "Language Fixer";

/// Prints each result on its own line.
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for LineSink<W> {
    fn show(&mut self, conversion: &Conversion) -> Result<(), SinkError> {
        writeln!(self.out, "{}", conversion.display_text())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Level named in settings, or `INFO` when the name is not recognised.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

/// Text printed at startup, unless disabled in settings.
pub fn startup_notice(settings: &Settings) -> Option<String> {
    settings
        .show_notice
        .then(|| format!("{}: Running in background", APP_NAME))
}

fn init_logging(settings: &Settings) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(parse_level(&settings.log_level));

    match &settings.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Converts every input line until EOF. Returns the number of conversions.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than ending the session.
pub fn run_session<R: BufRead, S: ResultSink>(
    mut input: R,
    handler: &mut ConvertHandler<S>,
) -> Result<usize> {
    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if n == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line {} is not valid UTF-8", count + 1);
        }
        handler.on_convert(&line)?;
        count += 1;
    }
    Ok(count)
}

/// Joins command-line words into one conversion request.
pub fn join_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = OsString>,
{
    let words: Vec<String> = args
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

pub fn run() -> Result<()> {
    let (settings, settings_err) = match settings::load_settings() {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logging(&settings)?;
    if let Some(e) = settings_err {
        warn!("Using default settings: {:#}", e);
    }

    info!("{} started", APP_NAME);
    if let Some(notice) = startup_notice(&settings) {
        eprintln!("{}", notice);
    }

    let stdout = std::io::stdout();
    let mut handler = ConvertHandler::new(LineSink::new(stdout.lock()));

    let count = match join_args(std::env::args_os().skip(1)) {
        Some(text) => {
            handler.on_convert(&text)?;
            1
        }
        None => {
            let stdin = std::io::stdin();
            run_session(stdin.lock(), &mut handler)?
        }
    };
    info!("{} stopped after {} conversions", APP_NAME, count);
    Ok(())
}
