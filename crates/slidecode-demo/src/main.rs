//! `slidecode-demo` - print a highlighted file, or every state of a tagged walkthrough, to the
//! terminal.

mod ansi;
mod args;
mod error;
mod steps;

use args::parse_args;
use error::DemoError;
use slidecode::sample::CodeSample;
use slidecode::{CodeScope, CodeStyle, Highlighter, Language};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::{env, fs};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    match run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DemoError::Usage(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "demo failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Keep an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: impl IntoIterator<Item = String>) -> Result<(), DemoError> {
    let args = parse_args(args)?;
    let source = read(&args.file)?;
    let language = match args.language {
        Some(language) => language,
        None => Language::from_path(&args.file)?,
    };
    let style = match &args.palette {
        Some(path) => CodeStyle::load_from_path(path)?,
        None => CodeStyle::default(),
    };
    let scope = if args.body {
        CodeScope::Body
    } else {
        CodeScope::File
    };
    tracing::info!(file = %args.file.display(), %language, ?scope, "highlighting");

    let highlighter = Highlighter::new(style).with_scope(scope);
    let mut out = io::stdout().lock();

    match &args.steps {
        None => {
            let highlighted = highlighter.highlight(&source, language);
            ansi::write_highlighted(&mut out, &highlighted, None)?;
        }
        Some(path) => {
            let script = read(path)?;
            let sample = CodeSample::parse(&source)?;
            let rendered = steps::render_states(&sample, &steps::parse_steps(&script)?)?;
            for (index, state) in rendered.iter().enumerate() {
                ansi::write_header(&mut out, index + 1, rendered.len())?;
                let highlighted = state.highlight(&highlighter, language);
                ansi::write_highlighted(&mut out, &highlighted, state.focus.as_ref())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn read(path: &Path) -> Result<String, DemoError> {
    fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })
}
