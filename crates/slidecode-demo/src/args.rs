use crate::error::DemoError;
use slidecode::Language;
use std::path::PathBuf;

pub const USAGE: &str = "\
usage: slidecode-demo <file> [--lang <tag>] [--palette <palette.yaml>] [--body] [--steps <file>]

  --lang <tag>        language tag (kotlin-dsl, xml, yaml, toml, hocon, groovy, properties, text);
                      detected from the file name by default
  --palette <file>    YAML palette overriding the default colors
  --body              the file is a fragment (e.g. several XML elements without a root)
  --steps <file>      step script; the file is a tagged sample rendered once per state

Logging goes to stderr and is controlled by RUST_LOG (default: warn).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub file: PathBuf,
    pub language: Option<Language>,
    pub palette: Option<PathBuf>,
    pub body: bool,
    pub steps: Option<PathBuf>,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, DemoError> {
    let mut args = args.into_iter();
    let mut file = None;
    let mut language = None;
    let mut palette = None;
    let mut body = false;
    let mut steps = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => language = Some(value(&mut args, "--lang")?.parse::<Language>()?),
            "--palette" => palette = Some(PathBuf::from(value(&mut args, "--palette")?)),
            "--steps" => steps = Some(PathBuf::from(value(&mut args, "--steps")?)),
            "--body" => body = true,
            "-h" | "--help" => return Err(DemoError::Usage(USAGE.to_string())),
            flag if flag.starts_with("--") => {
                return Err(DemoError::Usage(format!("unknown option {flag}\n\n{USAGE}")));
            }
            _ if file.is_some() => {
                return Err(DemoError::Usage(format!("unexpected argument {arg}\n\n{USAGE}")));
            }
            _ => file = Some(PathBuf::from(arg)),
        }
    }

    let file = file.ok_or_else(|| DemoError::Usage(USAGE.to_string()))?;
    Ok(Args {
        file,
        language,
        palette,
        body,
        steps,
    })
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, DemoError> {
    args.next()
        .ok_or_else(|| DemoError::Usage(format!("{flag} needs a value\n\n{USAGE}")))
}
