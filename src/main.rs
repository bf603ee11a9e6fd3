//! Purpose: `safesum` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, emits results on stdout.
//! Invariants: Results go to stdout; notices and errors go to stderr only.
//! Invariants: Non-interactive errors and notices are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::error::Error as StdError;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

mod command_dispatch;
mod input;

use safesum::api::{BoolPolicy, Error, ErrorKind, to_exit_code};
use safesum::notice::{Notice, Reporter, notice_json};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome { exit_code });
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Try `safesum --help`."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    init_tracing();
    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command, color_mode).map_err(|err| (err, color_mode))
}

#[derive(Parser)]
#[command(
    name = "safesum",
    version,
    about = "Parse digit-only strings and sum mixed JSON values, skipping what can't be added",
    after_help = r#"EXAMPLES
  $ safesum parse 123 12a
  $ safesum parse --json 5
  $ safesum sum '[1, "x", 2]'
  $ echo '[2, 6, 12, true]' | safesum sum --plain
  $ safesum demo

Notices for skipped or rejected input are written to stderr.
Set RUST_LOG=debug for tracing output."#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr labels: auto|always|never"
    )]
    color: ColorMode,
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BoolsCli {
    Count,
    Reject,
}

impl From<BoolsCli> for BoolPolicy {
    fn from(value: BoolsCli) -> Self {
        match value {
            BoolsCli::Count => BoolPolicy::Count,
            BoolsCli::Reject => BoolPolicy::Reject,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Convert digit-only strings to integers")]
    Parse {
        #[arg(required = true, help = "Strings to convert")]
        inputs: Vec<String>,
        #[arg(long, help = "Decode each input as a JSON value before converting")]
        json: bool,
    },
    #[command(about = "Sum a JSON array, skipping elements that are not integers")]
    Sum {
        #[arg(help = "JSON array (or value stream); `-` or omitted reads stdin")]
        values: Option<String>,
        #[arg(long, help = "Read values from a file", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[arg(
            long,
            default_value = "count",
            value_enum,
            help = "Booleans: count as 1/0, or reject and skip"
        )]
        bools: BoolsCli,
        #[arg(long, help = "Print only the total")]
        plain: bool,
    },
    #[command(about = "Sum [2, 6, 12, true] and print the total")]
    Demo,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Writes notices to stderr as they arrive.
struct StderrReporter {
    color_mode: ColorMode,
}

impl Reporter for StderrReporter {
    fn report(&mut self, notice: Notice) {
        emit_notice(&notice, self.color_mode);
    }
}

fn emit_json(value: Value) {
    let encoded = if io::stdout().is_terminal() {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    let json = encoded.unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn emit_notice(notice: &Notice, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        let label = colorize_label("notice:", color_mode.use_color(is_tty), AnsiColor::Yellow);
        eprintln!("{}", notice_text(&label, notice));
        return;
    }

    let value = notice_json(notice);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"notice\":{\"kind\":\"internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn notice_text(label: &str, notice: &Notice) -> String {
    match notice.details.get("index").and_then(Value::as_u64) {
        Some(index) => format!("{label} {} (index: {index})", notice.message),
        None => format!("{label} {}", notice.message),
    }
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message().or(err.kind().notice_message()) {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::OutOfRange => "value out of range".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
        ErrorKind::NotNumericText | ErrorKind::WrongArgumentType | ErrorKind::UnsummableElement => {
            "invalid input".to_string()
        }
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(index) = err.index() {
        inner.insert("index".to_string(), json!(index));
    }
    if let Some(type_name) = err.type_name() {
        inner.insert("type".to_string(), json!(type_name));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(index) = err.index() {
        lines.push(format!(
            "{} {index}",
            colorize_label("index:", use_color, AnsiColor::Yellow)
        ));
    }

    let causes = error_causes(err);
    if let Some(cause) = causes.first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }
    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
