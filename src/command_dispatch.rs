//! Purpose: Hold top-level CLI command dispatch for `safesum`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Recovered parse/sum failures surface as notices and keep exit code 0.
//! Invariants: Only usage, I/O, and unprintable-total errors end a command early.

use super::*;

use crate::input::{InputSource, read_values};
use safesum::api::{SumOptions, SumReport, demo_values, parse_str, string_to_num, sum_list};

pub(super) fn dispatch_command(
    command: Command,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    let mut reporter = StderrReporter { color_mode };
    match command {
        Command::Parse { inputs, json } => {
            for input in inputs {
                let (shown, result) = if json {
                    let value = decode_json_arg(&input)?;
                    let result = string_to_num(&value, &mut reporter);
                    (value, result)
                } else {
                    let result = parse_str(&input, &mut reporter);
                    (Value::String(input), result)
                };
                emit_json(parse_result_json(shown, &result));
            }
            Ok(RunOutcome::ok())
        }
        Command::Sum {
            values,
            file,
            bools,
            plain,
        } => {
            let source = InputSource::select(values, file)?;
            let values = read_values(&source)?;
            let options = SumOptions::default().with_bools(bools.into());
            let report = sum_list(&values, options, &mut reporter);
            if plain {
                println!("{}", report.total);
            } else {
                emit_json(sum_report_json(&report)?);
            }
            Ok(RunOutcome::ok())
        }
        Command::Demo => {
            let report = sum_list(&demo_values(), SumOptions::default(), &mut reporter);
            println!("{}", report.total);
            Ok(RunOutcome::ok())
        }
    }
}

fn decode_json_arg(input: &str) -> Result<Value, Error> {
    serde_json::from_str(input).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message(format!("--json input is not valid JSON: {input}"))
            .with_hint("Quote text as a JSON string, e.g. '\"123\"'.")
            .with_source(err)
    })
}

fn parse_result_json(input: Value, result: &Result<i64, Error>) -> Value {
    match result {
        Ok(value) => json!({ "input": input, "value": value }),
        Err(err) => json!({ "input": input, "value": null, "error": err.kind() }),
    }
}

// JSON numbers hold i64 or u64; totals outside both ranges only print with --plain.
fn sum_report_json(report: &SumReport) -> Result<Value, Error> {
    serde_json::to_value(report).map_err(|err| {
        Error::new(ErrorKind::OutOfRange)
            .with_message(format!("total {} does not fit in a JSON integer", report.total))
            .with_hint("Use --plain to print the exact total.")
            .with_source(err)
    })
}
