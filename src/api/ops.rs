//! Purpose: Public parse/sum entry points that pair explicit results with reported notices.
//! Exports: `string_to_num`, `parse_str`, `sum_list`.
//! Role: Bridge between pure core logic and the caller's `Reporter`.
//! Invariants: Every recovered failure produces exactly one notice.
//! Invariants: Results are returned to the caller regardless of reporting.

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::numeric::{parse_numeric_text, parse_numeric_value};
use crate::core::sum::{SumOptions, SumReport, accumulate};
use crate::notice::{Notice, Reporter};

const PARSE_CMD: &str = "parse";
const SUM_CMD: &str = "sum";

/// Converts a digit-only text value to an integer.
///
/// Non-text values fail with [`ErrorKind::WrongArgumentType`], text with any
/// non-digit (or no characters) fails with [`ErrorKind::NotNumericText`], and
/// digit runs too large for `i64` fail with [`ErrorKind::OutOfRange`]. Each
/// failure is also sent to `reporter` as a [`Notice`].
pub fn string_to_num(value: &Value, reporter: &mut dyn Reporter) -> Result<i64, Error> {
    let result = parse_numeric_value(value);
    observe_parse(result, reporter)
}

/// Same as [`string_to_num`] for input already known to be text.
pub fn parse_str(text: &str, reporter: &mut dyn Reporter) -> Result<i64, Error> {
    let result = parse_numeric_text(text);
    observe_parse(result, reporter)
}

fn observe_parse(result: Result<i64, Error>, reporter: &mut dyn Reporter) -> Result<i64, Error> {
    match &result {
        Ok(value) => tracing::debug!(value, "parsed numeric string"),
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "numeric string rejected");
            reporter.report(Notice::from_error(PARSE_CMD, err));
        }
    }
    result
}

/// Sums `values` in order, skipping elements that cannot be added.
///
/// Each skipped element is reported with the skip notice and listed in the
/// returned [`SumReport`]. Integers anywhere in the `i64` or `u64` range are
/// summed exactly.
pub fn sum_list(values: &[Value], options: SumOptions, reporter: &mut dyn Reporter) -> SumReport {
    let report = accumulate(values, options, |skipped| {
        tracing::debug!(
            index = skipped.index,
            element_type = skipped.type_name,
            "skipping unsummable element"
        );
        let err = Error::new(ErrorKind::UnsummableElement)
            .with_index(skipped.index)
            .with_type_name(skipped.type_name);
        reporter.report(Notice::from_error(SUM_CMD, &err));
    });
    tracing::debug!(
        total = %report.total,
        skipped = report.skipped.len(),
        "sum complete"
    );
    report
}
