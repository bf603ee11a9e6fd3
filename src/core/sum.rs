// Integer accumulation over mixed-type sequences.
// Elements that cannot join the total are skipped and recorded, never fatal.
// The total is i128, so every JSON integer (i64 or u64) is added exactly.
use crate::core::value::type_name;
use serde::Serialize;
use serde_json::Value;

/// How boolean elements take part in a sum.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BoolPolicy {
    /// `true` adds 1, `false` adds 0.
    #[default]
    Count,
    /// Booleans are skipped like any other non-integer element.
    Reject,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SumOptions {
    pub bools: BoolPolicy,
}

impl SumOptions {
    pub fn with_bools(mut self, bools: BoolPolicy) -> Self {
        self.bools = bools;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Skipped {
    pub index: usize,
    #[serde(rename = "type")]
    pub type_name: &'static str,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SumReport {
    pub total: i128,
    pub skipped: Vec<Skipped>,
}

/// Integer contribution of `value`, or `None` when it cannot be added.
pub fn addend(value: &Value, options: SumOptions) -> Option<i128> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from)),
        Value::Bool(flag) if options.bools == BoolPolicy::Count => Some(i128::from(*flag)),
        _ => None,
    }
}

/// Sums `values` in order, calling `on_skip` for each element left out.
pub fn accumulate<F>(values: &[Value], options: SumOptions, mut on_skip: F) -> SumReport
where
    F: FnMut(&Skipped),
{
    let mut report = SumReport::default();
    for (index, value) in values.iter().enumerate() {
        let Some(addend) = addend(value, options) else {
            let skipped = Skipped {
                index,
                type_name: type_name(value),
            };
            on_skip(&skipped);
            report.skipped.push(skipped);
            continue;
        };
        report.total += addend;
    }
    report
}
