//! Purpose: Define the stable public Rust API boundary for safesum.
//! Exports: Entry points, option/report types, and the error model.
//! Role: Public, additive-only surface; hides the pure core modules.
//! Invariants: This module is the only public path to core types.
//! Invariants: Internal modules remain private and are not directly exposed.

mod ops;

pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::numeric::is_numeric_text;
pub use crate::core::sum::{BoolPolicy, Skipped, SumOptions, SumReport};
pub use crate::core::value::type_name;
pub use ops::{parse_str, string_to_num, sum_list};

/// Input summed by `safesum demo`.
pub fn demo_values() -> Vec<serde_json::Value> {
    vec![2.into(), 6.into(), 12.into(), true.into()]
}
