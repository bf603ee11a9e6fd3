// Digit-only text to integer conversion.
// Accepts Unicode decimal digits (general category Nd) only: no sign, no
// decimal point, no whitespace, no other numerics such as fractions or
// superscripts. Scripts may be mixed within one string.
use crate::core::error::{Error, ErrorKind};
use crate::core::value::type_name;
use serde_json::Value;

// Code point of the zero of every Nd run (Unicode 15.1). Each run is ten
// consecutive code points, zero through nine.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of `ch` when it is a decimal digit in any script.
pub fn decimal_digit_value(ch: char) -> Option<u32> {
    if ch.is_ascii() {
        return ch.to_digit(10);
    }
    let code = u32::from(ch);
    let run = DECIMAL_ZEROS.partition_point(|zero| *zero <= code);
    let zero = DECIMAL_ZEROS[run.checked_sub(1)?];
    let offset = code - zero;
    (offset < 10).then_some(offset)
}

/// True when `text` is non-empty and every char is a decimal digit.
pub fn is_numeric_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| decimal_digit_value(ch).is_some())
}

pub fn parse_numeric_text(text: &str) -> Result<i64, Error> {
    if !is_numeric_text(text) {
        return Err(Error::new(ErrorKind::NotNumericText));
    }
    let mut value = 0i64;
    for digit in text.chars().filter_map(decimal_digit_value) {
        value = value
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(i64::from(digit)))
            .ok_or_else(|| {
                let digits = text.chars().count();
                Error::new(ErrorKind::OutOfRange)
                    .with_message(format!("numeric string of {digits} digits does not fit in i64"))
            })?;
    }
    Ok(value)
}

pub fn parse_numeric_value(value: &Value) -> Result<i64, Error> {
    match value {
        Value::String(text) => parse_numeric_text(text),
        other => Err(Error::new(ErrorKind::WrongArgumentType).with_type_name(type_name(other))),
    }
}
