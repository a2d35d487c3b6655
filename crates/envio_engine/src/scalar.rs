//! Text forms of the scalar kinds.

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{Display, LowerExp};
use core::num::ParseIntError;
use core::str::{self, FromStr};

use envio_reflect::ops::{FloatMut, FloatRef, IntMut, ReflectMut, ReflectRef, UintMut};

use crate::error::FieldError;

// -----------------------------------------------------------------------------
// Parse

fn parse_bool(text: &str) -> Result<bool, FieldError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(FieldError::InvalidSyntax),
    }
}

/// Unsigned integers take no sign, not even `+`.
fn parse_uint<T: FromStr<Err = ParseIntError>>(text: &str) -> Result<T, FieldError> {
    if text.starts_with('+') {
        return Err(FieldError::InvalidSyntax);
    }
    Ok(text.parse()?)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! parse_float {
    ($name:ident, $ty:ty) => {
        fn $name(text: &str) -> Result<$ty, FieldError> {
            let value: $ty = text.parse()?;
            if value.is_infinite() && !is_infinity_literal(text) {
                return Err(FieldError::FloatOutOfRange);
            }
            Ok(value)
        }
    };
}

parse_float!(parse_f32, f32);
parse_float!(parse_f64, f64);

/// Parses `raw` into a scalar target.
///
/// Integers are parsed at the target's exact width, so out-of-range input is
/// an error instead of a silent truncation. The target is untouched on
/// failure.
pub(crate) fn decode(raw: &[u8], target: ReflectMut<'_>) -> Result<(), FieldError> {
    let text = str::from_utf8(raw).map_err(|_| FieldError::InvalidUtf8)?;
    match target {
        ReflectMut::Bool(v) => *v = parse_bool(text)?,
        ReflectMut::Int(int) => match int {
            IntMut::I8(v) => *v = text.parse()?,
            IntMut::I16(v) => *v = text.parse()?,
            IntMut::I32(v) => *v = text.parse()?,
            IntMut::I64(v) => *v = text.parse()?,
            IntMut::Isize(v) => *v = text.parse()?,
        },
        ReflectMut::Uint(uint) => match uint {
            UintMut::U8(v) => *v = parse_uint(text)?,
            UintMut::U16(v) => *v = parse_uint(text)?,
            UintMut::U32(v) => *v = parse_uint(text)?,
            UintMut::U64(v) => *v = parse_uint(text)?,
            UintMut::Usize(v) => *v = parse_uint(text)?,
        },
        ReflectMut::Float(float) => match float {
            FloatMut::F32(v) => *v = parse_f32(text)?,
            FloatMut::F64(v) => *v = parse_f64(text)?,
        },
        ReflectMut::String(v) => {
            v.clear();
            v.push_str(text);
        }
        _ => return Err(FieldError::KindMismatch),
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Format

/// Formats a float with the shortest digits that parse back to `value`.
///
/// Decimal exponents outside `-4..21` switch to scientific notation with a
/// signed, two-digit minimum exponent, as in `1e+300`.
fn format_float(value: impl Display + LowerExp, out: &mut Vec<u8>) {
    let sci = format!("{value:e}");
    let split = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match split {
        Some((mantissa, exp)) if !(-4..21).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            let text = format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
            out.extend_from_slice(text.as_bytes());
        }
        _ => out.extend_from_slice(value.to_string().as_bytes()),
    }
}

/// Appends the text form of a scalar to `out`.
pub(crate) fn encode(value: ReflectRef<'_>, out: &mut Vec<u8>) -> Result<(), FieldError> {
    match value {
        ReflectRef::Bool(v) => out.extend_from_slice(if v { b"true" } else { b"false" }),
        ReflectRef::Int(v) => out.extend_from_slice(v.to_string().as_bytes()),
        ReflectRef::Uint(v) => out.extend_from_slice(v.to_string().as_bytes()),
        ReflectRef::Float(FloatRef::F32(v)) => format_float(v, out),
        ReflectRef::Float(FloatRef::F64(v)) => format_float(v, out),
        ReflectRef::String(v) => out.extend_from_slice(v.as_bytes()),
        _ => return Err(FieldError::KindMismatch),
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use envio_reflect::Reflect;

    use super::{decode, encode};
    use crate::error::FieldError;

    fn text<T: Reflect>(value: &T) -> String {
        let mut out = Vec::new();
        encode(value.reflect_ref(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bool_literals() {
        for lit in ["1", "t", "T", "TRUE", "true", "True"] {
            let mut value = false;
            decode(lit.as_bytes(), value.reflect_mut()).unwrap();
            assert!(value, "{lit}");
        }
        for lit in ["0", "f", "F", "FALSE", "false", "False"] {
            let mut value = true;
            decode(lit.as_bytes(), value.reflect_mut()).unwrap();
            assert!(!value, "{lit}");
        }

        let mut value = false;
        let err = decode(b"yes", value.reflect_mut()).unwrap_err();
        assert!(matches!(err, FieldError::InvalidSyntax));
        assert_eq!(err.to_string(), "invalid syntax");
    }

    #[test]
    fn ints_use_exact_width() {
        let mut small: i8 = 1;
        assert!(decode(b"200", small.reflect_mut()).is_err());
        assert_eq!(small, 1);

        decode(b"-128", small.reflect_mut()).unwrap();
        assert_eq!(small, -128);

        let mut wide: u64 = 0;
        decode(b"18446744073709551615", wide.reflect_mut()).unwrap();
        assert_eq!(wide, u64::MAX);
        assert!(decode(b"-1", wide.reflect_mut()).is_err());
    }

    #[test]
    fn unsigned_rejects_any_sign() {
        let mut value: u8 = 3;
        let err = decode(b"+7", value.reflect_mut()).unwrap_err();
        assert!(matches!(err, FieldError::InvalidSyntax));
        assert_eq!(value, 3);

        let mut signed: i8 = 0;
        decode(b"+7", signed.reflect_mut()).unwrap();
        assert_eq!(signed, 7);
    }

    #[test]
    fn floats() {
        let mut value: f64 = 0.0;
        decode(b"2.5", value.reflect_mut()).unwrap();
        assert_eq!(value, 2.5);

        decode(b"-inf", value.reflect_mut()).unwrap();
        assert!(value.is_infinite());

        let mut narrow: f32 = 0.0;
        let err = decode(b"1e40", narrow.reflect_mut()).unwrap_err();
        assert!(matches!(err, FieldError::FloatOutOfRange));
        assert_eq!(narrow, 0.0);

        assert_eq!(text(&1.25_f64), "1.25");
        assert_eq!(text(&0.1_f32), "0.1");
    }

    #[test]
    fn float_exponent_form() {
        assert_eq!(text(&1e300_f64), "1e+300");
        assert_eq!(text(&1e-30_f32), "1e-30");
        assert_eq!(text(&1.5e-5_f64), "1.5e-05");
        assert_eq!(text(&-2.5e21_f64), "-2.5e+21");
        assert_eq!(text(&1e20_f64), "100000000000000000000");
        assert_eq!(text(&0.0001_f64), "0.0001");
        assert_eq!(text(&0.0_f64), "0");
        assert_eq!(text(&f64::INFINITY), "inf");

        let mut big: f64 = 0.0;
        decode(text(&1e300_f64).as_bytes(), big.reflect_mut()).unwrap();
        assert_eq!(big, 1e300);

        let mut small: f32 = 0.0;
        decode(text(&1e-30_f32).as_bytes(), small.reflect_mut()).unwrap();
        assert_eq!(small, 1e-30);
    }

    #[test]
    fn strings_and_utf8() {
        let mut value = String::from("old");
        decode(b"new", value.reflect_mut()).unwrap();
        assert_eq!(value, "new");

        let err = decode(&[0xFF], value.reflect_mut()).unwrap_err();
        assert!(matches!(err, FieldError::InvalidUtf8));
        assert_eq!(value, "new");
    }

    #[test]
    fn formatting() {
        assert_eq!(text(&true), "true");
        assert_eq!(text(&-42_i32), "-42");
        assert_eq!(text(&7_u8), "7");
        assert_eq!(text(&String::from("a,b")), "a,b");
    }

    #[test]
    fn non_scalars_are_rejected() {
        let mut value: Option<i32> = None;
        assert!(matches!(
            decode(b"1", value.reflect_mut()),
            Err(FieldError::KindMismatch)
        ));
    }
}
