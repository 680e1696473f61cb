//! Kind-based comparisons for template conditionals.
//!
//! Both sides of a comparison must classify to the same [`Kind`](crate::value::Kind); a
//! mismatch is an error, never a quiet `false`. Derived operations (`le`, `gt`, `ne`,
//! `ge`) are built from `eq` and `lt` and surface their errors unchanged.

use crate::error::CompareError;
use crate::value::Value;

/// Evaluates `arg1 == arg2[0] || arg1 == arg2[1] || ...`.
///
/// Candidates are checked in order and the first match wins; a candidate
/// after the match is not classified.
///
/// # Errors
///
/// - [`CompareError::InvalidType`] if any value examined has no kind, or the
///   kind is a sequence.
/// - [`CompareError::MissingArgument`] if `candidates` is empty.
/// - [`CompareError::Incompatible`] if a candidate's kind differs from
///   `arg1`'s.
#[allow(clippy::float_cmp)]
pub fn eq(arg1: &Value, candidates: &[Value]) -> Result<bool, CompareError> {
    let k1 = arg1.kind()?;
    if candidates.is_empty() {
        return Err(CompareError::MissingArgument);
    }
    for arg in candidates {
        let k2 = arg.kind()?;
        if k1 != k2 {
            return Err(CompareError::Incompatible);
        }
        let truth = match (arg1, arg) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Complex(a), Value::Complex(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => return Err(CompareError::InvalidType),
        };
        if truth {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Evaluates `arg1 < arg2`.
///
/// # Errors
///
/// - [`CompareError::InvalidType`] if either value has no kind, or the kind
///   is not orderable (booleans, complex numbers, sequences).
/// - [`CompareError::Incompatible`] if the kinds differ.
pub fn lt(arg1: &Value, arg2: &Value) -> Result<bool, CompareError> {
    let k1 = arg1.kind()?;
    let k2 = arg2.kind()?;
    if k1 != k2 {
        return Err(CompareError::Incompatible);
    }
    if !k1.is_orderable() {
        return Err(CompareError::InvalidType);
    }
    let truth = match (arg1, arg2) {
        (Value::Int(a), Value::Int(b)) => a < b,
        (Value::Uint(a), Value::Uint(b)) => a < b,
        (Value::Float(a), Value::Float(b)) => a < b,
        (Value::Str(a), Value::Str(b)) => a < b,
        _ => return Err(CompareError::InvalidType),
    };
    Ok(truth)
}

/// Evaluates `arg1 <= arg2` as `lt || eq`.
///
/// # Errors
///
/// Same as [`lt`].
pub fn le(arg1: &Value, arg2: &Value) -> Result<bool, CompareError> {
    let less = lt(arg1, arg2)?;
    if less {
        return Ok(true);
    }
    eq(arg1, std::slice::from_ref(arg2))
}

/// Evaluates `arg1 > arg2` as the negation of [`le`].
///
/// # Errors
///
/// Same as [`lt`].
pub fn gt(arg1: &Value, arg2: &Value) -> Result<bool, CompareError> {
    le(arg1, arg2).map(|less_or_equal| !less_or_equal)
}

/// Evaluates `arg1 >= arg2` as the negation of [`lt`].
///
/// # Errors
///
/// Same as [`lt`].
pub fn ge(arg1: &Value, arg2: &Value) -> Result<bool, CompareError> {
    lt(arg1, arg2).map(|less| !less)
}

/// Evaluates `arg1 != arg2` as the negation of [`eq`] with one candidate.
///
/// # Errors
///
/// Same as [`eq`].
pub fn ne(arg1: &Value, arg2: &Value) -> Result<bool, CompareError> {
    eq(arg1, std::slice::from_ref(arg2)).map(|equal| !equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Complex;

    fn v(x: impl Into<Value>) -> Value {
        x.into()
    }

    #[test]
    fn test_eq_any_candidate() {
        assert_eq!(eq(&v(5), &[v(3), v(5), v(7)]), Ok(true));
        assert_eq!(eq(&v(5), &[v(3), v(7)]), Ok(false));
        assert_eq!(eq(&v("a"), &[v("a")]), Ok(true));
        assert_eq!(eq(&v(true), &[v(false), v(true)]), Ok(true));
        assert_eq!(eq(&v(2_u8), &[v(2_u64)]), Ok(true));
        assert_eq!(eq(&v(0.5), &[v(0.5_f32)]), Ok(true));
        assert_eq!(
            eq(&v(Complex::new(1.0, 2.0)), &[v(Complex::new(1.0, 2.0))]),
            Ok(true)
        );
        assert_eq!(
            eq(&v(Complex::new(1.0, 2.0)), &[v(Complex::new(1.0, -2.0))]),
            Ok(false)
        );
    }

    #[test]
    fn test_eq_kind_mismatch_is_an_error() {
        assert_eq!(eq(&v(5), &[v("5")]), Err(CompareError::Incompatible));
        assert_eq!(eq(&v(5), &[v(5_u32)]), Err(CompareError::Incompatible));
        // A mismatch anywhere before a match aborts the call.
        assert_eq!(eq(&v(5), &[v(1), v("x"), v(5)]), Err(CompareError::Incompatible));
    }

    #[test]
    fn test_eq_short_circuits_on_match() {
        assert_eq!(eq(&v(5), &[v(5), v("x")]), Ok(true));
        assert_eq!(eq(&v(5), &[v(5), Value::Nil]), Ok(true));
    }

    #[test]
    fn test_eq_argument_errors() {
        assert_eq!(eq(&v(5), &[]), Err(CompareError::MissingArgument));
        assert_eq!(eq(&Value::Nil, &[v(1)]), Err(CompareError::InvalidType));
        assert_eq!(eq(&v(1), &[Value::Nil]), Err(CompareError::InvalidType));
        // Unclassifiable primary is reported before the missing candidates.
        assert_eq!(eq(&Value::Nil, &[]), Err(CompareError::InvalidType));
    }

    #[test]
    fn test_eq_sequences_are_not_comparable() {
        let seq = v(vec![1, 2]);
        assert_eq!(eq(&seq, &[seq.clone()]), Err(CompareError::InvalidType));
        assert_eq!(eq(&seq, &[v(1)]), Err(CompareError::Incompatible));
    }

    #[test]
    fn test_float_nan_semantics() {
        let nan = v(f64::NAN);
        assert_eq!(eq(&nan, &[nan.clone()]), Ok(false));
        assert_eq!(lt(&nan, &v(1.0)), Ok(false));
        assert_eq!(lt(&v(1.0), &nan), Ok(false));
    }

    #[test]
    fn test_lt() {
        assert_eq!(lt(&v(1), &v(2)), Ok(true));
        assert_eq!(lt(&v(2), &v(2)), Ok(false));
        assert_eq!(lt(&v(-1), &v(-2)), Ok(false));
        assert_eq!(lt(&v(1_u32), &v(2_u32)), Ok(true));
        assert_eq!(lt(&v(1.5), &v(2.5)), Ok(true));
        assert_eq!(lt(&v("abc"), &v("abd")), Ok(true));
        assert_eq!(lt(&v("b"), &v("a")), Ok(false));
    }

    #[test]
    fn test_lt_errors() {
        assert_eq!(lt(&v(true), &v(false)), Err(CompareError::InvalidType));
        assert_eq!(
            lt(&v(Complex::new(0.0, 1.0)), &v(Complex::new(1.0, 0.0))),
            Err(CompareError::InvalidType)
        );
        assert_eq!(lt(&v(1), &v("1")), Err(CompareError::Incompatible));
        assert_eq!(lt(&v(1), &v(1.0)), Err(CompareError::Incompatible));
        assert_eq!(lt(&Value::Nil, &v(1)), Err(CompareError::InvalidType));
        assert_eq!(lt(&v(1), &Value::Nil), Err(CompareError::InvalidType));
        assert_eq!(
            lt(&v(vec![1]), &v(vec![2])),
            Err(CompareError::InvalidType)
        );
    }

    #[test]
    fn test_le_and_gt() {
        assert_eq!(le(&v(1), &v(1)), Ok(true));
        assert_eq!(le(&v(1), &v(2)), Ok(true));
        assert_eq!(le(&v(3), &v(2)), Ok(false));
        assert_eq!(gt(&v(3), &v(2)), Ok(true));
        assert_eq!(gt(&v(2), &v(2)), Ok(false));
        assert_eq!(gt(&v("b"), &v("a")), Ok(true));
    }

    #[test]
    fn test_gt_propagates_errors() {
        assert_eq!(gt(&v(true), &v(false)), Err(CompareError::InvalidType));
        assert_eq!(gt(&v(1), &v("a")), Err(CompareError::Incompatible));
        assert_eq!(le(&v(true), &v(true)), Err(CompareError::InvalidType));
    }

    #[test]
    fn test_ge_and_ne() {
        assert_eq!(ge(&v(2), &v(2)), Ok(true));
        assert_eq!(ge(&v(1), &v(2)), Ok(false));
        assert_eq!(ne(&v("a"), &v("b")), Ok(true));
        assert_eq!(ne(&v(true), &v(true)), Ok(false));
        assert_eq!(ne(&v(1), &v("1")), Err(CompareError::Incompatible));
    }
}
