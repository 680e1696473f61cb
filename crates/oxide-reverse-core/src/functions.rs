//! Functions exposed to the template environment.
//!
//! A [`FuncMap`] is the lookup table a template evaluator consults when a
//! template calls `gt $n 0` or `distinct .Names`. Every function takes a
//! slice of [`Value`]s and returns a [`Value`] or a [`FuncError`].

use std::collections::BTreeMap;
use std::fmt;

use crate::compare;
use crate::dedup::distinct;
use crate::error::FuncError;
use crate::naming::un_title;
use crate::value::Value;

/// Signature of a template function.
pub type TemplateFn = fn(&[Value]) -> Result<Value, FuncError>;

/// Named template functions.
#[derive(Clone)]
pub struct FuncMap {
    funcs: BTreeMap<String, TemplateFn>,
}

impl fmt::Debug for FuncMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.funcs.keys()).finish()
    }
}

impl Default for FuncMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FuncMap {
    /// Creates a map with the comparison functions (`eq`, `ne`, `lt`, `le`,
    /// `gt`, `ge`) and the string helpers (`distinct`, `UnTitle`).
    #[must_use]
    pub fn new() -> Self {
        let mut map = Self::empty();
        map.register("eq", call_eq);
        map.register("ne", call_ne);
        map.register("lt", call_lt);
        map.register("le", call_le);
        map.register("gt", call_gt);
        map.register("ge", call_ge);
        map.register("distinct", call_distinct);
        map.register("UnTitle", call_un_title);
        map
    }

    /// Creates a map with no functions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            funcs: BTreeMap::new(),
        }
    }

    /// Registers a function, replacing any previous one of the same name.
    pub fn register(&mut self, name: impl Into<String>, func: TemplateFn) {
        self.funcs.insert(name.into(), func);
    }

    /// Returns whether a function is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.funcs.keys().map(String::as_str)
    }

    /// Calls the function registered under `name`.
    ///
    /// # Errors
    ///
    /// [`FuncError::UnknownFunction`] if nothing is registered under `name`,
    /// otherwise whatever the function returns.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, FuncError> {
        let func = self
            .funcs
            .get(name)
            .ok_or_else(|| FuncError::UnknownFunction(name.to_string()))?;
        func(args)
    }
}

fn expect_args<'a>(
    name: &str,
    args: &'a [Value],
    count: usize,
) -> Result<&'a [Value], FuncError> {
    if args.len() == count {
        Ok(args)
    } else {
        Err(FuncError::ArgumentCount {
            name: name.to_string(),
            expected: count.to_string(),
            got: args.len(),
        })
    }
}

fn call_eq(args: &[Value]) -> Result<Value, FuncError> {
    let Some((first, rest)) = args.split_first() else {
        return Err(FuncError::ArgumentCount {
            name: String::from("eq"),
            expected: String::from("at least 1"),
            got: 0,
        });
    };
    Ok(Value::Bool(compare::eq(first, rest)?))
}

fn call_ne(args: &[Value]) -> Result<Value, FuncError> {
    let args = expect_args("ne", args, 2)?;
    Ok(Value::Bool(compare::ne(&args[0], &args[1])?))
}

fn call_lt(args: &[Value]) -> Result<Value, FuncError> {
    let args = expect_args("lt", args, 2)?;
    Ok(Value::Bool(compare::lt(&args[0], &args[1])?))
}

fn call_le(args: &[Value]) -> Result<Value, FuncError> {
    let args = expect_args("le", args, 2)?;
    Ok(Value::Bool(compare::le(&args[0], &args[1])?))
}

fn call_gt(args: &[Value]) -> Result<Value, FuncError> {
    let args = expect_args("gt", args, 2)?;
    Ok(Value::Bool(compare::gt(&args[0], &args[1])?))
}

fn call_ge(args: &[Value]) -> Result<Value, FuncError> {
    let args = expect_args("ge", args, 2)?;
    Ok(Value::Bool(compare::ge(&args[0], &args[1])?))
}

fn call_distinct(args: &[Value]) -> Result<Value, FuncError> {
    let args = expect_args("distinct", args, 1)?;
    let type_error = || FuncError::ArgumentType {
        name: String::from("distinct"),
        index: 0,
        expected: "list of strings",
    };
    let items = args[0].as_seq().ok_or_else(type_error)?;
    let strings = items
        .iter()
        .map(|item| item.as_str().ok_or_else(type_error))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::from(distinct(&strings)))
}

fn call_un_title(args: &[Value]) -> Result<Value, FuncError> {
    let args = expect_args("UnTitle", args, 1)?;
    let s = args[0].as_str().ok_or(FuncError::ArgumentType {
        name: String::from("UnTitle"),
        index: 0,
        expected: "string",
    })?;
    Ok(Value::from(un_title(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;

    #[test]
    fn test_default_functions() {
        let funcs = FuncMap::new();
        assert_eq!(
            funcs.names().collect::<Vec<_>>(),
            vec!["UnTitle", "distinct", "eq", "ge", "gt", "le", "lt", "ne"]
        );
    }

    #[test]
    fn test_call_comparisons() {
        let funcs = FuncMap::new();
        let call = |name: &str, args: &[Value]| funcs.call(name, args);

        assert_eq!(
            call("eq", &[5.into(), 3.into(), 5.into(), 7.into()]),
            Ok(Value::Bool(true))
        );
        assert_eq!(call("gt", &[3_usize.into(), 0_usize.into()]), Ok(Value::Bool(true)));
        assert_eq!(call("le", &["a".into(), "a".into()]), Ok(Value::Bool(true)));
        assert_eq!(call("ne", &[1.into(), 2.into()]), Ok(Value::Bool(true)));
        assert_eq!(call("ge", &[1.into(), 2.into()]), Ok(Value::Bool(false)));
        assert_eq!(call("lt", &[1.5.into(), 2.5.into()]), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_comparison_errors_pass_through() {
        let funcs = FuncMap::new();
        assert_eq!(
            funcs.call("eq", &[5.into(), "5".into()]),
            Err(FuncError::Compare(CompareError::Incompatible))
        );
        assert_eq!(
            funcs.call("lt", &[true.into(), false.into()]),
            Err(FuncError::Compare(CompareError::InvalidType))
        );
        assert_eq!(
            funcs.call("eq", &[5.into()]),
            Err(FuncError::Compare(CompareError::MissingArgument))
        );
    }

    #[test]
    fn test_argument_count() {
        let funcs = FuncMap::new();
        assert!(matches!(
            funcs.call("gt", &[1.into()]),
            Err(FuncError::ArgumentCount { got: 1, .. })
        ));
        assert!(matches!(
            funcs.call("eq", &[]),
            Err(FuncError::ArgumentCount { got: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            FuncMap::new().call("Mapper", &["x".into()]),
            Err(FuncError::UnknownFunction(String::from("Mapper")))
        );
    }

    #[test]
    fn test_distinct_function() {
        let funcs = FuncMap::new();
        let names = Value::from(vec!["time", "fmt", "time"]);
        assert_eq!(
            funcs.call("distinct", &[names]),
            Ok(Value::from(vec!["time", "fmt"]))
        );
        assert!(matches!(
            funcs.call("distinct", &[Value::from(vec![1, 2])]),
            Err(FuncError::ArgumentType { index: 0, .. })
        ));
    }

    #[test]
    fn test_un_title_function() {
        let funcs = FuncMap::new();
        assert_eq!(
            funcs.call("UnTitle", &["UserId".into()]),
            Ok(Value::from("userId"))
        );
    }

    #[test]
    fn test_register_custom_function() {
        fn always(_: &[Value]) -> Result<Value, FuncError> {
            Ok(Value::Bool(true))
        }
        let mut funcs = FuncMap::empty();
        assert!(!funcs.contains("always"));
        funcs.register("always", always);
        assert_eq!(funcs.call("always", &[]), Ok(Value::Bool(true)));
    }
}
