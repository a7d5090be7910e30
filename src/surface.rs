//! Callable surface: which functions each module exposes, under which
//! names, and with which parameters. Rust callers can also invoke them by
//! name through [`call`].

use serde::Serialize;
use tracing::debug;

use crate::error::{CallError, Result};
use crate::value::{Kind, Value};
use crate::{day1, day2};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Param {
    pub name: &'static str,
    pub kind: Kind,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub doc: Option<&'static str>,
    pub params: &'static [Param],
    pub returns: Kind,
    #[serde(skip)]
    pub(crate) invoke: fn(&Args) -> Result<Value>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModuleSpec {
    pub name: &'static str,
    pub doc: &'static str,
    pub functions: &'static [FunctionSpec],
}

/// Arguments that already match a function's declared parameters.
pub struct Args {
    function: &'static FunctionSpec,
    values: Vec<Value>,
}

pub fn modules() -> [ModuleSpec; 2] {
    [day1::MODULE, day2::MODULE]
}

pub fn find(module: &str) -> Result<ModuleSpec> {
    modules()
        .into_iter()
        .find(|m| m.name == module)
        .ok_or_else(|| CallError::UnknownModule(module.to_string()))
}

/// Resolve `module.function` to its descriptor.
pub fn lookup(module: &str, function: &str) -> Result<&'static FunctionSpec> {
    find(module)?
        .function(function)
        .ok_or_else(|| CallError::UnknownFunction {
            module: module.to_string(),
            function: function.to_string(),
        })
}

/// Look up `module.function` and invoke it with positional `args`.
pub fn call(module: &str, function: &str, args: Vec<Value>) -> Result<Value> {
    let spec = lookup(module, function)?;
    debug!(module, function, argc = args.len(), "dispatching call");
    spec.call(args)
}

impl ModuleSpec {
    pub fn function(&self, name: &str) -> Option<&'static FunctionSpec> {
        self.functions.iter().find(|f| f.name == name)
    }
}

impl FunctionSpec {
    /// Check arity and kinds, then run the function.
    pub fn call(&'static self, args: Vec<Value>) -> Result<Value> {
        if args.len() != self.params.len() {
            return Err(CallError::ArityMismatch {
                function: self.name.to_string(),
                expected: self.params.len(),
                got: args.len(),
            });
        }

        let values = args
            .into_iter()
            .zip(self.params)
            .map(|(value, param)| {
                let got = value.kind();
                value.coerce(param.kind).ok_or_else(|| self.mismatch(param, got))
            })
            .collect::<Result<Vec<_>>>()?;

        (self.invoke)(&Args {
            function: self,
            values,
        })
    }

    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.kind))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}) -> {}", self.name, params, self.returns)
    }

    fn mismatch(&self, param: &Param, got: Kind) -> CallError {
        CallError::TypeMismatch {
            function: self.name.to_string(),
            param: param.name.to_string(),
            expected: param.kind,
            got,
        }
    }
}

impl Args {
    fn get(&self, idx: usize) -> Result<(&'static Param, &Value)> {
        match (self.function.params.get(idx), self.values.get(idx)) {
            (Some(param), Some(value)) => Ok((param, value)),
            _ => Err(CallError::ArityMismatch {
                function: self.function.name.to_string(),
                expected: self.function.params.len(),
                got: self.values.len(),
            }),
        }
    }

    pub fn int(&self, idx: usize) -> Result<i64> {
        match self.get(idx)? {
            (_, Value::Int(i)) => Ok(*i),
            (param, other) => Err(self.function.mismatch(param, other.kind())),
        }
    }

    pub fn float(&self, idx: usize) -> Result<f64> {
        match self.get(idx)? {
            (_, Value::Float(x)) => Ok(*x),
            (param, other) => Err(self.function.mismatch(param, other.kind())),
        }
    }

    pub fn text(&self, idx: usize) -> Result<&str> {
        match self.get(idx)? {
            (_, Value::Text(s)) => Ok(s),
            (param, other) => Err(self.function.mismatch(param, other.kind())),
        }
    }

    pub fn float_list(&self, idx: usize) -> Result<&[f64]> {
        match self.get(idx)? {
            (_, Value::FloatList(xs)) => Ok(xs),
            (param, other) => Err(self.function.mismatch(param, other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_by_name() {
        assert_eq!(call("day1", "add", vec![Value::Int(2), Value::Int(3)]), Ok(Value::Int(5)));
        assert_eq!(
            call("day2", "multiply", vec![Value::Float(2.5), Value::Float(-2.0)]),
            Ok(Value::Float(-5.0))
        );
        assert_eq!(
            call("day2", "greet", vec![Value::Text(String::new())]),
            Ok(Value::Text("Hello, !".into()))
        );
        assert_eq!(
            call("day2", "sum_list", vec![Value::FloatList(vec![1.0, 2.0, 3.0])]),
            Ok(Value::Float(6.0))
        );
        assert_eq!(
            call("day2", "sum_list", vec![Value::FloatList(Vec::new())]),
            Ok(Value::Float(0.0))
        );
    }

    #[test]
    fn test_int_arguments_accepted_for_float_params() {
        assert_eq!(
            call("day2", "multiply", vec![Value::Int(3), Value::Float(0.5)]),
            Ok(Value::Float(1.5))
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = call("day1", "add", vec![Value::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            CallError::ArityMismatch {
                function: "add".into(),
                expected: 2,
                got: 1,
            }
        );

        assert!(matches!(
            call("day2", "greet", vec![]),
            Err(CallError::ArityMismatch { expected: 1, got: 0, .. })
        ));
    }

    #[test]
    fn test_type_mismatch_does_not_coerce() {
        let err = call("day1", "add", vec![Value::Int(1), Value::Float(2.5)]).unwrap_err();
        assert_eq!(
            err,
            CallError::TypeMismatch {
                function: "add".into(),
                param: "j".into(),
                expected: Kind::Int,
                got: Kind::Float,
            }
        );
        assert_eq!(
            err.to_string(),
            "add(): argument 'j' must be int, not float"
        );

        assert!(matches!(
            call("day2", "greet", vec![Value::Int(42)]),
            Err(CallError::TypeMismatch { .. })
        ));
        assert!(matches!(
            call("day2", "sum_list", vec![Value::Text("1,2".into())]),
            Err(CallError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_args_report_mismatch_instead_of_panicking() {
        let add = lookup("day1", "add").unwrap();
        let args = Args {
            function: add,
            values: vec![Value::Text("1".into())],
        };
        assert_eq!(
            args.int(0),
            Err(CallError::TypeMismatch {
                function: "add".into(),
                param: "i".into(),
                expected: Kind::Int,
                got: Kind::Text,
            })
        );
        assert!(matches!(
            args.int(1),
            Err(CallError::ArityMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            call("day3", "add", vec![]),
            Err(CallError::UnknownModule("day3".into()))
        );
        assert!(matches!(
            call("day1", "multiply", vec![Value::Float(1.0), Value::Float(2.0)]),
            Err(CallError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn test_modules_are_independent() {
        let [a, b] = modules();
        assert_eq!(a.functions.len(), 1);
        assert_eq!(b.functions.len(), 4);
        assert_eq!(find("day2").unwrap().doc, day2::DOC);
    }
}
