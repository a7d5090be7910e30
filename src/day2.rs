//! Module B: functions with several different signatures.

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::surface::{Args, FunctionSpec, ModuleSpec, Param};
use crate::value::{Kind, Value};

pub const NAME: &str = "day2";
pub const DOC: &str = "Week 1 Day 2: multiple function signatures";

// Core Rust functions (callable from Rust)
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Left-to-right sum starting from `+0.0`, so an empty slice yields `0.0`
/// rather than the `-0.0` that `Iterator::sum` produces for floats.
pub fn sum_list(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |acc, x| acc + x)
}

pub const MODULE: ModuleSpec = ModuleSpec {
    name: NAME,
    doc: DOC,
    functions: &[
        FunctionSpec {
            name: "add",
            doc: None,
            params: &[
                Param { name: "a", kind: Kind::Int },
                Param { name: "b", kind: Kind::Int },
            ],
            returns: Kind::Int,
            invoke: |args: &Args| Ok(Value::from(add(args.int(0)?, args.int(1)?))),
        },
        FunctionSpec {
            name: "multiply",
            doc: None,
            params: &[
                Param { name: "a", kind: Kind::Float },
                Param { name: "b", kind: Kind::Float },
            ],
            returns: Kind::Float,
            invoke: |args: &Args| Ok(Value::from(multiply(args.float(0)?, args.float(1)?))),
        },
        FunctionSpec {
            name: "greet",
            doc: None,
            params: &[Param { name: "name", kind: Kind::Text }],
            returns: Kind::Text,
            invoke: |args: &Args| Ok(Value::from(greet(args.text(0)?))),
        },
        FunctionSpec {
            name: "sum_list",
            doc: Some("Sum a list of numbers"),
            params: &[Param { name: "numbers", kind: Kind::FloatList }],
            returns: Kind::Float,
            invoke: |args: &Args| Ok(Value::from(sum_list(args.float_list(0)?))),
        },
    ],
};

// Python-exposed functions

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "add", signature = (a, b))]
fn py_add(a: i64, b: i64) -> i64 {
    add(a, b)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "multiply", signature = (a, b))]
fn py_multiply(a: f64, b: f64) -> f64 {
    multiply(a, b)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "greet", signature = (name))]
fn py_greet(name: &str) -> String {
    greet(name)
}

/// Sum a list of numbers
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "sum_list", signature = (numbers))]
fn py_sum_list(numbers: Vec<f64>) -> f64 {
    sum_list(&numbers)
}

#[cfg(feature = "python")]
pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new_bound(parent.py(), NAME)?;
    m.setattr("__doc__", DOC)?;
    m.add_function(wrap_pyfunction!(py_add, &m)?)?;
    m.add_function(wrap_pyfunction!(py_multiply, &m)?)?;
    m.add_function(wrap_pyfunction!(py_greet, &m)?)?;
    m.add_function(wrap_pyfunction!(py_sum_list, &m)?)?;
    crate::add_submodule(parent, &m, NAME)
}
