//! Module A: a single integer `add`.

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::surface::{Args, FunctionSpec, ModuleSpec, Param};
use crate::value::{Kind, Value};

pub const NAME: &str = "day1";
pub const DOC: &str = "First pyo3 module";

// Core Rust functions (callable from Rust)
pub fn add(i: i64, j: i64) -> i64 {
    i.wrapping_add(j)
}

pub const MODULE: ModuleSpec = ModuleSpec {
    name: NAME,
    doc: DOC,
    functions: &[FunctionSpec {
        name: "add",
        doc: Some("A function that adds two numbers"),
        params: &[
            Param { name: "i", kind: Kind::Int },
            Param { name: "j", kind: Kind::Int },
        ],
        returns: Kind::Int,
        invoke: |args: &Args| Ok(Value::from(add(args.int(0)?, args.int(1)?))),
    }],
};

// Python-exposed functions

/// A function that adds two numbers
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "add", signature = (i, j))]
fn py_add(i: i64, j: i64) -> i64 {
    add(i, j)
}

#[cfg(feature = "python")]
pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new_bound(parent.py(), NAME)?;
    m.setattr("__doc__", DOC)?;
    m.add_function(wrap_pyfunction!(py_add, &m)?)?;
    crate::add_submodule(parent, &m, NAME)
}
