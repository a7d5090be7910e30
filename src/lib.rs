#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod day1;
pub mod day2;
pub mod error;
pub mod surface;
pub mod value;

pub use error::{CallError, Result};
pub use surface::{call, lookup, modules, FunctionSpec, ModuleSpec, Param};
pub use value::{Kind, Value};

pub const MODULE_NAME: &str = "example";

// Python module definition

/// Attach `child` to `parent` and register it in `sys.modules`, so that
/// `import example.day1` resolves as well as attribute access.
#[cfg(feature = "python")]
fn add_submodule(
    parent: &Bound<'_, PyModule>,
    child: &Bound<'_, PyModule>,
    name: &str,
) -> PyResult<()> {
    parent.add_submodule(child)?;
    parent
        .py()
        .import_bound("sys")?
        .getattr("modules")?
        .set_item(format!("{MODULE_NAME}.{name}"), child)?;
    Ok(())
}

/// Week 1 pyo3 exercises: `day1` and `day2` submodules.
#[cfg(feature = "python")]
#[pymodule]
fn example(m: &Bound<'_, PyModule>) -> PyResult<()> {
    day1::register(m)?;
    day2::register(m)?;
    Ok(())
}
