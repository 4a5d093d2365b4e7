use ghgecon_components::python::components;
use ghgecon_core::python::core;
use pyo3::prelude::*;
use pyo3::wrap_pymodule;

#[pymodule]
#[pyo3(name = "_lib")]
fn ghgecon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_wrapped(wrap_pymodule!(core))?;
    m.add_wrapped(wrap_pymodule!(components))?;

    set_path(m, "ghgecon._lib.core", "core")?;
    set_path(m, "ghgecon._lib.components", "components")?;

    Ok(())
}

/// Make a submodule importable by its dotted path.
fn set_path(m: &Bound<'_, PyModule>, path: &str, module: &str) -> PyResult<()> {
    let submodule = m.getattr(module)?;
    m.py()
        .import_bound("sys")?
        .getattr("modules")?
        .set_item(path, submodule)
}
