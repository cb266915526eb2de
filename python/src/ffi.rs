//! ffi.rs
//! `Gzip` and `RootModule` classes plus the exception hierarchy.
//!
//! Each Python-side `Gzip` object is one execution context: construct one per
//! virtual user and keep it for that user's lifetime.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use gzip_core::prelude::{
    CompressionLevel, Gzip, GzipConfig, Instance, Module, RootModule, VuHandle, MODULE_NAME,
};
use gzip_core::types::GzipError as CoreError;

create_exception!(rust_gzip, GzipError, PyException, "Base class for gzip facade errors.");
create_exception!(rust_gzip, InvalidArgumentError, GzipError, "Empty payload.");
create_exception!(rust_gzip, EncodingError, GzipError, "Compressed stream could not be produced.");
create_exception!(rust_gzip, DecodingError, GzipError, "Compressed stream could not be read.");

fn to_py_err(err: CoreError) -> PyErr {
    match err {
        CoreError::InvalidArgument { .. } => InvalidArgumentError::new_err(err.to_string()),
        CoreError::Encoding { .. } => EncodingError::new_err(err.to_string()),
        CoreError::Decoding { .. } => DecodingError::new_err(err.to_string()),
    }
}

fn build_config(level: Option<&str>, collect_metrics: Option<bool>) -> PyResult<GzipConfig> {
    let level = level
        .map(str::parse::<CompressionLevel>)
        .transpose()
        .map_err(PyValueError::new_err)?;
    Ok(GzipConfig::new(level, collect_metrics))
}

#[pyclass(name = "Gzip", module = "rust_gzip", frozen)]
pub struct PyGzip {
    inner: Gzip,
}

#[pymethods]
impl PyGzip {
    #[new]
    #[pyo3(signature = (vu_id=0, level=None, collect_metrics=None))]
    fn new(vu_id: u64, level: Option<&str>, collect_metrics: Option<bool>) -> PyResult<Self> {
        let config = build_config(level, collect_metrics)?;
        Ok(Self { inner: Gzip::new(VuHandle::new(vu_id), &config) })
    }

    #[getter]
    fn vu_id(&self) -> u64 {
        self.inner.vu().id()
    }

    #[getter]
    fn level(&self) -> u32 {
        self.inner.level()
    }

    /// Compress text; returns the container as a str with one char per byte.
    fn compress(&self, input: &str) -> PyResult<String> {
        self.inner.compress(input).map_err(to_py_err)
    }

    fn compress_bytes<'py>(&self, py: Python<'py>, input: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
        let out = self.inner.compress_bytes(input).map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &out))
    }

    fn decompress(&self, compressed: &str) -> PyResult<String> {
        self.inner.decompress(compressed).map_err(to_py_err)
    }

    fn decompress_bytes<'py>(&self, py: Python<'py>, compressed: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
        let out = self.inner.decompress_bytes(compressed).map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &out))
    }

    fn is_gzipped(&self, data: &str) -> bool {
        self.inner.is_gzipped(data)
    }

    fn is_gzipped_bytes(&self, data: &[u8]) -> bool {
        self.inner.is_gzipped_bytes(data)
    }

    fn __repr__(&self) -> String {
        format!("Gzip(vu_id={}, level={})", self.inner.vu().id(), self.inner.level())
    }
}

/// Factory handing out one `Gzip` per execution context.
#[pyclass(name = "RootModule", module = "rust_gzip", frozen)]
pub struct PyRootModule {
    inner: RootModule,
}

#[pymethods]
impl PyRootModule {
    #[new]
    #[pyo3(signature = (level=None, collect_metrics=None))]
    fn new(level: Option<&str>, collect_metrics: Option<bool>) -> PyResult<Self> {
        let config = build_config(level, collect_metrics)?;
        let inner = RootModule::with_config(config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    #[getter]
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn new_module_instance(&self, vu_id: u64) -> PyGzip {
        let instance = self.inner.new_module_instance(VuHandle::new(vu_id));
        PyGzip { inner: instance.exports().default.clone() }
    }
}

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("MODULE_NAME", MODULE_NAME)?;
    m.add_class::<PyGzip>()?;
    m.add_class::<PyRootModule>()?;

    m.add("GzipError", py.get_type_bound::<GzipError>())?;
    m.add("InvalidArgumentError", py.get_type_bound::<InvalidArgumentError>())?;
    m.add("EncodingError", py.get_type_bound::<EncodingError>())?;
    m.add("DecodingError", py.get_type_bound::<DecodingError>())?;

    tracing::debug!(module = MODULE_NAME, "registered python bindings");
    Ok(())
}
