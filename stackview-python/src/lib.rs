//! stackview-python: PyO3 Python bindings for stackview.
#![allow(
    clippy::doc_markdown,
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::too_many_arguments
)]
//!
//! Arrays cross the boundary as numpy arrays. Core errors surface as
//! built-in Python exceptions.

use ndarray::{Array2, ArrayD};
use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray2, PyReadonlyArrayDyn};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use stackview_core::{
    colorize_dyn, dark_sequential, light_sequential, moving_square, BrowseOptions, ColorTable,
    Colormap, ListedScale, PlotStyle, Rgba, Sample, StackBrowser, TargetColor,
};

fn core_error(err: stackview_core::Error) -> PyErr {
    match err {
        stackview_core::Error::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
        stackview_core::Error::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
    }
}

fn to_count(name: &str, value: i64) -> PyResult<usize> {
    usize::try_from(value)
        .map_err(|_| PyValueError::new_err(format!("{name} must be non-negative, got {value}")))
}

/// Index image accepted by `colorize`.
#[derive(FromPyObject)]
enum IndexImage<'py> {
    U8(PyReadonlyArrayDyn<'py, u8>),
    U16(PyReadonlyArrayDyn<'py, u16>),
}

/// Target color given as a name, a hex string or three components.
#[derive(FromPyObject)]
enum ColorArg {
    Components((f64, f64, f64)),
    Name(String),
}

impl ColorArg {
    fn target(self) -> PyResult<TargetColor> {
        match self {
            ColorArg::Components((r, g, b)) => Ok(TargetColor::from_components([r, g, b])),
            ColorArg::Name(name) => name.parse().map_err(core_error),
        }
    }
}

fn table_from_numpy(table: &PyReadonlyArray2<'_, u8>) -> PyResult<ColorTable> {
    let view = table.as_array();
    if view.ncols() != 4 {
        return Err(PyValueError::new_err(format!(
            "color table must have shape (N, 4), got {:?}",
            view.shape()
        )));
    }
    let entries: Vec<Rgba> = view
        .rows()
        .into_iter()
        .map(|row| [row[0], row[1], row[2], row[3]])
        .collect();
    ColorTable::from_entries(entries).map_err(core_error)
}

fn table_to_array(table: &ColorTable) -> Array2<u8> {
    let entries = table.entries();
    Array2::from_shape_fn((entries.len(), 4), |(i, c)| entries[i][c])
}

fn scale_to_array(scale: &ListedScale) -> Array2<f64> {
    let colors = scale.colors();
    Array2::from_shape_fn((colors.len(), 4), |(i, c)| colors[i][c])
}

/// Map a 2-D index image through an (N, 4) uint8 color table.
///
/// Returns an array of shape (H, W, 4).
#[pyfunction]
fn colorize<'py>(
    py: Python<'py>,
    image: IndexImage<'py>,
    table: PyReadonlyArray2<'py, u8>,
) -> PyResult<Bound<'py, PyArray3<u8>>> {
    let table = table_from_numpy(&table)?;
    let out = match &image {
        IndexImage::U8(arr) => colorize_dyn(arr.as_array(), &table),
        IndexImage::U16(arr) => colorize_dyn(arr.as_array(), &table),
    }
    .map_err(core_error)?;
    Ok(out.into_pyarray(py))
}

/// Sample a named colormap into an (n, 4) uint8 lookup table.
#[pyfunction]
#[pyo3(signature = (name, n=256))]
fn color_table<'py>(py: Python<'py>, name: &str, n: i64) -> PyResult<Bound<'py, PyArray2<u8>>> {
    let scale = Colormap::from_name(name).map_err(core_error)?;
    let table = ColorTable::from_scale(&scale, to_count("n", n)?).map_err(core_error)?;
    Ok(table_to_array(&table).into_pyarray(py))
}

/// Names of the built-in colormaps.
#[pyfunction]
fn colormap_names() -> Vec<&'static str> {
    Colormap::ALL.iter().map(|c| c.name()).collect()
}

/// Palette from near-white to `color`, as a (steps, 4) float array.
#[pyfunction]
#[pyo3(name = "light_sequential", signature = (color=None, steps=256, reverse=false))]
fn light_sequential_palette<'py>(
    py: Python<'py>,
    color: Option<ColorArg>,
    steps: i64,
    reverse: bool,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let target = color.map_or_else(|| Ok(TargetColor::default()), ColorArg::target)?;
    let scale = light_sequential(target, to_count("steps", steps)?, reverse).map_err(core_error)?;
    Ok(scale_to_array(&scale).into_pyarray(py))
}

/// Palette from black to `color`, as a (steps, 4) float array.
#[pyfunction]
#[pyo3(name = "dark_sequential", signature = (color=None, steps=256, reverse=false))]
fn dark_sequential_palette<'py>(
    py: Python<'py>,
    color: Option<ColorArg>,
    steps: i64,
    reverse: bool,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let target = color.map_or_else(|| Ok(TargetColor::default()), ColorArg::target)?;
    let scale = dark_sequential(target, to_count("steps", steps)?, reverse).map_err(core_error)?;
    Ok(scale_to_array(&scale).into_pyarray(py))
}

/// Synthetic float32 stack of shape (steps, height, width) with a moving square.
#[pyfunction]
#[pyo3(name = "moving_square", signature = (steps=10, shape=(200, 200), factor=3))]
fn moving_square_stack(
    py: Python<'_>,
    steps: usize,
    shape: (usize, usize),
    factor: usize,
) -> Bound<'_, PyArray3<f32>> {
    moving_square(steps, shape, factor).into_pyarray(py)
}

/// Plot parameters for paper figures, as a matplotlib rc dict.
#[pyfunction]
#[pyo3(signature = (font_size=8.0, use_seaborn=true))]
fn paper_style(py: Python<'_>, font_size: f32, use_seaborn: bool) -> PyResult<Bound<'_, PyDict>> {
    let dict = PyDict::new(py);
    for (key, value) in PlotStyle::paper(font_size, use_seaborn).rc_params() {
        dict.set_item(key, value)?;
    }
    Ok(dict)
}

enum AnyBrowser {
    U8(StackBrowser<u8>),
    U16(StackBrowser<u16>),
    F32(StackBrowser<f32>),
    F64(StackBrowser<f64>),
}

macro_rules! with_browser {
    ($any:expr, $b:ident => $body:expr) => {
        match $any {
            AnyBrowser::U8($b) => $body,
            AnyBrowser::U16($b) => $body,
            AnyBrowser::F32($b) => $body,
            AnyBrowser::F64($b) => $body,
        }
    };
}

fn browser<T>(arr: &PyReadonlyArrayDyn<'_, T>, options: BrowseOptions) -> PyResult<StackBrowser<T>>
where
    T: Sample + numpy::Element,
{
    let stack: ArrayD<T> = arr.as_array().to_owned();
    StackBrowser::new(stack, options).map_err(core_error)
}

/// Browse an image stack one frame at a time.
#[pyclass(name = "StackBrowser")]
pub struct PyStackBrowser {
    inner: AnyBrowser,
}

#[pymethods]
impl PyStackBrowser {
    #[new]
    #[pyo3(signature = (
        stack,
        axis=0,
        resize=None,
        enhance_contrast=true,
        antialiasing=false,
        cutoff_min=None,
        cutoff_max=None,
        cmap=None,
        table_size=256
    ))]
    fn new(
        stack: &Bound<'_, PyAny>,
        axis: usize,
        resize: Option<f64>,
        enhance_contrast: bool,
        antialiasing: bool,
        cutoff_min: Option<f64>,
        cutoff_max: Option<f64>,
        cmap: Option<&str>,
        table_size: i64,
    ) -> PyResult<Self> {
        let mut options = BrowseOptions::new()
            .with_axis(axis)
            .with_enhance_contrast(enhance_contrast)
            .with_antialiasing(antialiasing)
            .with_cutoff(cutoff_min, cutoff_max)
            .with_table_size(to_count("table_size", table_size)?);
        if let Some(factor) = resize {
            options = options.with_resize(factor);
        }
        if let Some(name) = cmap {
            options = options.with_colormap(Colormap::from_name(name).map_err(core_error)?);
        }

        let inner = if let Ok(arr) = stack.extract::<PyReadonlyArrayDyn<'_, u8>>() {
            AnyBrowser::U8(browser(&arr, options)?)
        } else if let Ok(arr) = stack.extract::<PyReadonlyArrayDyn<'_, u16>>() {
            AnyBrowser::U16(browser(&arr, options)?)
        } else if let Ok(arr) = stack.extract::<PyReadonlyArrayDyn<'_, f32>>() {
            AnyBrowser::F32(browser(&arr, options)?)
        } else if let Ok(arr) = stack.extract::<PyReadonlyArrayDyn<'_, f64>>() {
            AnyBrowser::F64(browser(&arr, options)?)
        } else {
            return Err(PyValueError::new_err(
                "stack must be a numpy array of uint8, uint16, float32 or float64",
            ));
        };
        Ok(Self { inner })
    }

    /// Render frame `index` as an (H, W, C) uint8 array.
    fn on_index_change<'py>(
        &self,
        py: Python<'py>,
        index: i64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let len = self.__len__();
        let index = usize::try_from(index).map_err(|_| {
            PyIndexError::new_err(format!("index {index} out of range for {len} frames"))
        })?;
        let frame = with_browser!(&self.inner, b => b.frame_at(index)).map_err(core_error)?;
        Ok(frame.into_pyarray(py))
    }

    /// Inclusive `(first, last)` slider positions.
    fn slider_range(&self) -> (usize, usize) {
        let range = with_browser!(&self.inner, b => b.slider_range());
        (*range.start(), *range.end())
    }

    #[getter]
    fn shape(&self) -> Vec<usize> {
        with_browser!(&self.inner, b => b.shape().to_vec())
    }

    fn __len__(&self) -> usize {
        with_browser!(&self.inner, b => b.len())
    }

    fn __repr__(&self) -> String {
        format!("StackBrowser(frames={}, shape={:?})", self.__len__(), self.shape())
    }
}

#[pymodule]
fn stackview(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStackBrowser>()?;
    m.add_function(wrap_pyfunction!(colorize, m)?)?;
    m.add_function(wrap_pyfunction!(color_table, m)?)?;
    m.add_function(wrap_pyfunction!(colormap_names, m)?)?;
    m.add_function(wrap_pyfunction!(light_sequential_palette, m)?)?;
    m.add_function(wrap_pyfunction!(dark_sequential_palette, m)?)?;
    m.add_function(wrap_pyfunction!(moving_square_stack, m)?)?;
    m.add_function(wrap_pyfunction!(paper_style, m)?)?;
    Ok(())
}
