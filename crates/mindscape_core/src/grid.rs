//! Sweeping the evaluator along one or two parameters.
//!
//! A sweep holds every other parameter fixed at its value in the base set
//! and substitutes linearly spaced samples for the swept one(s). Surface
//! rows are evaluated in parallel when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::equation::{EquationMode, evaluate};
use crate::error::GridError;
use crate::model::{ParamRanges, Parameter, ParameterSet};

/// Default sample count for one-dimensional sweeps.
pub const LINE_STEPS: usize = 50;
/// Default sample count per surface axis.
pub const SURFACE_STEPS: usize = 20;

/// One swept parameter: which one, over what range, at what resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAxis {
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl SweepAxis {
    pub fn new(parameter: Parameter, min: f64, max: f64, steps: usize) -> Self {
        Self {
            parameter,
            min,
            max,
            steps,
        }
    }

    /// An axis spanning the parameter's declared UI range.
    pub fn over_range(parameter: Parameter, ranges: &ParamRanges, steps: usize) -> Self {
        let (min, max) = ranges.bounds(parameter);
        Self {
            parameter,
            min,
            max,
            steps,
        }
    }

    /// Linearly spaced samples, inclusive of both endpoints.
    pub fn values(&self) -> Vec<f64> {
        let denom = (self.steps - 1).max(1) as f64;
        (0..self.steps)
            .map(|i| self.min + (self.max - self.min) * i as f64 / denom)
            .collect()
    }
}

/// Result of a one-dimensional sweep: `c[i] = evaluate(base with parameter = x[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepLine {
    pub parameter: Parameter,
    pub x: Vec<f64>,
    pub c: Vec<f64>,
}

impl SweepLine {
    /// Smallest and largest computed value, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        min_max(self.c.iter().copied())
    }
}

/// Sweep a single parameter, holding the other nine fixed.
pub fn sweep_line(
    mode: EquationMode,
    base: &ParameterSet,
    axis: &SweepAxis,
) -> Result<SweepLine, GridError> {
    if axis.steps < 2 {
        return Err(GridError::BadResolution(axis.steps));
    }

    let x = axis.values();
    let c = x
        .iter()
        .map(|&v| evaluate(mode, &base.with(axis.parameter, v)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SweepLine {
        parameter: axis.parameter,
        x,
        c,
    })
}

/// Result of a two-parameter sweep.
///
/// Axis-binding convention: rows follow the y axis and columns the x axis,
/// so `z[i][j] = evaluate(base with x_parameter = x[j], y_parameter = y[i])`.
/// `z.len() == y.len()` and every row has `x.len()` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub x_parameter: Parameter,
    pub y_parameter: Parameter,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    pub fn rows(&self) -> usize {
        self.z.len()
    }

    pub fn cols(&self) -> usize {
        self.z.first().map_or(0, Vec::len)
    }

    /// Smallest and largest cell value, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        min_max(self.z.iter().flatten().copied())
    }
}

/// Sweep two distinct parameters over their Cartesian product.
pub fn sample_surface(
    mode: EquationMode,
    base: &ParameterSet,
    x_axis: &SweepAxis,
    y_axis: &SweepAxis,
) -> Result<SurfaceGrid, GridError> {
    if x_axis.parameter == y_axis.parameter {
        return Err(GridError::DuplicateAxis(x_axis.parameter));
    }
    for axis in [x_axis, y_axis] {
        if axis.steps < 2 {
            return Err(GridError::BadResolution(axis.steps));
        }
    }

    let x = x_axis.values();
    let y = y_axis.values();

    let row = |&yv: &f64| -> Result<Vec<f64>, GridError> {
        let with_y = base.with(y_axis.parameter, yv);
        x.iter()
            .map(|&xv| {
                evaluate(mode, &with_y.with(x_axis.parameter, xv)).map_err(GridError::from)
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let z = y.par_iter().map(row).collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let z = y.iter().map(row).collect::<Result<Vec<_>, _>>()?;

    Ok(SurfaceGrid {
        x_parameter: x_axis.parameter,
        y_parameter: y_axis.parameter,
        x,
        y,
        z,
    })
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
