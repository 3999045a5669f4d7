//! Core data types: parameters, ranges, and the session history log.

mod history;
mod params;

pub use history::{Evaluation, SessionHistory};
pub use params::{ParamRanges, Parameter, ParameterSet};
