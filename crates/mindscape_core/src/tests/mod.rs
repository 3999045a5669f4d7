//! Integration tests for the MindScape evaluation engine
//!
//! Tests are organized by topic:
//! - `equation` - Evaluator correctness, domain errors, memoization
//! - `grid` - Line sweeps and surface sampling conventions
//! - `discovery` - Random scenario generation and ranked search
//! - `universe` - Random-walk timelines
//! - `fitting` - Observation parsing and power-law fits
//! - `export` - CSV/JSON round-trips

mod discovery;
mod equation;
mod export;
mod universe;
