//! Append-only evaluation history for a UI session.

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use crate::equation::EquationMode;
use crate::model::ParameterSet;

/// One past evaluation: the inputs, the model that was active, the computed
/// value, and when it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub params: ParameterSet,
    pub mode: EquationMode,
    pub value: f64,
    pub at: Zoned,
}

/// Ordered log of past evaluations.
///
/// Owned exclusively by the session that produced it; the evaluator never
/// sees this type. Never persisted, only exported on request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    entries: Vec<Evaluation>,
}

impl SessionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an evaluation, stamping it with the current time.
    pub fn push(&mut self, params: ParameterSet, mode: EquationMode, value: f64) {
        self.entries.push(Evaluation {
            params,
            mode,
            value,
            at: Zoned::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Evaluation> {
        self.entries.last()
    }

    /// Entries in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Evaluation> {
        self.entries.iter()
    }

    /// Entry by index counting from the newest (0 = most recent).
    pub fn nth_newest(&self, n: usize) -> Option<&Evaluation> {
        let len = self.entries.len();
        if n < len { self.entries.get(len - 1 - n) } else { None }
    }
}
