//! Synthetic-test parameter overrides.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use temblor_core::Parameterized;

use crate::error::DatasetError;

/// Replaces a problem's nominal source with one built from known
/// parameters, so an inversion can be verified against ground truth.
///
/// The configuration lists parameter overrides by name; everything not
/// listed keeps the problem's base value. Before [`get_x`](Self::get_x)
/// can produce a vector, the test must capture a problem's parameter
/// layout via [`set_problem`](Self::set_problem).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntheticTest {
    /// Ground-truth parameter values by parameter name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub x: IndexMap<String, f64>,
    #[serde(skip)]
    bound: Option<BoundParameters>,
}

#[derive(Debug, Clone)]
struct BoundParameters {
    names: Vec<String>,
    base_x: Vec<f64>,
}

impl SyntheticTest {
    /// Capture `problem`'s parameter names and base vector.
    pub fn set_problem(&mut self, problem: &dyn Parameterized) {
        self.bound = Some(BoundParameters {
            names: problem.parameter_names(),
            base_x: problem.base_x(),
        });
    }

    /// True once a problem's layout has been captured.
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// The ground-truth parameter vector: the captured base vector with
    /// the configured overrides applied.
    pub fn get_x(&self) -> Result<Vec<f64>, DatasetError> {
        let bound = self.bound.as_ref().ok_or(DatasetError::NoProblemBound)?;
        let mut x = bound.base_x.clone();
        for (name, value) in &self.x {
            let index = bound
                .names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| DatasetError::UnknownParameter { name: name.clone() })?;
            x[index] = *value;
        }
        Ok(x)
    }
}
