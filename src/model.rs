//! Beam model - the analysis entry point
//!
//! `BeamInput` is the single value-in contract of the library: geometry,
//! section constants, supports and loads. `analyze` wires the mesh builder,
//! the load resolver and the solver; it performs no filtering, logging or
//! unit conversion of its own.

use serde::{Deserialize, Serialize};

use crate::diagram;
use crate::elements::{Support, SupportLocation};
use crate::error::BeamResult;
use crate::loads::{Load, LoadCategory};
use crate::mesh;
use crate::results::{AnalysisResult, Diagram};
use crate::solver;

/// Input description of a beam analysis
///
/// All quantities are in one consistent unit system; the library never
/// converts. The reference system used throughout the documentation is SI:
/// metres, newtons, pascals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// Beam length in m, must be positive
    pub length: f64,
    /// Young's modulus in Pa, must be positive
    pub e: f64,
    /// Second moment of area in m^4, must be positive
    pub i: f64,
    /// Supports along the beam axis
    pub supports: Vec<SupportLocation>,
    /// Applied loads
    pub loads: Vec<Load>,
}

impl BeamInput {
    /// Create an input with no supports or loads yet
    pub fn new(length: f64, e: f64, i: f64) -> Self {
        Self {
            length,
            e,
            i,
            supports: Vec::new(),
            loads: Vec::new(),
        }
    }

    /// Add a support
    pub fn with_support(mut self, x: f64, kind: Support) -> Self {
        self.supports.push(SupportLocation::new(x, kind));
        self
    }

    /// Add a load
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Run the analysis: mesh, equivalence loads, solve, recover reactions
    ///
    /// Pure and synchronous; identical inputs produce identical results.
    pub fn analyze(&self) -> BeamResult<AnalysisResult> {
        let mesh = mesh::build_mesh(self.length, self.e, self.i, &self.supports, &self.loads)?;
        solver::solve(&mesh, &self.loads)
    }

    /// Compute diagrams for a previously obtained result of this input
    pub fn diagrams(
        &self,
        result: &AnalysisResult,
        resolution: usize,
        category: LoadCategory,
    ) -> Diagram {
        diagram::diagrams(
            self.length,
            &result.nodes,
            &self.loads,
            &result.reactions,
            &result.displacements,
            resolution,
            category,
        )
    }
}

/// Analyze a beam input
///
/// Free-function form of [`BeamInput::analyze`].
pub fn analyze(input: &BeamInput) -> BeamResult<AnalysisResult> {
    input.analyze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_style_input() {
        let input = BeamInput::new(10.0, 200e9, 1e-4)
            .with_support(0.0, Support::Pin)
            .with_support(10.0, Support::Roller)
            .with_load(Load::point_force("P1", 5.0, -10_000.0, LoadCategory::Dead));

        let result = input.analyze().unwrap();
        assert_eq!(result.nodes.len(), 3);
        assert_relative_eq!(result.total_reaction(), 10_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let input = BeamInput::new(12.0, 200e9, 2e-4)
            .with_support(0.0, Support::Pin)
            .with_support(7.0, Support::Roller)
            .with_support(12.0, Support::Roller)
            .with_load(Load::point_force("P1", 3.0, -8000.0, LoadCategory::Dead))
            .with_load(Load::distributed("W1", 7.0, 12.0, -900.0, LoadCategory::Live));

        let first = input.analyze().unwrap();
        let second = input.analyze().unwrap();

        assert_eq!(first, second);
    }
}
