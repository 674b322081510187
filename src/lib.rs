//! Beam Solver - 2D Euler-Bernoulli beam analysis in native Rust
//!
//! This library is the computational core of a beam analyzer. Given a beam,
//! its supports and its loads, it produces:
//! - nodal displacements and rotations
//! - support reactions
//! - shear force, bending moment and deflected-shape diagrams
//!
//! The pipeline is mesh generation from feature points, element stiffness
//! assembly, consistent load equivalencing, a constrained linear solve with
//! mechanism detection, reaction recovery from the equilibrium residual and
//! analytical diagram reconstruction by the method of sections.
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! // 10 m simply supported beam, 10 kN at mid-span
//! let input = BeamInput::new(10.0, 200e9, 1e-4)
//!     .with_support(0.0, Support::Pin)
//!     .with_support(10.0, Support::Roller)
//!     .with_load(Load::point_force("P1", 5.0, -10_000.0, LoadCategory::Dead));
//!
//! let result = input.analyze().unwrap();
//!
//! // Each support carries half the load
//! let left = result.reaction("N0").unwrap();
//! assert!((left.fy - 5000.0).abs() < 1e-6);
//!
//! // Diagrams sampled at 200 intervals
//! let diagrams = input.diagrams(&result, 200, LoadCategory::Dead);
//! assert_eq!(diagrams.moment.len(), 201);
//! ```

pub mod diagram;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod mesh;
pub mod model;
pub mod resolver;
pub mod results;
pub mod solver;

// Re-export common types
pub mod prelude {
    pub use crate::diagram::{diagrams, DEFAULT_RESOLUTION};
    pub use crate::elements::{Element, Node, Support, SupportLocation};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{Load, LoadCategory};
    pub use crate::mesh::{build_mesh, Mesh};
    pub use crate::model::{analyze, BeamInput};
    pub use crate::results::{
        AnalysisResult, Diagram, DiagramPoint, NodeDisplacement, Reaction,
    };
}
