//! Element entity - a prismatic beam segment between consecutive nodes

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::mesh::EPS_GEOM;

/// A prismatic Euler-Bernoulli beam element
///
/// `start` and `end` index into the mesh node list; since nodes are sorted
/// by `x`, `end` is always `start + 1`. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identifier, unique within one analysis
    pub id: String,
    /// Index of the start node in the mesh node list
    pub start: usize,
    /// Index of the end node in the mesh node list
    pub end: usize,
    /// Young's modulus in Pa
    pub e: f64,
    /// Second moment of area in m^4
    pub i: f64,
    length: f64,
}

impl Element {
    /// Create an element between two node positions
    ///
    /// Fails with `InvalidGeometry` when the span is shorter than the
    /// geometric tolerance and `InvalidMaterial` when `E` or `I` is
    /// non-positive.
    pub fn new(
        id: impl Into<String>,
        start: usize,
        end: usize,
        start_x: f64,
        end_x: f64,
        e: f64,
        i: f64,
    ) -> BeamResult<Self> {
        let id = id.into();
        let length = (end_x - start_x).abs();

        if length <= EPS_GEOM {
            return Err(BeamError::InvalidGeometry(format!(
                "element '{id}' has zero length between x = {start_x} and x = {end_x}"
            )));
        }
        if e <= 0.0 {
            return Err(BeamError::InvalidMaterial(format!(
                "element '{id}' has non-positive Young's modulus E = {e}"
            )));
        }
        if i <= 0.0 {
            return Err(BeamError::InvalidMaterial(format!(
                "element '{id}' has non-positive second moment of area I = {i}"
            )));
        }

        Ok(Self {
            id,
            start,
            end,
            e,
            i,
            length,
        })
    }

    /// Element length in m
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Global DOF indices for this element's endpoints, ordered
    /// `[v_start, theta_start, v_end, theta_end]`
    pub fn dof_indices(&self) -> [usize; 4] {
        [
            2 * self.start,
            2 * self.start + 1,
            2 * self.end,
            2 * self.end + 1,
        ]
    }
}
