//! Node entity - a point on the beam axis

use serde::{Deserialize, Serialize};

use super::Support;

/// A node on the beam axis
///
/// Nodes are produced by the mesh builder in strictly increasing `x` order
/// and are immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, unique within one analysis
    pub id: String,
    /// Axial coordinate in m
    pub x: f64,
    /// Support condition at this node
    pub support: Support,
}

impl Node {
    /// Create a new node
    pub fn new(id: impl Into<String>, x: f64, support: Support) -> Self {
        Self {
            id: id.into(),
            x,
            support,
        }
    }

    /// Create an unsupported node
    pub fn free(id: impl Into<String>, x: f64) -> Self {
        Self::new(id, x, Support::Free)
    }

    /// Whether the vertical DOF at this node is restrained
    pub fn restrained_y(&self) -> bool {
        self.support.restrains_y()
    }

    /// Whether the rotational DOF at this node is restrained
    pub fn restrained_rotation(&self) -> bool {
        self.support.restrains_rotation()
    }

    /// Whether any DOF at this node is restrained
    pub fn is_supported(&self) -> bool {
        self.support.is_supported()
    }
}
