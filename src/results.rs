//! Result types for beam analysis

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::elements::Node;
use crate::mesh::EPS_MERGE;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Vertical translation in m, upward positive
    pub y: f64,
    /// Rotation in rad, counter-clockwise positive
    pub rotation: f64,
}

/// Reaction at a supported node
///
/// Components for unrestrained DOFs are exported as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Vertical reaction force in N
    pub fy: f64,
    /// Reaction moment in N*m
    pub m: f64,
}

/// Full output of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The mesh nodes the results refer to, in axial order
    pub nodes: Vec<Node>,
    /// Displacements for every node, keyed by node id
    pub displacements: HashMap<String, NodeDisplacement>,
    /// Reactions for restrained nodes only, keyed by node id
    pub reactions: HashMap<String, Reaction>,
}

impl AnalysisResult {
    /// Get the displacement at a node
    pub fn displacement(&self, node_id: &str) -> Option<NodeDisplacement> {
        self.displacements.get(node_id).copied()
    }

    /// Get the reaction at a node; `None` for unrestrained nodes
    pub fn reaction(&self, node_id: &str) -> Option<Reaction> {
        self.reactions.get(node_id).copied()
    }

    /// Find the node within the merge tolerance of `x`
    pub fn node_near(&self, x: f64) -> Option<&Node> {
        self.nodes.iter().find(|n| (n.x - x).abs() < EPS_MERGE)
    }

    /// Sum of all vertical reaction components
    pub fn total_reaction(&self) -> f64 {
        self.reactions.values().map(|r| r.fy).sum()
    }

    /// Largest absolute vertical displacement
    pub fn max_displacement(&self) -> f64 {
        self.displacements
            .values()
            .map(|d| d.y.abs())
            .fold(0.0, f64::max)
    }
}

/// A single diagram sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Sample position in m
    pub x: f64,
    /// Sampled value
    pub value: f64,
}

/// Shear, moment and deflected-shape diagrams over the beam
///
/// The three sequences share the same uniformly spaced sample positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Shear force V(x) in N
    pub shear: Vec<DiagramPoint>,
    /// Bending moment M(x) in N*m
    pub moment: Vec<DiagramPoint>,
    /// Deflected shape w(x) in m
    pub deflection: Vec<DiagramPoint>,
}

impl Diagram {
    /// Largest absolute shear value
    pub fn max_shear(&self) -> f64 {
        Self::max_abs(&self.shear)
    }

    /// Largest absolute moment value
    pub fn max_moment(&self) -> f64 {
        Self::max_abs(&self.moment)
    }

    /// Largest absolute deflection value
    pub fn max_deflection(&self) -> f64 {
        Self::max_abs(&self.deflection)
    }

    fn max_abs(points: &[DiagramPoint]) -> f64 {
        points.iter().map(|p| p.value.abs()).fold(0.0, f64::max)
    }
}
