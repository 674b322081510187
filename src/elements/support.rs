//! Support conditions

use serde::{Deserialize, Serialize};

/// Idealized support condition at a node
///
/// The model carries two degrees of freedom per node (vertical translation
/// and rotation about the out-of-plane axis), so the axial restraint that
/// distinguishes a pin from a roller in 2D frames has no effect here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Support {
    /// No restraint
    #[default]
    Free,
    /// Vertical translation restrained
    Roller,
    /// Vertical and axial translation restrained, rotation free
    Pin,
    /// All translations and rotation restrained
    Fixed,
}

impl Support {
    /// Whether the vertical translation DOF is restrained
    pub fn restrains_y(&self) -> bool {
        !matches!(self, Support::Free)
    }

    /// Whether the rotational DOF is restrained
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, Support::Fixed)
    }

    /// Check if any DOF is restrained
    pub fn is_supported(&self) -> bool {
        self.restrains_y() || self.restrains_rotation()
    }

    /// Count of restrained DOFs (out of the node's two)
    pub fn num_restrained(&self) -> usize {
        self.restrains_y() as usize + self.restrains_rotation() as usize
    }
}

/// A support placed along the beam axis, part of the user input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportLocation {
    /// Axial position in m
    pub x: f64,
    /// Kind of restraint
    pub kind: Support,
}

impl SupportLocation {
    /// Create a support at the given position
    pub fn new(x: f64, kind: Support) -> Self {
        Self { x, kind }
    }
}
