//! Applied loads

use serde::{Deserialize, Serialize};

use super::LoadCategory;

/// A load applied to the beam
///
/// Magnitudes are signed along the conventions of the solver: point forces
/// act along +y (negative = downward), point moments about +z, distributed
/// intensities in force per unit length along +y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// A concentrated force at a single position
    PointForce {
        id: String,
        /// Position in m
        x: f64,
        /// Signed magnitude in N
        magnitude: f64,
        category: LoadCategory,
    },
    /// A concentrated moment at a single position
    PointMoment {
        id: String,
        /// Position in m
        x: f64,
        /// Signed magnitude in N*m, counter-clockwise positive
        magnitude: f64,
        category: LoadCategory,
    },
    /// A uniform line load over a span
    DistributedForce {
        id: String,
        /// Start of the loaded span in m
        start_x: f64,
        /// End of the loaded span in m, must exceed `start_x`
        end_x: f64,
        /// Signed intensity in N/m
        w: f64,
        category: LoadCategory,
    },
}

impl Load {
    /// Create a point force
    pub fn point_force(id: impl Into<String>, x: f64, magnitude: f64, category: LoadCategory) -> Self {
        Self::PointForce {
            id: id.into(),
            x,
            magnitude,
            category,
        }
    }

    /// Create a point moment
    pub fn point_moment(id: impl Into<String>, x: f64, magnitude: f64, category: LoadCategory) -> Self {
        Self::PointMoment {
            id: id.into(),
            x,
            magnitude,
            category,
        }
    }

    /// Create a uniform distributed force over `[start_x, end_x]`
    pub fn distributed(
        id: impl Into<String>,
        start_x: f64,
        end_x: f64,
        w: f64,
        category: LoadCategory,
    ) -> Self {
        Self::DistributedForce {
            id: id.into(),
            start_x,
            end_x,
            w,
            category,
        }
    }

    /// The load identifier
    pub fn id(&self) -> &str {
        match self {
            Self::PointForce { id, .. }
            | Self::PointMoment { id, .. }
            | Self::DistributedForce { id, .. } => id,
        }
    }

    /// The category this load belongs to
    pub fn category(&self) -> LoadCategory {
        match self {
            Self::PointForce { category, .. }
            | Self::PointMoment { category, .. }
            | Self::DistributedForce { category, .. } => *category,
        }
    }

    /// Total vertical force contributed by this load
    ///
    /// Point moments contribute no net force.
    pub fn total_force(&self) -> f64 {
        match self {
            Self::PointForce { magnitude, .. } => *magnitude,
            Self::PointMoment { .. } => 0.0,
            Self::DistributedForce {
                start_x, end_x, w, ..
            } => w * (end_x - start_x),
        }
    }
}
