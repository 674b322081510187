//! Load categories

use serde::{Deserialize, Serialize};

/// Category a load belongs to
///
/// Categories are carried through the pipeline for filtering in the diagram
/// stage; the solver itself ignores them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCategory {
    /// Self-weight and permanent loads
    #[default]
    Dead,
    /// Occupancy loads
    Live,
    /// Wind loads
    Wind,
    /// Snow loads
    Snow,
    /// Seismic loads
    Seismic,
}
