//! Error types for beam analysis

use thiserror::Error;

/// Main error type for beam analysis operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Position {x} m is outside the beam domain [0, {length}]")]
    OutOfDomain { x: f64, length: f64 },

    #[error("Conflicting supports near x = {0} m")]
    ConflictingSupports(f64),

    #[error("Structure is unstable - insufficient supports or a mechanism")]
    UnstableStructure,

    #[error("Load '{0}' does not align with the mesh")]
    LoadNotAligned(String),
}

/// Result type for beam analysis operations
pub type BeamResult<T> = Result<T, BeamError>;
