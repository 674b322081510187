//! Mesh generation from beam feature points
//!
//! Nodes are placed at every feature coordinate of the input: the beam ends,
//! every support and every point-load position, and the endpoints of every
//! distributed load. Exact placement lets point loads map to single nodal
//! DOFs and lets distributed loads tile whole elements, so the load resolver
//! never has to subdivide a span.

use serde::{Deserialize, Serialize};

use crate::elements::{Element, Node, Support, SupportLocation};
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;

/// Geometric tolerance below which an element is degenerate, in m
pub const EPS_GEOM: f64 = 1e-6;

/// Absolute tolerance for merging nearby feature coordinates, in m
pub const EPS_MERGE: f64 = 1e-4;

/// The discretized beam: sorted nodes and the elements connecting them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Nodes in strictly increasing `x` order
    pub nodes: Vec<Node>,
    /// Elements between consecutive nodes
    pub elements: Vec<Element>,
}

impl Mesh {
    /// Number of degrees of freedom (two per node)
    pub fn num_dofs(&self) -> usize {
        2 * self.nodes.len()
    }

    /// Find the node within the merge tolerance of `x`
    pub fn node_at(&self, x: f64) -> Option<usize> {
        self.nodes.iter().position(|n| (n.x - x).abs() < EPS_MERGE)
    }
}

/// Build the mesh for a beam of length `length` with uniform `E` and `I`
///
/// Validates the input domain: supports and point loads must lie inside
/// `[0, length]`, distributed spans must be properly ordered and contained.
pub fn build_mesh(
    length: f64,
    e: f64,
    i: f64,
    supports: &[SupportLocation],
    loads: &[Load],
) -> BeamResult<Mesh> {
    if !length.is_finite() || length <= 0.0 {
        return Err(BeamError::InvalidGeometry(format!(
            "beam length must be positive, got {length}"
        )));
    }
    if !e.is_finite() || e <= 0.0 {
        return Err(BeamError::InvalidMaterial(format!(
            "Young's modulus must be positive, got {e}"
        )));
    }
    if !i.is_finite() || i <= 0.0 {
        return Err(BeamError::InvalidMaterial(format!(
            "second moment of area must be positive, got {i}"
        )));
    }

    let in_domain = |x: f64| (0.0..=length).contains(&x);

    let mut features = vec![0.0, length];

    for support in supports {
        if !in_domain(support.x) {
            return Err(BeamError::OutOfDomain {
                x: support.x,
                length,
            });
        }
        features.push(support.x);
    }

    for load in loads {
        match load {
            Load::PointForce { x, .. } | Load::PointMoment { x, .. } => {
                if !in_domain(*x) {
                    return Err(BeamError::OutOfDomain { x: *x, length });
                }
                features.push(*x);
            }
            Load::DistributedForce {
                id,
                start_x,
                end_x,
                ..
            } => {
                if *start_x >= *end_x {
                    return Err(BeamError::InvalidGeometry(format!(
                        "distributed load '{id}' has non-positive span [{start_x}, {end_x}]"
                    )));
                }
                for x in [*start_x, *end_x] {
                    if !in_domain(x) {
                        return Err(BeamError::OutOfDomain { x, length });
                    }
                }
                features.push(*start_x);
                features.push(*end_x);
            }
        }
    }

    features.sort_by(|a, b| a.partial_cmp(b).expect("feature coordinates are finite"));

    // Merge coordinates within tolerance to the earlier one
    let mut coords: Vec<f64> = Vec::with_capacity(features.len());
    for x in features {
        match coords.last() {
            Some(&last) if x - last < EPS_MERGE => {}
            _ => coords.push(x),
        }
    }

    // Attribute support types to merged coordinates
    let mut kinds: Vec<Support> = vec![Support::Free; coords.len()];
    for support in supports {
        let idx = coords
            .iter()
            .position(|&x| (x - support.x).abs() < EPS_MERGE)
            .ok_or(BeamError::ConflictingSupports(support.x))?;

        if kinds[idx] != Support::Free {
            return Err(BeamError::ConflictingSupports(support.x));
        }
        kinds[idx] = support.kind;
    }

    let nodes: Vec<Node> = coords
        .iter()
        .zip(kinds)
        .enumerate()
        .map(|(idx, (&x, kind))| Node::new(format!("N{idx}"), x, kind))
        .collect();

    let mut elements = Vec::with_capacity(nodes.len().saturating_sub(1));
    for idx in 0..nodes.len().saturating_sub(1) {
        let (start, end) = (&nodes[idx], &nodes[idx + 1]);
        // Degenerate spans cannot survive the merge above; skip them anyway
        if end.x - start.x <= EPS_GEOM {
            continue;
        }
        elements.push(Element::new(
            format!("E{idx}"),
            idx,
            idx + 1,
            start.x,
            end.x,
            e,
            i,
        )?);
    }

    Ok(Mesh { nodes, elements })
}
