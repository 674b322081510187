//! Load equivalencing into the nodal force vector
//!
//! Point loads map directly onto the DOF of the node the mesh placed at
//! their position. Uniform distributed loads are converted per element into
//! consistent nodal actions, which is exact because the mesh builder puts
//! nodes at every distributed-load endpoint.

use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::math::{self, Vec as FeVec};
use crate::mesh::{Mesh, EPS_MERGE};

/// Assemble the global nodal force vector for the given loads
///
/// The vector has length `2N`; DOF `2i` is vertical at node `i`, DOF
/// `2i + 1` rotational. Fails with `LoadNotAligned` when a load position
/// has no mesh node, which indicates a meshing bug rather than bad input.
pub fn nodal_force_vector(mesh: &Mesh, loads: &[Load]) -> BeamResult<FeVec> {
    let mut f = FeVec::zeros(mesh.num_dofs());

    for load in loads {
        match load {
            Load::PointForce { id, x, magnitude, .. } => {
                let j = mesh
                    .node_at(*x)
                    .ok_or_else(|| BeamError::LoadNotAligned(id.clone()))?;
                f[2 * j] += magnitude;
            }
            Load::PointMoment { id, x, magnitude, .. } => {
                let j = mesh
                    .node_at(*x)
                    .ok_or_else(|| BeamError::LoadNotAligned(id.clone()))?;
                f[2 * j + 1] += magnitude;
            }
            Load::DistributedForce {
                id,
                start_x,
                end_x,
                w,
                ..
            } => {
                // The loaded span must begin and end on mesh nodes
                if mesh.node_at(*start_x).is_none() || mesh.node_at(*end_x).is_none() {
                    return Err(BeamError::LoadNotAligned(id.clone()));
                }

                for element in &mesh.elements {
                    let (sx, ex) = (mesh.nodes[element.start].x, mesh.nodes[element.end].x);
                    if sx < start_x - EPS_MERGE || ex > end_x + EPS_MERGE {
                        continue;
                    }

                    let eq = math::equivalent_nodal_load_uniform(*w, element.length());
                    let [v1, t1, v2, t2] = element.dof_indices();
                    f[v1] += eq[0];
                    f[t1] += eq[1];
                    f[v2] += eq[2];
                    f[t2] += eq[3];
                }
            }
        }
    }

    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Element, Node, Support, SupportLocation};
    use crate::loads::LoadCategory;
    use crate::mesh::build_mesh;
    use approx::assert_relative_eq;

    fn simple_mesh() -> Mesh {
        let supports = [
            SupportLocation::new(0.0, Support::Pin),
            SupportLocation::new(10.0, Support::Roller),
        ];
        let loads = [
            Load::point_force("P1", 5.0, -10_000.0, LoadCategory::Dead),
            Load::point_moment("M1", 5.0, 2500.0, LoadCategory::Dead),
        ];
        build_mesh(10.0, 200e9, 1e-4, &supports, &loads).unwrap()
    }

    #[test]
    fn test_point_load_placement() {
        let mesh = simple_mesh();
        let loads = [
            Load::point_force("P1", 5.0, -10_000.0, LoadCategory::Dead),
            Load::point_moment("M1", 5.0, 2500.0, LoadCategory::Dead),
        ];

        let f = nodal_force_vector(&mesh, &loads).unwrap();

        assert_relative_eq!(f[2], -10_000.0);
        assert_relative_eq!(f[3], 2500.0);
        assert_relative_eq!(f.iter().map(|v| v.abs()).sum::<f64>(), 12_500.0);
    }

    #[test]
    fn test_distributed_equivalencing() {
        // Mid support splits the span into two 3 m elements
        let supports = [
            SupportLocation::new(0.0, Support::Pin),
            SupportLocation::new(3.0, Support::Roller),
            SupportLocation::new(6.0, Support::Roller),
        ];
        let loads = [Load::distributed("W1", 0.0, 6.0, -1000.0, LoadCategory::Dead)];
        let mesh = build_mesh(6.0, 200e9, 1e-4, &supports, &loads).unwrap();

        let f = nodal_force_vector(&mesh, &loads).unwrap();

        // End nodes carry w*L/2 of one element, the middle node of two
        assert_relative_eq!(f[0], -1500.0);
        assert_relative_eq!(f[2], -3000.0);
        assert_relative_eq!(f[4], -1500.0);
        // End moments cancel at the interior node, survive at the ends
        assert_relative_eq!(f[1], -1000.0 * 9.0 / 12.0);
        assert_relative_eq!(f[3], 0.0);
        assert_relative_eq!(f[5], 1000.0 * 9.0 / 12.0);
    }

    #[test]
    fn test_partial_distributed_span() {
        let supports = [
            SupportLocation::new(0.0, Support::Pin),
            SupportLocation::new(10.0, Support::Roller),
        ];
        let loads = [Load::distributed("W1", 2.0, 6.0, -500.0, LoadCategory::Dead)];
        let mesh = build_mesh(10.0, 200e9, 1e-4, &supports, &loads).unwrap();

        let f = nodal_force_vector(&mesh, &loads).unwrap();

        // Only the element between x = 2 and x = 6 is loaded
        let total: f64 = (0..mesh.nodes.len()).map(|i| f[2 * i]).sum();
        assert_relative_eq!(total, -2000.0, epsilon = 1e-9);
        assert_relative_eq!(f[0], 0.0);
        assert_relative_eq!(f[2], -1000.0);
        assert_relative_eq!(f[4], -1000.0);
        assert_relative_eq!(f[6], 0.0);
    }

    #[test]
    fn test_misaligned_distributed_load() {
        // Hand-built mesh without a node at the load end
        let nodes = vec![
            Node::new("N0", 0.0, Support::Pin),
            Node::new("N1", 10.0, Support::Roller),
        ];
        let elements = vec![Element::new("E0", 0, 1, 0.0, 10.0, 200e9, 1e-4).unwrap()];
        let mesh = Mesh { nodes, elements };

        let loads = [Load::distributed("W1", 0.0, 4.0, -1.0, LoadCategory::Dead)];
        let err = nodal_force_vector(&mesh, &loads).unwrap_err();
        assert!(matches!(err, BeamError::LoadNotAligned(_)));
    }

    #[test]
    fn test_misaligned_point_load() {
        let nodes = vec![
            Node::new("N0", 0.0, Support::Pin),
            Node::new("N1", 10.0, Support::Roller),
        ];
        let elements = vec![Element::new("E0", 0, 1, 0.0, 10.0, 200e9, 1e-4).unwrap()];
        let mesh = Mesh { nodes, elements };

        let loads = [Load::point_force("P1", 4.0, -1.0, LoadCategory::Dead)];
        let err = nodal_force_vector(&mesh, &loads).unwrap_err();
        assert!(matches!(err, BeamError::LoadNotAligned(_)));
    }
}
