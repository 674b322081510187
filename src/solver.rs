//! Linear static solve: assembly, partition, solve, reaction recovery

use std::collections::HashMap;

use nalgebra_sparse::CsrMatrix;

use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::math::{self, Mat, StiffnessBuilder, Vec as FeVec};
use crate::mesh::Mesh;
use crate::resolver;
use crate::results::{AnalysisResult, NodeDisplacement, Reaction};

/// Run the linear static analysis for a meshed beam under the given loads
///
/// Fixed DOFs are held at zero; there are no prescribed nonzero
/// displacements. Fails with `UnstableStructure` when the free-free
/// stiffness block is singular or the solution is non-finite.
pub fn solve(mesh: &Mesh, loads: &[Load]) -> BeamResult<AnalysisResult> {
    let n_dofs = mesh.num_dofs();

    let k_global = assemble_stiffness(mesh)?;
    let f = resolver::nodal_force_vector(mesh, loads)?;

    // Partition DOFs by the support predicates; DOF order follows node order
    let mut free_dofs: Vec<usize> = Vec::with_capacity(n_dofs);
    for (idx, node) in mesh.nodes.iter().enumerate() {
        if !node.restrained_y() {
            free_dofs.push(2 * idx);
        }
        if !node.restrained_rotation() {
            free_dofs.push(2 * idx + 1);
        }
    }

    let mut u = FeVec::zeros(n_dofs);

    if !free_dofs.is_empty() {
        let (k_ff, f_f) = extract_free_partition(&k_global, &f, &free_dofs);

        let u_f = math::solve_checked(&k_ff, &f_f).ok_or(BeamError::UnstableStructure)?;

        for (i, &dof) in free_dofs.iter().enumerate() {
            u[dof] = u_f[i];
        }
    }

    // Reactions come out of the equilibrium residual R = K*u - F
    let mut residual = -f.clone();
    for (row, col, &val) in k_global.triplet_iter() {
        residual[row] += val * u[col];
    }

    let mut displacements = HashMap::with_capacity(mesh.nodes.len());
    let mut reactions = HashMap::new();

    for (idx, node) in mesh.nodes.iter().enumerate() {
        displacements.insert(
            node.id.clone(),
            NodeDisplacement {
                y: u[2 * idx],
                rotation: u[2 * idx + 1],
            },
        );

        if node.is_supported() {
            let fy = if node.restrained_y() {
                residual[2 * idx]
            } else {
                0.0
            };
            let m = if node.restrained_rotation() {
                residual[2 * idx + 1]
            } else {
                0.0
            };
            reactions.insert(node.id.clone(), Reaction { fy, m });
        }
    }

    Ok(AnalysisResult {
        nodes: mesh.nodes.clone(),
        displacements,
        reactions,
    })
}

/// Assemble the global stiffness matrix in CSR form
pub(crate) fn assemble_stiffness(mesh: &Mesh) -> BeamResult<CsrMatrix<f64>> {
    let mut builder = StiffnessBuilder::new(mesh.num_dofs());

    for element in &mesh.elements {
        let k_local = math::beam_local_stiffness(element.e, element.i, element.length())?;
        builder.add_element_matrix(&element.dof_indices(), &k_local);
    }

    Ok(builder.to_csr())
}

/// Extract the free-free stiffness block and free load entries
fn extract_free_partition(
    k_global: &CsrMatrix<f64>,
    f: &FeVec,
    free_dofs: &[usize],
) -> (Mat, FeVec) {
    let n_free = free_dofs.len();
    let n_dofs = k_global.nrows();

    let mut free_index = vec![usize::MAX; n_dofs];
    for (i, &dof) in free_dofs.iter().enumerate() {
        free_index[dof] = i;
    }

    let mut k_ff = Mat::zeros(n_free, n_free);
    for (row, col, &val) in k_global.triplet_iter() {
        let (fr, fc) = (free_index[row], free_index[col]);
        if fr != usize::MAX && fc != usize::MAX {
            k_ff[(fr, fc)] = val;
        }
    }

    let mut f_f = FeVec::zeros(n_free);
    for (i, &dof) in free_dofs.iter().enumerate() {
        f_f[i] = f[dof];
    }

    (k_ff, f_f)
}
