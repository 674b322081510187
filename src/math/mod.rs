//! Mathematical kernels for beam analysis

mod sparse;

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

use crate::error::{BeamError, BeamResult};

pub use sparse::StiffnessBuilder;

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 4x4 matrix for element bending stiffness
pub type Mat4 = SMatrix<f64, 4, 4>;
/// 4-element vector for element end actions
pub type Vec4 = SVector<f64, 4>;

/// Relative pivot threshold below which the reduced stiffness matrix is
/// treated as singular
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Compute the local stiffness matrix for an Euler-Bernoulli beam element
///
/// DOF ordering is `[v1, theta1, v2, theta2]` where `v` is transverse
/// translation and `theta` rotation about the out-of-plane axis.
///
/// # Arguments
/// * `e` - Young's modulus in Pa
/// * `i` - Second moment of area in m^4
/// * `length` - Element length in m
pub fn beam_local_stiffness(e: f64, i: f64, length: f64) -> BeamResult<Mat4> {
    if length <= 0.0 {
        return Err(BeamError::InvalidGeometry(format!(
            "stiffness requested for non-positive length L = {length}"
        )));
    }
    if e <= 0.0 {
        return Err(BeamError::InvalidMaterial(format!(
            "stiffness requested for non-positive Young's modulus E = {e}"
        )));
    }
    if i <= 0.0 {
        return Err(BeamError::InvalidMaterial(format!(
            "stiffness requested for non-positive second moment of area I = {i}"
        )));
    }

    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ei_l3 = e * i / l3;
    let ei_l2 = e * i / l2;
    let ei_l = e * i / l;

    #[rustfmt::skip]
    let data = [
        // Row 0: shear at start
        12.0 * ei_l3,   6.0 * ei_l2,  -12.0 * ei_l3,   6.0 * ei_l2,
        // Row 1: moment at start
        6.0 * ei_l2,    4.0 * ei_l,   -6.0 * ei_l2,    2.0 * ei_l,
        // Row 2: shear at end
        -12.0 * ei_l3, -6.0 * ei_l2,   12.0 * ei_l3,  -6.0 * ei_l2,
        // Row 3: moment at end
        6.0 * ei_l2,    2.0 * ei_l,   -6.0 * ei_l2,    4.0 * ei_l,
    ];

    Ok(Mat4::from_row_slice(&data))
}

/// Consistent nodal actions for a uniform line load on one element
///
/// Returns `[w*L/2, w*L^2/12, w*L/2, -w*L^2/12]` in the element DOF
/// ordering, the nodal forcing that reproduces the span-wise load.
pub fn equivalent_nodal_load_uniform(w: f64, length: f64) -> Vec4 {
    let l = length;
    let l2 = l * l;

    Vec4::new(w * l / 2.0, w * l2 / 12.0, w * l / 2.0, -w * l2 / 12.0)
}

/// Cubic Hermite shape functions for an interval of length `l`
///
/// `xi` is the normalized position in `[0, 1]`. The four functions
/// interpolate translation and rotation at both interval endpoints.
pub fn hermite_shape(xi: f64, l: f64) -> [f64; 4] {
    let xi2 = xi * xi;
    let xi3 = xi2 * xi;

    [
        1.0 - 3.0 * xi2 + 2.0 * xi3,
        l * (xi - 2.0 * xi2 + xi3),
        3.0 * xi2 - 2.0 * xi3,
        l * (xi3 - xi2),
    ]
}

/// Solve `K x = b` by LU decomposition, rejecting singular systems
///
/// Returns `None` when a pivot vanishes relative to the largest pivot or the
/// solution contains a non-finite entry, the numerical signature of a
/// mechanism.
pub fn solve_checked(k: &Mat, b: &Vec) -> Option<Vec> {
    let lu = k.clone().lu();

    let diag = lu.u().diagonal();
    let max_pivot = diag.iter().fold(0.0_f64, |acc, p| acc.max(p.abs()));
    if max_pivot == 0.0 {
        return None;
    }
    if diag.iter().any(|p| p.abs() < PIVOT_TOLERANCE * max_pivot) {
        return None;
    }

    let x = lu.solve(b)?;
    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}
