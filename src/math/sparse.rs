//! Sparse assembly of the global stiffness matrix
//!
//! The 1D beam stiffness matrix is banded with bandwidth 3, so COO
//! accumulation followed by a CSR conversion keeps assembly simple while the
//! residual mat-vec for reaction recovery stays sparse.

use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};

use super::Mat4;

/// Incremental stiffness matrix builder using COO triplets
pub struct StiffnessBuilder {
    size: usize,
    entries: std::vec::Vec<(usize, usize, f64)>,
}

impl StiffnessBuilder {
    /// Create a builder for an `size x size` matrix
    pub fn new(size: usize) -> Self {
        // Each node couples to itself and its two neighbours: 4 entries per
        // element row pair is a safe pre-allocation
        let estimated_nnz = size * 8;
        Self {
            size,
            entries: std::vec::Vec::with_capacity(estimated_nnz),
        }
    }

    /// Add a value to the matrix (accumulates with existing entries)
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        if value != 0.0 {
            self.entries.push((row, col, value));
        }
    }

    /// Scatter a 4x4 element matrix into the global DOF positions
    pub fn add_element_matrix(&mut self, dofs: &[usize; 4], k_elem: &Mat4) {
        for (a, &da) in dofs.iter().enumerate() {
            for (b, &db) in dofs.iter().enumerate() {
                self.add(da, db, k_elem[(a, b)]);
            }
        }
    }

    /// Convert to CSR format, summing duplicate entries
    pub fn to_csr(&self) -> CsrMatrix<f64> {
        let mut coo = CooMatrix::new(self.size, self.size);
        for &(row, col, val) in &self.entries {
            coo.push(row, col, val);
        }
        CsrMatrix::from(&coo)
    }

    /// Convert to a dense matrix
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut mat = DMatrix::zeros(self.size, self.size);
        for &(row, col, val) in &self.entries {
            mat[(row, col)] += val;
        }
        mat
    }

    /// Number of accumulated triplets
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duplicate_accumulation() {
        let mut builder = StiffnessBuilder::new(3);
        builder.add(1, 1, 2.0);
        builder.add(1, 1, 3.0);
        builder.add(0, 2, -1.0);

        let dense = builder.to_dense();
        assert_relative_eq!(dense[(1, 1)], 5.0);
        assert_relative_eq!(dense[(0, 2)], -1.0);

        let csr = builder.to_csr();
        assert_relative_eq!(csr.get_entry(1, 1).unwrap().into_value(), 5.0);
    }

    #[test]
    fn test_element_scatter() {
        let k = Mat4::from_row_slice(&[
            1.0, 2.0, 3.0, 4.0, //
            2.0, 5.0, 6.0, 7.0, //
            3.0, 6.0, 8.0, 9.0, //
            4.0, 7.0, 9.0, 10.0,
        ]);
        let mut builder = StiffnessBuilder::new(6);
        builder.add_element_matrix(&[2, 3, 4, 5], &k);

        let dense = builder.to_dense();
        assert_relative_eq!(dense[(2, 2)], 1.0);
        assert_relative_eq!(dense[(5, 2)], 4.0);
        assert_relative_eq!(dense[(4, 5)], 9.0);
        assert_relative_eq!(dense[(0, 0)], 0.0);
    }

    #[test]
    fn test_csr_matches_dense() {
        let k = Mat4::from_row_slice(&[
            2.0, -1.0, 0.0, 0.5, //
            -1.0, 2.0, 0.5, 0.0, //
            0.0, 0.5, 2.0, -1.0, //
            0.5, 0.0, -1.0, 2.0,
        ]);
        let mut builder = StiffnessBuilder::new(4);
        builder.add_element_matrix(&[0, 1, 2, 3], &k);
        // Overlapping second scatter exercises duplicate summing
        builder.add_element_matrix(&[0, 1, 2, 3], &k);

        let dense = builder.to_dense();
        let csr = builder.to_csr();
        for (row, col, val) in csr.triplet_iter() {
            assert_relative_eq!(dense[(row, col)], *val, epsilon = 1e-12);
        }
    }
}
