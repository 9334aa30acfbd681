//! A minimal dictionary-of-keys sparse matrix over [`Complex64`][C64].
//!
//! Only the handful of operations needed to assemble Fock-space operators and
//! tight-binding Hamiltonians are provided: offset-diagonal construction,
//! sums, scaling, products, Kronecker products, the Hermitian conjugate, and
//! conversion to and from dense arrays. Exact zeros are never stored.

use std::collections::hash_map::Entry;
use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::{ One, Zero };
use rustc_hash::FxHashMap as HashMap;
use crate::error::{ FockError, FockResult };

/// A sparse `(rows, cols)` complex matrix keyed by `(row, col)` index pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct SpMatrix {
    shape: (usize, usize),
    data: HashMap<(usize, usize), C64>,
}

impl SpMatrix {
    /// Create a new all-zero matrix.
    pub fn zeros(shape: (usize, usize)) -> Self {
        Self { shape, data: HashMap::default() }
    }

    /// Create an `n × n` identity matrix.
    pub fn eye(n: usize) -> Self {
        Self::from_offset_diag(n, 0, (0..n).map(|_| C64::one()))
    }

    /// Create an `n × n` matrix with entries on a single diagonal.
    ///
    /// `offset` selects the diagonal (`0` the main one, positive values above
    /// it, negative below). The `j`-th item of `values` is placed in column
    /// `j`, i.e. at `[j - offset, j]`; items that would fall outside the matrix
    /// are discarded.
    pub fn from_offset_diag<I>(n: usize, offset: isize, values: I) -> Self
    where I: IntoIterator<Item = C64>
    {
        let mut M = Self::zeros((n, n));
        values.into_iter()
            .take(n)
            .enumerate()
            .filter_map(|(j, v)| {
                let i = j as isize - offset;
                (0..n as isize).contains(&i).then_some((i as usize, j, v))
            })
            .for_each(|(i, j, v)| { M.accumulate(i, j, v); });
        M
    }

    /// Collect the non-zero elements of a dense array.
    pub fn from_dense<S>(A: &nd::ArrayBase<S, nd::Ix2>) -> Self
    where S: nd::Data<Elem = C64>
    {
        let mut M = Self::zeros(A.dim());
        A.indexed_iter()
            .filter(|(_, a)| !a.is_zero())
            .for_each(|((i, j), a)| { M.data.insert((i, j), *a); });
        M
    }

    /// Return the `(rows, cols)` shape.
    pub fn shape(&self) -> (usize, usize) { self.shape }

    /// Return the number of stored (non-zero) elements.
    pub fn nnz(&self) -> usize { self.data.len() }

    /// Return the element at `[i, j]`, zero if not stored.
    pub fn get(&self, i: usize, j: usize) -> C64 {
        self.data.get(&(i, j)).copied().unwrap_or_else(C64::zero)
    }

    /// Iterate over stored elements in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), C64)> + '_ {
        self.data.iter().map(|(ij, a)| (*ij, *a))
    }

    /// Add `a` to the element at `[i, j]`.
    pub fn add_at(&mut self, i: usize, j: usize, a: C64) -> FockResult<()> {
        if i >= self.shape.0 || j >= self.shape.1 {
            return Err(FockError::IndexOutOfBounds {
                index: (i, j),
                shape: self.shape,
            });
        }
        self.accumulate(i, j, a);
        Ok(())
    }

    // caller guarantees `[i, j]` is in bounds
    fn accumulate(&mut self, i: usize, j: usize, a: C64) {
        if a.is_zero() { return; }
        match self.data.entry((i, j)) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += a;
                if entry.get().is_zero() { entry.remove(); }
            },
            Entry::Vacant(entry) => { entry.insert(a); },
        }
    }

    /// Return the conjugate transpose.
    pub fn adjoint(&self) -> Self {
        let data: HashMap<(usize, usize), C64>
            = self.data.iter()
            .map(|((i, j), a)| ((*j, *i), a.conj()))
            .collect();
        Self { shape: (self.shape.1, self.shape.0), data }
    }

    /// Return `a * self`.
    pub fn scale<A>(&self, a: A) -> Self
    where A: Into<C64>
    {
        let a: C64 = a.into();
        if a.is_zero() { return Self::zeros(self.shape); }
        let data: HashMap<(usize, usize), C64>
            = self.data.iter()
            .map(|(ij, x)| (*ij, a * x))
            .collect();
        Self { shape: self.shape, data }
    }

    /// Return `self + rhs`.
    pub fn add(&self, rhs: &Self) -> FockResult<Self> {
        if self.shape != rhs.shape {
            return Err(FockError::ShapeMismatch {
                op: "sum",
                lhs: self.shape,
                rhs: rhs.shape,
            });
        }
        let mut S = self.clone();
        rhs.iter().for_each(|((i, j), b)| { S.accumulate(i, j, b); });
        Ok(S)
    }

    /// Return `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> FockResult<Self> {
        self.add(&rhs.scale(-1.0))
    }

    /// Return the matrix product `self · rhs`.
    pub fn dot(&self, rhs: &Self) -> FockResult<Self> {
        if self.shape.1 != rhs.shape.0 {
            return Err(FockError::ShapeMismatch {
                op: "product",
                lhs: self.shape,
                rhs: rhs.shape,
            });
        }
        let mut rhs_rows: HashMap<usize, Vec<(usize, C64)>>
            = HashMap::default();
        for ((k, j), b) in rhs.iter() {
            rhs_rows.entry(k).or_default().push((j, b));
        }
        let mut P = Self::zeros((self.shape.0, rhs.shape.1));
        for ((i, k), a) in self.iter() {
            let Some(row) = rhs_rows.get(&k) else { continue; };
            for (j, b) in row.iter() {
                P.accumulate(i, *j, a * b);
            }
        }
        Ok(P)
    }

    /// Return the Kronecker product `self ⊗ rhs`.
    pub fn kron(&self, rhs: &Self) -> Self {
        let (m, n) = rhs.shape;
        let mut K = Self::zeros((self.shape.0 * m, self.shape.1 * n));
        let rhs_elems: Vec<((usize, usize), C64)> = rhs.iter().collect();
        self.iter().cartesian_product(rhs_elems.iter())
            .for_each(|(((i1, j1), a), &((i2, j2), b))| {
                K.accumulate(i1 * m + i2, j1 * n + j2, a * b);
            });
        K
    }

    /// Materialize `self` as a dense array.
    pub fn to_dense(&self) -> nd::Array2<C64> {
        let mut A: nd::Array2<C64> = nd::Array2::zeros(self.shape);
        self.iter().for_each(|(ij, a)| { A[ij] = a; });
        A
    }

    /// Return `true` if `self` and `other` have the same shape and all
    /// elements agree to within `tol` in absolute value.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.shape == other.shape
            && self.data.keys().chain(other.data.keys())
            .all(|(i, j)| (self.get(*i, *j) - other.get(*i, *j)).norm() <= tol)
    }

    /// Return `true` if `self` equals its conjugate transpose to within `tol`.
    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.approx_eq(&self.adjoint(), tol)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn c(re: f64, im: f64) -> C64 { C64::new(re, im) }

    #[test]
    fn offset_diag_placement() {
        let up = SpMatrix::from_offset_diag(
            3, 1, [c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        // first value has no row to land in
        assert_eq!(up.nnz(), 2);
        assert_eq!(up.get(0, 1), c(2.0, 0.0));
        assert_eq!(up.get(1, 2), c(3.0, 0.0));

        let dn = SpMatrix::from_offset_diag(
            3, -1, [c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        assert_eq!(dn.nnz(), 2);
        assert_eq!(dn.get(1, 0), c(1.0, 0.0));
        assert_eq!(dn.get(2, 1), c(2.0, 0.0));
    }

    #[test]
    fn product_matches_dense() {
        let A = nd::array![
            [c(1.0, 0.0), c(0.0, 2.0), c(0.0, 0.0)],
            [c(0.0, 0.0), c(3.0, 0.0), c(1.0, -1.0)],
        ];
        let B = nd::array![
            [c(0.0, 1.0), c(0.0, 0.0)],
            [c(2.0, 0.0), c(1.0, 0.0)],
            [c(0.0, 0.0), c(4.0, 0.0)],
        ];
        let P = SpMatrix::from_dense(&A).dot(&SpMatrix::from_dense(&B)).unwrap();
        assert_eq!(P.to_dense(), A.dot(&B));
        assert!(SpMatrix::from_dense(&B).dot(&SpMatrix::from_dense(&B)).is_err());
    }

    #[test]
    fn kron_matches_dense() {
        let A = nd::array![[c(1.0, 0.0), c(2.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]];
        let B = nd::array![[c(0.0, 0.0), c(1.0, 0.0)], [c(-1.0, 0.0), c(0.0, 0.0)]];
        let K = SpMatrix::from_dense(&A).kron(&SpMatrix::from_dense(&B));
        assert_eq!(K.to_dense(), nd::linalg::kron(&A, &B));
        assert_eq!(SpMatrix::eye(2).kron(&SpMatrix::eye(3)), SpMatrix::eye(6));
    }

    #[test]
    fn cancellation_drops_entries() {
        let A = SpMatrix::eye(4);
        let Z = A.sub(&A).unwrap();
        assert_eq!(Z.nnz(), 0);
        assert_eq!(Z, SpMatrix::zeros((4, 4)));
    }

    #[test]
    fn adjoint_conjugates() {
        let mut A = SpMatrix::zeros((2, 3));
        A.add_at(0, 2, c(1.0, 2.0)).unwrap();
        let Ah = A.adjoint();
        assert_eq!(Ah.shape(), (3, 2));
        assert_eq!(Ah.get(2, 0), c(1.0, -2.0));
        assert!(!A.add(&A).unwrap().is_hermitian(1e-12));
        let H = A.dot(&Ah).unwrap();
        assert!(H.is_hermitian(1e-12));
    }

    #[test]
    fn add_at_bounds() {
        let mut A = SpMatrix::zeros((2, 3));
        A.add_at(1, 2, c(1.0, 0.0)).unwrap();
        A.add_at(1, 2, c(-1.0, 0.0)).unwrap();
        assert_eq!(A.nnz(), 0);
        assert!(matches!(
            A.add_at(2, 0, c(1.0, 0.0)),
            Err(FockError::IndexOutOfBounds { index: (2, 0), shape: (2, 3) }),
        ));
        assert!(matches!(
            A.add_at(0, 3, c(0.0, 0.0)),
            Err(FockError::IndexOutOfBounds { .. }),
        ));
        assert_eq!(A, SpMatrix::zeros((2, 3)));
    }
}
