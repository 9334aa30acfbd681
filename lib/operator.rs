//! Operators held in either a sparse or dense representation.
//!
//! Every builder in this crate takes a [`Repr`] selecting the representation
//! of its output; the two variants of [`Operator`] carry identical logical
//! content and can be mixed freely in arithmetic, where any dense operand
//! makes the result dense.

use std::borrow::Cow;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ FockError, FockResult },
    sparse::SpMatrix,
};

/// Selects the representation of a constructed operator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Repr {
    /// Store only non-zero elements.
    #[default]
    Sparse,
    /// Materialize every element in a 2D array.
    Dense,
}

impl Repr {
    /// Convert a `dense` flag into a representation.
    pub fn from_dense(dense: bool) -> Self {
        if dense { Self::Dense } else { Self::Sparse }
    }

    /// Return `true` for [`Self::Dense`].
    pub fn is_dense(self) -> bool { matches!(self, Self::Dense) }
}

/// A square or rectangular complex matrix in one of two representations.
#[derive(Clone, Debug, PartialEq)]
pub enum Operator {
    Sparse(SpMatrix),
    Dense(nd::Array2<C64>),
}

impl From<SpMatrix> for Operator {
    fn from(M: SpMatrix) -> Self { Self::Sparse(M) }
}

impl From<nd::Array2<C64>> for Operator {
    fn from(A: nd::Array2<C64>) -> Self { Self::Dense(A) }
}

impl Operator {
    /// Wrap a sparse matrix, densifying it if `repr` asks for it.
    pub fn from_sparse(M: SpMatrix, repr: Repr) -> Self {
        match repr {
            Repr::Sparse => Self::Sparse(M),
            Repr::Dense => Self::Dense(M.to_dense()),
        }
    }

    /// Create an all-zero operator.
    pub fn zeros(shape: (usize, usize), repr: Repr) -> Self {
        match repr {
            Repr::Sparse => Self::Sparse(SpMatrix::zeros(shape)),
            Repr::Dense => Self::Dense(nd::Array2::zeros(shape)),
        }
    }

    /// Create an `n × n` identity operator.
    pub fn eye(n: usize, repr: Repr) -> Self {
        match repr {
            Repr::Sparse => Self::Sparse(SpMatrix::eye(n)),
            Repr::Dense => Self::Dense(nd::Array2::eye(n)),
        }
    }

    /// Return the current representation.
    pub fn repr(&self) -> Repr {
        match self {
            Self::Sparse(_) => Repr::Sparse,
            Self::Dense(_) => Repr::Dense,
        }
    }

    /// Return the `(rows, cols)` shape.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Sparse(M) => M.shape(),
            Self::Dense(A) => A.dim(),
        }
    }

    /// Return a reference to the sparse matrix, if sparse.
    pub fn as_sparse(&self) -> Option<&SpMatrix> {
        match self {
            Self::Sparse(M) => Some(M),
            Self::Dense(_) => None,
        }
    }

    /// Return a reference to the dense array, if dense.
    pub fn as_dense(&self) -> Option<&nd::Array2<C64>> {
        match self {
            Self::Sparse(_) => None,
            Self::Dense(A) => Some(A),
        }
    }

    fn dense_view(&self) -> Cow<'_, nd::Array2<C64>> {
        match self {
            Self::Sparse(M) => Cow::Owned(M.to_dense()),
            Self::Dense(A) => Cow::Borrowed(A),
        }
    }

    /// Return a dense copy.
    pub fn to_dense(&self) -> nd::Array2<C64> { self.dense_view().into_owned() }

    /// Convert into a dense array.
    pub fn into_dense(self) -> nd::Array2<C64> {
        match self {
            Self::Sparse(M) => M.to_dense(),
            Self::Dense(A) => A,
        }
    }

    /// Convert into the requested representation.
    pub fn into_repr(self, repr: Repr) -> Self {
        match (self, repr) {
            (Self::Dense(A), Repr::Sparse) => Self::Sparse(SpMatrix::from_dense(&A)),
            (Self::Sparse(M), Repr::Dense) => Self::Dense(M.to_dense()),
            (op, _) => op,
        }
    }

    /// Return the conjugate transpose.
    pub fn adjoint(&self) -> Self {
        match self {
            Self::Sparse(M) => Self::Sparse(M.adjoint()),
            Self::Dense(A) => Self::Dense(A.t().mapv(|a| a.conj())),
        }
    }

    /// Return `a * self`.
    pub fn scale<T>(&self, a: T) -> Self
    where T: Into<C64>
    {
        let a: C64 = a.into();
        match self {
            Self::Sparse(M) => Self::Sparse(M.scale(a)),
            Self::Dense(A) => Self::Dense(A.mapv(|x| a * x)),
        }
    }

    /// Return `self + rhs`.
    pub fn add(&self, rhs: &Self) -> FockResult<Self> {
        if let (Self::Sparse(a), Self::Sparse(b)) = (self, rhs) {
            return a.add(b).map(Self::Sparse);
        }
        if self.shape() != rhs.shape() {
            return Err(FockError::ShapeMismatch {
                op: "sum",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let S: nd::Array2<C64> = &*self.dense_view() + &*rhs.dense_view();
        Ok(Self::Dense(S))
    }

    /// Return `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> FockResult<Self> {
        self.add(&rhs.scale(-1.0))
    }

    /// Return the matrix product `self · rhs`.
    pub fn dot(&self, rhs: &Self) -> FockResult<Self> {
        if let (Self::Sparse(a), Self::Sparse(b)) = (self, rhs) {
            return a.dot(b).map(Self::Sparse);
        }
        if self.shape().1 != rhs.shape().0 {
            return Err(FockError::ShapeMismatch {
                op: "product",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Self::Dense(self.dense_view().dot(&*rhs.dense_view())))
    }

    /// Return the commutator `[self, rhs]`.
    pub fn commutator(&self, rhs: &Self) -> FockResult<Self> {
        self.dot(rhs)?.sub(&rhs.dot(self)?)
    }

    /// Return the anticommutator `{self, rhs}`.
    pub fn anticommutator(&self, rhs: &Self) -> FockResult<Self> {
        self.dot(rhs)?.add(&rhs.dot(self)?)
    }

    /// Return `true` if `self` and `other` have the same shape and all
    /// elements agree to within `tol` in absolute value, regardless of
    /// representation.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        if let (Self::Sparse(a), Self::Sparse(b)) = (self, other) {
            return a.approx_eq(b, tol);
        }
        let a = self.dense_view();
        let b = other.dense_view();
        a.dim() == b.dim()
            && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= tol)
    }

    /// Return `true` if `self` equals its conjugate transpose to within `tol`.
    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.shape().0 == self.shape().1
            && self.approx_eq(&self.adjoint(), tol)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> nd::Array2<C64> {
        nd::array![
            [C64::new(0.0, 0.0), C64::new(1.0, 1.0)],
            [C64::new(2.0, 0.0), C64::new(0.0, 0.0)],
        ]
    }

    #[test]
    fn repr_round_trip() {
        let dense = Operator::from(sample());
        let sparse = dense.clone().into_repr(Repr::Sparse);
        assert_eq!(sparse.repr(), Repr::Sparse);
        assert_eq!(sparse.as_sparse().map(|M| M.nnz()), Some(2));
        assert!(sparse.approx_eq(&dense, 0.0));
        assert_eq!(sparse.into_dense(), sample());
        assert_eq!(Repr::from_dense(true), Repr::Dense);
        assert_eq!(Repr::default(), Repr::Sparse);
    }

    #[test]
    fn mixed_arithmetic_densifies() {
        let dense = Operator::from(sample());
        let sparse = dense.clone().into_repr(Repr::Sparse);
        let sum = sparse.add(&dense).unwrap();
        assert_eq!(sum.repr(), Repr::Dense);
        assert!(sum.approx_eq(&dense.scale(2.0), 1e-15));
        let prod = dense.dot(&sparse).unwrap();
        assert_eq!(prod.into_dense(), sample().dot(&sample()));
        let wrong = Operator::eye(3, Repr::Dense);
        assert!(matches!(
            dense.dot(&wrong),
            Err(FockError::ShapeMismatch { op: "product", .. }),
        ));
    }

    #[test]
    fn adjoint_and_hermiticity() {
        let A = Operator::from(sample());
        assert!(!A.is_hermitian(1e-12));
        let H = A.add(&A.adjoint()).unwrap();
        assert!(H.is_hermitian(1e-12));
        let Hs = H.clone().into_repr(Repr::Sparse);
        assert!(Hs.is_hermitian(1e-12));
        let Z = Operator::zeros((2, 2), Repr::Dense);
        assert!(A.commutator(&A).unwrap().approx_eq(&Z, 0.0));
    }
}
