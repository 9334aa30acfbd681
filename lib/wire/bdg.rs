//! Single-particle Hamiltonians of finite tight-binding wires and the
//! Bogoliubov-de Gennes form of the Kitaev wire.
//!
//! A wire of `L` sites with `k` degrees of freedom per site is described by a
//! `k × k` on-site block `U` and a `k × k` hopping block `T`:
//! ```text
//!   +-+  T  +-+  T  +-+
//! --+U+-----+U+-----+U+--
//!   +-+     +-+     +-+
//!
//!     ⎛ U  T         ⎞
//!     ⎜ T† U  T      ⎟
//! H = ⎜    T† U  ..  ⎟
//!     ⎝       ..  .. ⎠
//! ```

use ndarray::{ self as nd, linalg::kron };
use num_complex::Complex64 as C64;
use num_traits::One;
use crate::{
    error::{ FockError, FockResult },
    pauli::Pauli,
    sparse::SpMatrix,
    wire::{ HBuild, KitaevParams },
};

/// Cast an on-site or hopping block to a complex array.
fn as_block<S, A>(X: &nd::ArrayBase<S, nd::Ix2>) -> nd::Array2<C64>
where
    S: nd::Data<Elem = A>,
    A: Clone + Into<C64>,
{
    X.mapv(Into::into)
}

fn check_blocks(L: usize, U: &nd::Array2<C64>, T: &nd::Array2<C64>)
    -> FockResult<()>
{
    if L == 0 { return Err(FockError::EmptyWire); }
    if U.nrows() != U.ncols() {
        return Err(FockError::NotSquare { what: "on-site block", shape: U.dim() });
    }
    if T.dim() != U.dim() {
        return Err(FockError::ShapeMismatch {
            op: "finite wire",
            lhs: U.dim(),
            rhs: T.dim(),
        });
    }
    Ok(())
}

/// `L × L` matrix with ones on the first super-diagonal.
fn shift_matrix(L: usize) -> nd::Array2<C64> {
    nd::Array2::from_shape_fn(
        (L, L), |(i, j)| if j == i + 1 { C64::one() } else { C64::from(0.0) })
}

/// Return the dense Hamiltonian of a finite 1D wire of length `L` with on-site
/// block `U` and hopping block `T`,
/// ```text
/// H = I_L ⊗ U + S_L ⊗ T + (S_L ⊗ T)†
/// ```
/// where `I_L` is the identity and `S_L` is the shift matrix with ones on its
/// first super-diagonal.
///
/// Blocks may have any element type convertible to [`Complex64`][C64].
pub fn finite_wire_ham<SU, ST, A, B>(
    L: usize,
    U: &nd::ArrayBase<SU, nd::Ix2>,
    T: &nd::ArrayBase<ST, nd::Ix2>,
) -> FockResult<nd::Array2<C64>>
where
    SU: nd::Data<Elem = A>,
    ST: nd::Data<Elem = B>,
    A: Clone + Into<C64>,
    B: Clone + Into<C64>,
{
    let U = as_block(U);
    let T = as_block(T);
    check_blocks(L, &U, &T)?;
    let idL: nd::Array2<C64> = nd::Array2::eye(L);
    let hop: nd::Array2<C64> = kron(&shift_matrix(L), &T);
    let H: nd::Array2<C64>
        = kron(&idL, &U) + &hop + &hop.t().mapv(|a| a.conj());
    tracing::debug!(length = L, block = U.nrows(), "built finite wire Hamiltonian");
    Ok(H)
}

/// Like [`finite_wire_ham`], but assembled and returned as a sparse matrix.
pub fn finite_wire_ham_sparse<SU, ST, A, B>(
    L: usize,
    U: &nd::ArrayBase<SU, nd::Ix2>,
    T: &nd::ArrayBase<ST, nd::Ix2>,
) -> FockResult<SpMatrix>
where
    SU: nd::Data<Elem = A>,
    ST: nd::Data<Elem = B>,
    A: Clone + Into<C64>,
    B: Clone + Into<C64>,
{
    let U = as_block(U);
    let T = as_block(T);
    check_blocks(L, &U, &T)?;
    let idL = SpMatrix::eye(L);
    let odL = SpMatrix::from_offset_diag(L, 1, (0..L).map(|_| C64::one()));
    let hop = odL.kron(&SpMatrix::from_dense(&T));
    let H = idL.kron(&SpMatrix::from_dense(&U))
        .add(&hop)?
        .add(&hop.adjoint())?;
    tracing::debug!(
        length = L,
        block = U.nrows(),
        nnz = H.nnz(),
        "built sparse finite wire Hamiltonian"
    );
    Ok(H)
}

/// Return the Bogoliubov-de Gennes Hamiltonian of a Kitaev wire of length
/// `L`, with on-site block `μ σz` and hopping block `-t σz + i Δ σy`.
///
/// The degrees of freedom are ordered as
/// `(c_1, c†_1, c_2, c†_2, ..., c_L, c†_L)`.
pub fn kitaev_wire_bdg_ham<A, B>(L: usize, mu: f64, t: A, delta: B)
    -> FockResult<nd::Array2<C64>>
where
    A: Into<C64>,
    B: Into<C64>,
{
    let t: C64 = t.into();
    let delta: C64 = delta.into();
    let U = Pauli::S3.scaled(mu);
    let T = Pauli::S3.scaled(-t) + Pauli::S2.scaled(C64::i() * delta);
    finite_wire_ham(L, &U, &T)
}

/// Hamiltonian builder for a generic finite wire.
#[derive(Clone, Debug)]
pub struct HBuilderFiniteWire {
    pub(crate) length: usize,
    pub(crate) onsite: nd::Array2<C64>,
    pub(crate) hopping: nd::Array2<C64>,
}

impl HBuilderFiniteWire {
    /// Create a new `HBuilderFiniteWire`, checking block shapes.
    pub fn new<SU, ST, A, B>(
        length: usize,
        onsite: &nd::ArrayBase<SU, nd::Ix2>,
        hopping: &nd::ArrayBase<ST, nd::Ix2>,
    ) -> FockResult<Self>
    where
        SU: nd::Data<Elem = A>,
        ST: nd::Data<Elem = B>,
        A: Clone + Into<C64>,
        B: Clone + Into<C64>,
    {
        let onsite = as_block(onsite);
        let hopping = as_block(hopping);
        check_blocks(length, &onsite, &hopping)?;
        Ok(Self { length, onsite, hopping })
    }

    /// Return the number of sites.
    pub fn length(&self) -> usize { self.length }

    /// Return the on-site block.
    pub fn onsite(&self) -> &nd::Array2<C64> { &self.onsite }

    /// Return the hopping block.
    pub fn hopping(&self) -> &nd::Array2<C64> { &self.hopping }

    /// Compute the dense Hamiltonian.
    pub fn gen(&self) -> FockResult<nd::Array2<C64>> {
        finite_wire_ham(self.length, &self.onsite, &self.hopping)
    }

    /// Compute the sparse Hamiltonian.
    pub fn gen_sparse(&self) -> FockResult<SpMatrix> {
        finite_wire_ham_sparse(self.length, &self.onsite, &self.hopping)
    }
}

impl HBuild for HBuilderFiniteWire {
    type Params = (usize, nd::Array2<C64>, nd::Array2<C64>);
    type Output = nd::Array2<C64>;

    fn new_builder(params: Self::Params) -> FockResult<Self> {
        let (length, onsite, hopping) = params;
        Self::new(length, &onsite, &hopping)
    }

    fn build(&self) -> FockResult<Self::Output> { self.gen() }

    fn dim(&self) -> usize { self.length * self.onsite.nrows() }
}

/// Hamiltonian builder for the Kitaev wire in the Bogoliubov-de Gennes
/// representation.
#[derive(Copy, Clone, Debug)]
pub struct HBuilderKitaevBdg {
    pub params: KitaevParams,
}

impl HBuilderKitaevBdg {
    /// Create a new `HBuilderKitaevBdg`.
    pub fn new(params: KitaevParams) -> Self { Self { params } }

    /// Compute the Hamiltonian.
    pub fn gen(&self) -> FockResult<nd::Array2<C64>> {
        let KitaevParams { length, t, delta, mu } = self.params;
        kitaev_wire_bdg_ham(length, mu, t, delta)
    }
}

impl HBuild for HBuilderKitaevBdg {
    type Params = KitaevParams;
    type Output = nd::Array2<C64>;

    fn new_builder(params: Self::Params) -> FockResult<Self> {
        Ok(Self::new(params))
    }

    fn build(&self) -> FockResult<Self::Output> { self.gen() }

    fn dim(&self) -> usize { 2 * self.params.length }
}
