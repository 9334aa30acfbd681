//! The Kitaev wire as a many-body Hamiltonian on the Fock space of its sites.

use num_complex::Complex64 as C64;
use crate::{
    error::{ FockError, FockResult },
    fock::FockSpace,
    operator::{ Operator, Repr },
    wire::{ HBuild, KitaevParams },
};

/// Assemble the Kitaev wire Hamiltonian
/// ```text
/// H = t Σ_p (c†_{p+1} c_p + h.c.) + Δ Σ_p (c_{p+1} c_p + h.c.) + μ Σ_p c†_p c_p
/// ```
/// from the annihilation operators `cc` of its sites. The length of the wire
/// is `cc.len()`; a single site contributes only the chemical potential.
///
/// Each hopping and pairing term is added together with its Hermitian
/// conjugate, so the result is Hermitian for complex `t` and `delta` as well.
/// The result is sparse if every element of `cc` is sparse and dense
/// otherwise.
pub fn kitaev_wire_fock_ham<A, B>(cc: &[Operator], t: A, delta: B, mu: f64)
    -> FockResult<Operator>
where
    A: Into<C64>,
    B: Into<C64>,
{
    let Some(c0) = cc.first() else { return Err(FockError::EmptyWire); };
    let shape = c0.shape();
    if shape.0 != shape.1 {
        return Err(FockError::NotSquare { what: "annihilation operator", shape });
    }
    if let Some(c) = cc.iter().find(|c| c.shape() != shape) {
        return Err(FockError::ShapeMismatch {
            op: "Kitaev wire",
            lhs: shape,
            rhs: c.shape(),
        });
    }
    let repr
        = if cc.iter().all(|c| c.repr() == Repr::Sparse) {
            Repr::Sparse
        } else {
            Repr::Dense
        };
    let t: C64 = t.into();
    let delta: C64 = delta.into();
    let cd: Vec<Operator> = cc.iter().map(Operator::adjoint).collect();

    let mut H = Operator::zeros(shape, repr);
    for p in 0..cc.len() - 1 {
        let hop = cd[p + 1].dot(&cc[p])?.scale(t);
        H = H.add(&hop)?.add(&hop.adjoint())?;
        let pair = cc[p + 1].dot(&cc[p])?.scale(delta);
        H = H.add(&pair)?.add(&pair.adjoint())?;
    }
    for (cp, cdp) in cc.iter().zip(&cd) {
        H = H.add(&cdp.dot(cp)?.scale(mu))?;
    }
    tracing::debug!(
        length = cc.len(),
        dim = shape.0,
        ?repr,
        "built Kitaev wire Fock Hamiltonian"
    );
    Ok(H)
}

/// Hamiltonian builder for the Kitaev wire in the Fock representation.
///
/// Owns the annihilation operators of the wire's Fock space, so repeated
/// builds with different parameters reuse them.
#[derive(Clone, Debug)]
pub struct HBuilderKitaevFock {
    pub(crate) space: FockSpace,
    pub(crate) cc: Vec<Operator>,
    pub params: KitaevParams,
}

impl HBuilderKitaevFock {
    /// Create a new `HBuilderKitaevFock`.
    pub fn new(params: KitaevParams, repr: Repr) -> FockResult<Self> {
        let space = FockSpace::new(params.length)?;
        let cc = space.annihilators(repr);
        Ok(Self { space, cc, params })
    }

    /// Return a reference to the Fock space of the wire.
    pub fn space(&self) -> &FockSpace { &self.space }

    /// Return the annihilation operators of the wire's sites.
    pub fn annihilators(&self) -> &[Operator] { &self.cc }

    /// Compute the Hamiltonian.
    pub fn gen(&self) -> FockResult<Operator> {
        let KitaevParams { t, delta, mu, .. } = self.params;
        kitaev_wire_fock_ham(&self.cc, t, delta, mu)
    }
}

impl HBuild for HBuilderKitaevFock {
    type Params = (KitaevParams, Repr);
    type Output = Operator;

    fn new_builder(params: Self::Params) -> FockResult<Self> {
        let (params, repr) = params;
        Self::new(params, repr)
    }

    fn build(&self) -> FockResult<Self::Output> { self.gen() }

    fn dim(&self) -> usize { self.space.dim() }
}
