//! Fermionic operators on the Fock space of a fixed number of modes.
//!
//! The basis of the Fock space of `N` modes is labeled by the integers
//! `0..2^N`, where bit `p` of a basis index (least significant bit = bit 0) is
//! the occupation of mode `p`. Written out as binary strings with the most
//! significant digit first, the basis for `N = 3` is
//! ```text
//! 000, 001, 010, 011, 100, 101, 110, 111
//! ```
//! so that e.g. `011` is the state with modes 0 and 1 occupied.
//!
//! Annihilation operators carry a Jordan-Wigner sign: `c_p` acting on a basis
//! state picks up a factor `-1` for every occupied mode `q > p`. Creation
//! operators are the [adjoints][Operator::adjoint] of the annihilation
//! operators and are not constructed separately.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ FockError, FockResult },
    operator::{ Operator, Repr },
    sparse::SpMatrix,
};

/// The Fock space of a fixed number of fermionic modes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FockSpace {
    modes: usize,
}

impl FockSpace {
    /// Create a new `FockSpace` for `modes` fermionic modes.
    ///
    /// Fails if `modes` is zero or if `2^modes` does not fit in a `usize`.
    pub fn new(modes: usize) -> FockResult<Self> {
        if modes == 0 { return Err(FockError::NoModes); }
        if modes >= usize::BITS as usize {
            return Err(FockError::TooManyModes(modes));
        }
        Ok(Self { modes })
    }

    /// Return the number of modes.
    pub fn modes(&self) -> usize { self.modes }

    /// Return the dimension of the space, `2^modes`.
    pub fn dim(&self) -> usize { 1 << self.modes }

    /// Return an iterator over all basis indices.
    pub fn indices(&self) -> std::ops::Range<usize> { 0..self.dim() }

    /// Return `true` if mode `p` is occupied in basis state `x`.
    ///
    /// Modes beyond the width of `usize` are never occupied.
    pub fn occupied(&self, x: usize, p: usize) -> bool {
        u32::try_from(p).ok()
            .and_then(|p| x.checked_shr(p))
            .is_some_and(|y| y & 1 == 1)
    }

    /// Return the occupation of every mode in basis state `x`, indexed by mode.
    pub fn occupations(&self, x: usize) -> Vec<bool> {
        (0..self.modes).map(|p| self.occupied(x, p)).collect()
    }

    /// Return the total particle number of basis state `x`.
    pub fn particle_number(&self, x: usize) -> u32 { x.count_ones() }

    /// Return the binary-string label of basis state `x`, highest mode first.
    pub fn label(&self, x: usize) -> String {
        format!("{:0width$b}", x, width = self.modes)
    }

    /// Compute the signed occupation table of the space.
    ///
    /// Element `[x, p]` is `0` if mode `p` is empty in basis state `x`, and
    /// otherwise the Jordan-Wigner sign `±1` accumulated over the occupied
    /// modes above `p`.
    pub fn signed_occupations(&self) -> nd::Array2<f64> {
        let mut AA: nd::Array2<f64> = nd::Array2::zeros((self.dim(), self.modes));
        for (x, mut row) in AA.axis_iter_mut(nd::Axis(0)).enumerate() {
            let mut sign: f64 = 1.0;
            for p in (0..self.modes).rev() {
                if self.occupied(x, p) {
                    row[p] = sign;
                    sign = -sign;
                }
            }
        }
        AA
    }

    /// Build the annihilation operators `c_0, ..., c_{N-1}`.
    ///
    /// `c_p` is non-zero only on the diagonal `2^p` places above the main one:
    /// it maps a state with mode `p` occupied to the same state with mode `p`
    /// emptied, and states with mode `p` empty to zero.
    pub fn annihilators(&self, repr: Repr) -> Vec<Operator> {
        let n = self.dim();
        let AA = self.signed_occupations();
        let cc: Vec<Operator>
            = (0..self.modes)
            .map(|p| {
                let col = AA.column(p);
                let values = col.iter().map(|a| C64::from(*a));
                let c = SpMatrix::from_offset_diag(n, 1 << p, values);
                Operator::from_sparse(c, repr)
            })
            .collect();
        tracing::debug!(
            modes = self.modes,
            dim = n,
            ?repr,
            "built fermionic annihilation operators"
        );
        cc
    }

    fn diagonal<F>(&self, repr: Repr, elem: F) -> Operator
    where F: Fn(u32) -> f64
    {
        let diag = self.indices().map(|x| C64::from(elem(x.count_ones())));
        Operator::from_sparse(SpMatrix::from_offset_diag(self.dim(), 0, diag), repr)
    }

    /// Build the particle number parity operator, `(-1)^N`.
    pub fn parity(&self, repr: Repr) -> Operator {
        self.diagonal(repr, |k| if k % 2 == 0 { 1.0 } else { -1.0 })
    }

    /// Build the projectors onto the even and odd particle number sectors.
    pub fn even_odd(&self, repr: Repr) -> (Operator, Operator) {
        let even = self.diagonal(repr, |k| ((k + 1) % 2) as f64);
        let odd = self.diagonal(repr, |k| (k % 2) as f64);
        (even, odd)
    }

    /// Build the total particle number operator.
    pub fn number(&self, repr: Repr) -> Operator {
        self.diagonal(repr, |k| k as f64)
    }
}

/// Return the annihilation operators of `modes` fermionic modes, indexed by
/// mode.
///
/// See [`FockSpace::annihilators`].
pub fn fermion_fock_matrices(modes: usize, repr: Repr)
    -> FockResult<Vec<Operator>>
{
    Ok(FockSpace::new(modes)?.annihilators(repr))
}

/// Return the particle number parity operator on the Fock space of `modes`
/// fermionic modes.
pub fn parity_fock_operator(modes: usize, repr: Repr) -> FockResult<Operator> {
    Ok(FockSpace::new(modes)?.parity(repr))
}

/// Return the even and odd particle number projectors, in that order, on the
/// Fock space of `modes` fermionic modes.
pub fn even_odd_fock_operators(modes: usize, repr: Repr)
    -> FockResult<(Operator, Operator)>
{
    Ok(FockSpace::new(modes)?.even_odd(repr))
}

/// Return the total particle number operator on the Fock space of `modes`
/// fermionic modes.
pub fn number_fock_operator(modes: usize, repr: Repr) -> FockResult<Operator> {
    Ok(FockSpace::new(modes)?.number(repr))
}
