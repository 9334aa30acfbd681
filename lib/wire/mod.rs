//! Hamiltonian builders for finite 1D wires.
//!
//! Two routes are available for the Kitaev wire: the many-body Hamiltonian on
//! the Fock space of its sites ([`fock`]), and the single-particle
//! Bogoliubov-de Gennes Hamiltonian ([`bdg`]), which is a special case of the
//! generic tight-binding wire.

use num_complex::Complex64 as C64;
use crate::error::FockResult;

pub mod fock;
pub use fock::{ kitaev_wire_fock_ham, HBuilderKitaevFock };

pub mod bdg;
pub use bdg::{
    finite_wire_ham,
    finite_wire_ham_sparse,
    kitaev_wire_bdg_ham,
    HBuilderFiniteWire,
    HBuilderKitaevBdg,
};

/// Basic requirements for any Hamiltonian builder.
pub trait HBuild: Sized {
    /// Initialization data type.
    type Params;

    /// Type of the built Hamiltonian.
    type Output;

    /// Initialize `self`.
    fn new_builder(params: Self::Params) -> FockResult<Self>;

    /// Build the Hamiltonian matrix.
    fn build(&self) -> FockResult<Self::Output>;

    /// Return the dimension of the Hamiltonian matrix.
    fn dim(&self) -> usize;
}

/// Parameters of a finite Kitaev wire.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KitaevParams {
    /// Number of sites.
    pub length: usize,
    /// Nearest-neighbor hopping strength.
    pub t: C64,
    /// Superconducting pair potential.
    pub delta: C64,
    /// Chemical potential.
    pub mu: f64,
}

impl KitaevParams {
    /// Create a new set of parameters with real hopping and pairing.
    pub fn new(length: usize, t: f64, delta: f64, mu: f64) -> Self {
        Self { length, t: t.into(), delta: delta.into(), mu }
    }
}
