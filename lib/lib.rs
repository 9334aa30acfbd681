#![allow(non_snake_case)]

//! Fermionic Fock-space operators and Hamiltonians of finite 1D wires.
//!
//! Many-body operators live on the `2^N`-dimensional Fock space of `N`
//! fermionic modes (see [`fock`] for the basis convention) and are returned as
//! [`Operator`]s in the [representation][Repr] requested by the caller.
//! Single-particle Hamiltonians of tight-binding wires are returned as dense
//! arrays, with sparse counterparts where useful.

pub mod error;
pub mod pauli;
pub mod sparse;
pub mod operator;
pub mod fock;
pub mod wire;
pub mod config;

pub use error::{ FockError, FockResult };
pub use operator::{ Operator, Repr };
pub use sparse::SpMatrix;
pub use fock::{
    FockSpace,
    fermion_fock_matrices,
    parity_fock_operator,
    even_odd_fock_operators,
    number_fock_operator,
};
pub use wire::{
    HBuild,
    KitaevParams,
    kitaev_wire_fock_ham,
    finite_wire_ham,
    finite_wire_ham_sparse,
    kitaev_wire_bdg_ham,
};
pub use config::{ BuildConfig, Config };
