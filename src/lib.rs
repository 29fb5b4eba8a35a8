//! # Fermidump: Second-Quantised Molecular Hamiltonians from DIRAC
//!
//! Fermidump is a program for turning the output of a relativistic
//! [DIRAC](http://diracprogram.org) calculation into the second-quantised molecular
//! Hamiltonian
//!
//! ```text
//! H = E_core + Σ_{pq} h[p,q] a†_p a_q + 1/2 Σ_{pqrs} h[p,q,r,s] a†_p a†_q a_r a_s
//! ```
//!
//! whose coefficient tensors can be fed unmodified into fermion-to-qubit mapping
//! frameworks. Two ingestion modes are supported:
//! - **relativistic**: the molecular-orbital integral dump enumerates every spinor
//!   integral explicitly and is re-indexed one-to-one into the physicist convention;
//! - **non-relativistic (restricted)**: the dump lists one representative per
//!   permutation-symmetry class of spin-up spatial-orbital integrals, and the full
//!   spin-orbital tensors are reconstructed by eightfold symmetry expansion and spin
//!   doubling.
//!
//! The ingested quantities (reference energy, orbital-energy spectrum, one- and
//! two-electron integrals, self-consistent-field, MP2, and CCSD total energies) are
//! gathered together with the molecule metadata into a single record that can be
//! persisted to and resumed from a binary file, so that a molecule needs to be run
//! through DIRAC only once.
//!
//! This documentation details the public API of the `fermidump` crate. For usage of
//! the compiled `fermidump` binary, please consult the `README.md` file.

pub mod auxiliary;
pub mod drivers;
pub mod hamiltonian;
pub mod interfaces;
pub mod io;
