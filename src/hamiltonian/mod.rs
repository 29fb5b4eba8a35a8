//! Second-quantised molecular Hamiltonian tensors.
//!
//! The structures in this module hold the coefficients of the second-quantised
//! molecular Hamiltonian
//!
//! ```text
//! H = E_core + Σ_{pq} h[p,q] a†_p a_q + 1/2 Σ_{pqrs} h[p,q,r,s] a†_p a†_q a_r a_s
//! ```
//!
//! in the physicist index convention, where `h[p,q,r,s]` multiplies
//! `a†_p a†_q a_r a_s`. DIRAC dumps its molecular-orbital integrals in the chemist
//! convention `(pq|rs)`, in which the two bra–ket index pairs are contiguous; the
//! expansion functions here perform the re-indexing between the two conventions
//! together with the spin-symmetry expansion required for non-relativistic restricted
//! calculations.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use ndarray::{Array, Array2, Array4, Dimension};
use serde::{Deserialize, Serialize};


/// One-electron integrals keyed by 1-based orbital index pairs, as stored in the
/// integral dump. Key order is significant: no permutational symmetry is assumed at
/// the storage level.
pub type OneBodyIntegrals = IndexMap<(usize, usize), f64>;

/// Two-electron integrals keyed by 1-based chemist-ordered index quadruples
/// `(p, q, r, s)` for `(pq|rs)`, as stored in the integral dump.
pub type TwoBodyIntegrals = IndexMap<(usize, usize, usize, usize), f64>;

/// An error indicating that a stored integral set cannot be expanded into dense
/// coefficient tensors.
#[derive(Debug, Clone)]
pub struct IntegralExpansionError(pub String);

impl fmt::Display for IntegralExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Integral expansion error: {}.", self.0)
    }
}

impl Error for IntegralExpansionError {}

/// Converts a stored 1-based spin-orbital index to its 0-based tensor position.
fn to_zero_based(index: usize, n_spinors: usize) -> Result<usize, IntegralExpansionError> {
    if index == 0 || index > n_spinors {
        Err(IntegralExpansionError(format!(
            "Stored orbital index {index} lies outside 1..={n_spinors}"
        )))
    } else {
        Ok(index - 1)
    }
}

/// Converts a stored 1-based spin-up spin-orbital index `2k+1` to its 0-based spatial
/// index `k`. Restricted dumps enumerate spin-up orbitals only, so even stored
/// indices are malformed.
fn to_spatial(index: usize, n_spinors: usize) -> Result<usize, IntegralExpansionError> {
    let index = to_zero_based(index, n_spinors)?;
    if index % 2 != 0 {
        Err(IntegralExpansionError(format!(
            "Stored two-electron index {} is a spin-down orbital, but restricted dumps \
             enumerate spin-up orbitals only",
            index + 1
        )))
    } else {
        Ok(index / 2)
    }
}

/// Expands the integrals of a relativistic calculation into dense coefficient
/// tensors.
///
/// Relativistic dumps list every spinor integral explicitly, so each stored key is
/// visited exactly once and no symmetry is assumed or imposed: the one-electron value
/// at `(p, q)` lands at `h[p-1, q-1]` without mirroring, and the chemist-ordered
/// two-electron value at `(p, q, r, s)` lands at `h[p-1, r-1, s-1, q-1]`, halved to
/// match the `1/2 Σ h[p,q,r,s]` form of the Hamiltonian.
///
/// # Arguments
///
/// * `one_body` - The stored one-electron integrals, keyed 1-based.
/// * `two_body` - The stored two-electron integrals, keyed 1-based in chemist order.
/// * `n_spinors` - The number of spin orbitals `n`; the returned tensors have shapes
///     `(n, n)` and `(n, n, n, n)`.
///
/// # Errors
///
/// [`IntegralExpansionError`] if a stored index lies outside `1..=n_spinors`.
pub fn spinor_coefficients(
    one_body: &OneBodyIntegrals,
    two_body: &TwoBodyIntegrals,
    n_spinors: usize,
) -> Result<(Array2<f64>, Array4<f64>), IntegralExpansionError> {
    let mut one_body_coefficients = Array2::<f64>::zeros((n_spinors, n_spinors));
    for (&(p, q), &value) in one_body.iter() {
        let (p, q) = (to_zero_based(p, n_spinors)?, to_zero_based(q, n_spinors)?);
        one_body_coefficients[[p, q]] = value;
    }

    let mut two_body_coefficients =
        Array4::<f64>::zeros((n_spinors, n_spinors, n_spinors, n_spinors));
    for (&(p, q, r, s), &value) in two_body.iter() {
        let p = to_zero_based(p, n_spinors)?;
        let q = to_zero_based(q, n_spinors)?;
        let r = to_zero_based(r, n_spinors)?;
        let s = to_zero_based(s, n_spinors)?;
        two_body_coefficients[[p, r, s, q]] = value / 2.0;
    }
    Ok((one_body_coefficients, two_body_coefficients))
}

/// Expands the integrals of a non-relativistic restricted calculation into dense
/// spin-orbital coefficient tensors.
///
/// Restricted dumps store one representative per permutation-symmetry class of
/// spin-up integrals: spin-up orbitals carry odd 1-based indices `2k+1`, and the
/// spin-down orbital sharing spatial slot `k` occupies the even index `2k+2`. The
/// expansion proceeds in three steps:
/// 1. one-electron values are mirrored Hermitian-symmetrically into `(p-1, q-1)` and
///    `(q-1, p-1)`;
/// 2. each stored two-electron value is written, halved, into the eight spin-up
///    tensor cells generated by the permutation symmetry of a real integral
///    (swapping the indices within either electron pair and swapping the pairs),
///    each re-indexed from chemist `(p, q, r, s)` to physicist `(p, r, s, q)` order;
/// 3. the spin-up block is replicated into the spin-down–spin-down and the two
///    mixed-spin sectors that pair spin labels consistently with the physicist
///    ordering.
///
/// # Errors
///
/// [`IntegralExpansionError`] if `n_spinors` is odd, a stored index lies outside
/// `1..=n_spinors`, or a stored two-electron key addresses a spin-down orbital.
pub fn spatial_coefficients(
    one_body: &OneBodyIntegrals,
    two_body: &TwoBodyIntegrals,
    n_spinors: usize,
) -> Result<(Array2<f64>, Array4<f64>), IntegralExpansionError> {
    if n_spinors % 2 != 0 {
        return Err(IntegralExpansionError(format!(
            "A restricted calculation requires an even number of spin orbitals, but \
             {n_spinors} were found"
        )));
    }

    let mut one_body_coefficients = Array2::<f64>::zeros((n_spinors, n_spinors));
    for (&(p, q), &value) in one_body.iter() {
        let (p, q) = (to_zero_based(p, n_spinors)?, to_zero_based(q, n_spinors)?);
        one_body_coefficients[[p, q]] = value;
        one_body_coefficients[[q, p]] = value;
    }

    let mut two_body_coefficients =
        Array4::<f64>::zeros((n_spinors, n_spinors, n_spinors, n_spinors));
    for (&(p, q, r, s), &value) in two_body.iter() {
        let p = to_spatial(p, n_spinors)?;
        let q = to_spatial(q, n_spinors)?;
        let r = to_spatial(r, n_spinors)?;
        let s = to_spatial(s, n_spinors)?;
        let halved = value / 2.0;
        // The eight chemist-order index tuples equivalent by the permutation symmetry
        // of a real integral, re-indexed to physicist order and placed on the even
        // (spin-up) indices.
        for (i, j, k, l) in [
            (p, q, r, s),
            (q, p, r, s),
            (p, q, s, r),
            (q, p, s, r),
            (r, s, p, q),
            (s, r, p, q),
            (r, s, q, p),
            (s, r, q, p),
        ] {
            two_body_coefficients[[2 * i, 2 * k, 2 * l, 2 * j]] = halved;
        }
    }

    // Restricted spin doubling: spin-up and spin-down spatial orbitals are identical,
    // and mixed-spin integrals equal the same-spin value whenever the spin labels
    // pair consistently with the physicist ordering.
    let n_spatial = n_spinors / 2;
    for p in 0..n_spatial {
        for q in 0..n_spatial {
            for r in 0..n_spatial {
                for s in 0..n_spatial {
                    let value = two_body_coefficients[[2 * p, 2 * q, 2 * r, 2 * s]];
                    two_body_coefficients[[2 * p + 1, 2 * q, 2 * r, 2 * s + 1]] = value;
                    two_body_coefficients[[2 * p, 2 * q + 1, 2 * r + 1, 2 * s]] = value;
                    two_body_coefficients[[2 * p + 1, 2 * q + 1, 2 * r + 1, 2 * s + 1]] = value;
                }
            }
        }
    }
    Ok((one_body_coefficients, two_body_coefficients))
}

/// Zeroes every tensor entry whose magnitude lies strictly below `threshold`.
///
/// Truncation is idempotent, and raising the threshold can only zero out more
/// entries. Two assemblies with the same threshold and the same input integrals
/// produce bit-identical tensors.
pub fn truncate<D>(coefficients: &mut Array<f64, D>, threshold: f64)
where
    D: Dimension,
{
    coefficients.mapv_inplace(|value| if value.abs() < threshold { 0.0 } else { value });
}

/// A structure containing the second-quantised molecular Hamiltonian: the core
/// energy together with the dense one- and two-body coefficient tensors in the
/// physicist index convention. Immutable once assembled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MolecularHamiltonian {
    /// The constant (core/nuclear-repulsion) energy.
    pub constant: f64,

    /// The coefficients `h[p,q]` of `a†_p a_q`, shape `(n, n)`.
    pub one_body_coefficients: Array2<f64>,

    /// The coefficients `h[p,q,r,s]` of `a†_p a†_q a_r a_s`, shape `(n, n, n, n)`.
    pub two_body_coefficients: Array4<f64>,
}

impl MolecularHamiltonian {
    /// Truncates the coefficient tensors against `threshold` and assembles the
    /// Hamiltonian triple. Assembly is all-or-nothing: callers never observe
    /// partially truncated tensors.
    pub fn assemble(
        constant: f64,
        mut one_body_coefficients: Array2<f64>,
        mut two_body_coefficients: Array4<f64>,
        threshold: f64,
    ) -> Self {
        truncate(&mut one_body_coefficients, threshold);
        truncate(&mut two_body_coefficients, threshold);
        MolecularHamiltonian {
            constant,
            one_body_coefficients,
            two_body_coefficients,
        }
    }

    /// Returns the number of qubits required to represent this Hamiltonian, which
    /// equals the number of spin orbitals spanned by the coefficient tensors.
    pub fn n_qubits(&self) -> usize {
        self.one_body_coefficients.nrows()
    }
}

impl fmt::Display for MolecularHamiltonian {
    /// Renders the Hamiltonian in second-quantised term form: one line per
    /// off-tolerance coefficient, each operator written as `(index, 1)` for a
    /// creation operator and `(index, 0)` for an annihilation operator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "() {}", self.constant)?;
        for ((p, q), value) in self.one_body_coefficients.indexed_iter() {
            if *value != 0.0 {
                writeln!(f, "(({p}, 1), ({q}, 0)) {value}")?;
            }
        }
        for ((p, q, r, s), value) in self.two_body_coefficients.indexed_iter() {
            if *value != 0.0 {
                writeln!(f, "(({p}, 1), ({q}, 1), ({r}, 0), ({s}, 0)) {value}")?;
            }
        }
        Ok(())
    }
}
