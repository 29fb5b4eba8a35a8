//! Fermidump interface with the DIRAC relativistic quantum-chemistry program.
//!
//! A DIRAC calculation carried out with the OpenFermion molecular-orbital integral
//! export leaves behind two files named after the molecule's canonical name: the
//! integral dump `FCIDUMP_{name}` and the textual output `{name}.out`. This module
//! reads both back in.

use std::error::Error;
use std::fmt;

pub mod energies;
pub mod fcidump;

/// An error indicating that an expected DIRAC output file is absent. This condition
/// is recoverable: the caller may run the missing DIRAC calculation and retry.
#[derive(Debug, Clone)]
pub struct MissingCalculationError(pub String);

impl fmt::Display for MissingCalculationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Missing calculation: {}.", self.0)
    }
}

impl Error for MissingCalculationError {}

/// An error indicating a structurally invalid integral dump. Parsing fails fast on
/// this condition and no partial integral set is returned.
#[derive(Debug, Clone)]
pub struct FcidumpFormatError(pub String);

impl fmt::Display for FcidumpFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FCIDUMP format error: {}.", self.0)
    }
}

impl Error for FcidumpFormatError {}
