//! Parsing of DIRAC molecular-orbital integral dumps.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{self, Context};
use indexmap::IndexMap;

use crate::hamiltonian::{OneBodyIntegrals, TwoBodyIntegrals};
use crate::interfaces::dirac::{FcidumpFormatError, MissingCalculationError};

#[cfg(test)]
#[path = "fcidump_tests.rs"]
mod fcidump_tests;

/// The token terminating the namelist header of an FCIDUMP file.
const NAMELIST_END: &str = "&END";

/// The orbital-energy spectrum: 1-based orbital index → canonical orbital energy.
pub type OrbitalEnergies = IndexMap<usize, f64>;

/// A structure containing the records of one FCIDUMP integral dump, exactly as
/// stored: indices are 1-based, two-electron keys are in the chemist order
/// `(pq|rs) → (p, q, r, s)`, and no reordering or deduplication has taken place. A
/// record whose key repeats an earlier one silently overwrites it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fcidump {
    /// The core (reference) energy, from the record whose four indices are all zero.
    pub core_energy: f64,

    /// The orbital energies, from records with exactly two trailing zero indices and
    /// a zero second index.
    pub orbital_energies: OrbitalEnergies,

    /// The one-electron integrals, from records with exactly two trailing zero
    /// indices and a non-zero second index.
    pub one_body: OneBodyIntegrals,

    /// The two-electron integrals, from all remaining records.
    pub two_body: TwoBodyIntegrals,
}

impl Fcidump {
    /// Returns the path of the integral dump for the calculation named `name`,
    /// optionally rooted at a data directory.
    pub fn dump_path<P: AsRef<Path>>(name: &str, data_directory: Option<P>) -> PathBuf {
        let file_name = format!("FCIDUMP_{name}");
        match data_directory {
            Some(directory) => directory.as_ref().join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Reads and parses an integral dump file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path of the dump file.
    ///
    /// # Errors
    ///
    /// [`MissingCalculationError`] if no file exists at `path`;
    /// [`FcidumpFormatError`] if the file exists but contains a structurally invalid
    /// record.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MissingCalculationError(format!(
                "integral dump `{}` not found; run the DIRAC calculation first",
                path.display()
            ))
            .into());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read the integral dump `{}`", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Unable to parse the integral dump `{}`", path.display()))
    }

    /// Parses the contents of an integral dump.
    ///
    /// Header lines are skipped up to and including the line containing the `&END`
    /// namelist terminator. Every subsequent non-blank line must consist of exactly
    /// five whitespace-separated tokens `value i1 i2 i3 i4`, and is classified by its
    /// trailing-zero index pattern, strictly in the order core energy → orbital
    /// energy → one-electron → two-electron.
    pub fn parse(contents: &str) -> Result<Self, anyhow::Error> {
        let mut lines = contents.lines();
        if !lines.by_ref().any(|line| line.contains(NAMELIST_END)) {
            return Err(FcidumpFormatError(format!(
                "no `{NAMELIST_END}` namelist terminator found"
            ))
            .into());
        }

        let mut dump = Fcidump::default();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let tokens = line.split_whitespace().collect::<Vec<_>>();
            if tokens.len() != 5 {
                return Err(FcidumpFormatError(format!(
                    "record `{line}` has {} fields, expected 5",
                    tokens.len()
                ))
                .into());
            }
            let value = tokens[0].parse::<f64>().map_err(|_| {
                FcidumpFormatError(format!("unable to parse `{}` as a real value", tokens[0]))
            })?;
            let mut indices = [0usize; 4];
            for (index, token) in indices.iter_mut().zip(&tokens[1..]) {
                *index = token.parse::<usize>().map_err(|_| {
                    FcidumpFormatError(format!("unable to parse `{token}` as an orbital index"))
                })?;
            }
            let [i1, i2, i3, i4] = indices;

            if i4 == 0 && i3 == 0 {
                if i2 == 0 {
                    if i1 == 0 {
                        dump.core_energy = value;
                    } else {
                        dump.orbital_energies.insert(i1, value);
                    }
                } else {
                    dump.one_body.insert((i1, i2), value);
                }
            } else {
                dump.two_body.insert((i1, i2, i3, i4), value);
            }
        }
        Ok(dump)
    }

    /// Returns the number of spin orbitals spanned by this dump, which equals the
    /// length of the orbital-energy spectrum.
    pub fn n_spinors(&self) -> usize {
        self.orbital_energies.len()
    }
}
