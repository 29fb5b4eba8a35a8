//! Scanning of DIRAC textual output for converged total energies.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{self, Context};
use lazy_static::lazy_static;
use regex::Regex;

use crate::interfaces::dirac::MissingCalculationError;

#[cfg(test)]
#[path = "energies_tests.rs"]
mod energies_tests;

lazy_static! {
    static ref SCF_ENERGY_RE: Regex =
        Regex::new("Total energy                             :").expect("Regex pattern invalid.");
    static ref MP2_ENERGY_RE: Regex =
        Regex::new("@ Total MP2 energy").expect("Regex pattern invalid.");
    static ref CCSD_ENERGY_RE: Regex =
        Regex::new("@ Total CCSD energy").expect("Regex pattern invalid.");
}

/// A structure containing the total energies reported in a DIRAC output file. Each
/// energy is kept as the opaque numeric token printed by DIRAC; absent sections
/// simply yield `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiracEnergies {
    /// The converged self-consistent-field total energy.
    pub scf: Option<String>,

    /// The MP2 total energy.
    pub mp2: Option<String>,

    /// The CCSD total energy.
    pub ccsd: Option<String>,
}

/// Returns the last whitespace-delimited token of a line.
fn last_token(line: &str) -> Option<String> {
    line.split_whitespace().last().map(|token| token.to_string())
}

impl DiracEnergies {
    /// Returns the path of the DIRAC output file for the calculation named `name`,
    /// optionally rooted at a data directory.
    pub fn out_path<P: AsRef<Path>>(name: &str, data_directory: Option<P>) -> PathBuf {
        let file_name = format!("{name}.out");
        match data_directory {
            Some(directory) => directory.as_ref().join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Reads a DIRAC output file and scans it for total energies.
    ///
    /// # Errors
    ///
    /// [`MissingCalculationError`] if no file exists at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MissingCalculationError(format!(
                "DIRAC output `{}` not found; check the DIRAC calculation",
                path.display()
            ))
            .into());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read the DIRAC output `{}`", path.display()))?;
        Ok(Self::scan(&contents))
    }

    /// Scans output contents for the three energy labels, taking the last token of
    /// the first line matching each label.
    pub fn scan(contents: &str) -> Self {
        let mut energies = DiracEnergies::default();
        for line in contents.lines() {
            if energies.scf.is_none() && SCF_ENERGY_RE.is_match(line) {
                energies.scf = last_token(line);
            }
            if energies.mp2.is_none() && MP2_ENERGY_RE.is_match(line) {
                energies.mp2 = last_token(line);
            }
            if energies.ccsd.is_none() && CCSD_ENERGY_RE.is_match(line) {
                energies.ccsd = last_token(line);
            }
        }
        energies
    }
}
