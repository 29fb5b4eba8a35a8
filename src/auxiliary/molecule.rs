//! Molecules and their canonical names.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{self, Context};
use derive_builder::Builder;
use itertools::Itertools;
use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::auxiliary::atom::{Atom, ElementMap};
use crate::io::format::nice_bool;

#[cfg(test)]
#[path = "molecule_tests.rs"]
mod molecule_tests;

/// Spectroscopic names for the supported spin multiplicities.
static MULTIPLICITY_NAMES: phf::Map<u32, &'static str> = phf_map! {
    1u32 => "singlet",
    2u32 => "doublet",
    3u32 => "triplet",
    4u32 => "quartet",
    5u32 => "quintet",
    6u32 => "sextet",
    7u32 => "septet",
    8u32 => "octet",
    9u32 => "nonet",
    10u32 => "dectet",
    11u32 => "undectet",
    12u32 => "duodectet",
};

/// An error indicating an unusable molecule specification.
#[derive(Debug, Clone)]
pub struct MoleculeSpecificationError(pub String);

impl fmt::Display for MoleculeSpecificationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Molecule specification error: {}.", self.0)
    }
}

impl Error for MoleculeSpecificationError {}

/// Parses the lines of a geometry file into atoms.
///
/// Only lines consisting of exactly four whitespace-separated fields (an atomic symbol
/// followed by three Cartesian coordinates in Ångström) contribute atoms; all other
/// lines are skipped. A four-field line that cannot be interpreted is an error.
///
/// # Arguments
///
/// * `contents` - The contents of a geometry file.
/// * `emap` - A hash map between atomic symbols and atomic numbers and masses.
///
/// # Returns
///
/// A `Result` containing the parsed atoms.
pub fn atoms_from_geometry_str(
    contents: &str,
    emap: &ElementMap,
) -> Result<Vec<Atom>, MoleculeSpecificationError> {
    contents
        .lines()
        .filter(|line| line.split_whitespace().count() == 4)
        .map(|line| {
            Atom::from_geometry_line(line, emap).ok_or_else(|| {
                MoleculeSpecificationError(format!("Unable to parse the geometry line `{line}`"))
            })
        })
        .collect()
}

/// Reads a geometry file and parses its lines into atoms.
///
/// # Arguments
///
/// * `path` - A path to a geometry file.
///
/// # Returns
///
/// A `Result` containing the parsed atoms.
pub fn atoms_from_geometry_file<P: AsRef<Path>>(path: P) -> Result<Vec<Atom>, anyhow::Error> {
    let contents = fs::read_to_string(&path).with_context(|| {
        format!(
            "Unable to read the geometry file `{}`",
            path.as_ref().display()
        )
    })?;
    let emap = ElementMap::new();
    atoms_from_geometry_str(&contents, &emap).map_err(anyhow::Error::new)
}

/// A structure containing a molecule and the metadata identifying one DIRAC
/// calculation on it.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct Molecule {
    /// The atoms constituting this molecule, in input order.
    pub atoms: Vec<Atom>,

    /// The basis set of the calculation, *e.g.* `sto-3g` or `cc-pVTZ`.
    pub basis: String,

    /// The spin multiplicity of the molecule.
    pub multiplicity: u32,

    /// The net molecular charge.
    #[builder(default = "0")]
    pub charge: i32,

    /// An optional descriptive tag, *e.g.* the bond length of a dimer.
    #[builder(default = "String::new()")]
    pub description: String,

    /// Boolean indicating if the calculation is relativistic.
    #[builder(default = "false")]
    pub relativistic: bool,

    /// Boolean indicating if point-group symmetry was enabled in the calculation.
    #[builder(default = "true")]
    pub point_group_symmetry: bool,

    /// Optional manual speed of light (in atomic units) used in the calculation.
    #[builder(default = "None")]
    pub speed_of_light: Option<f64>,
}

impl Molecule {
    /// Returns a builder to construct a [`Molecule`].
    pub fn builder() -> MoleculeBuilder {
        MoleculeBuilder::default()
    }

    /// Returns the number of atoms in this molecule.
    pub fn n_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the atomic numbers of the constituent atoms, sorted ascendingly.
    pub fn protons(&self) -> Vec<u32> {
        let mut protons = self
            .atoms
            .iter()
            .map(|atom| atom.atomic_number)
            .collect::<Vec<_>>();
        protons.sort_unstable();
        protons
    }

    /// Returns the number of electrons in this molecule.
    pub fn n_electrons(&self) -> i64 {
        self.protons()
            .iter()
            .map(|&z| i64::from(z))
            .sum::<i64>()
            - i64::from(self.charge)
    }

    /// Returns the number of spin-up electrons in this molecule.
    pub fn n_alpha_electrons(&self) -> i64 {
        (self.n_electrons() + i64::from(self.multiplicity) - 1).div_euclid(2)
    }

    /// Returns the number of spin-down electrons in this molecule.
    pub fn n_beta_electrons(&self) -> i64 {
        (self.n_electrons() - i64::from(self.multiplicity) + 1).div_euclid(2)
    }

    /// Returns the canonical name of the calculation on this molecule.
    ///
    /// The name begins with the element counts sorted by atomic number (*e.g.*
    /// `H2-O1`), followed by the basis set and the spectroscopic multiplicity name,
    /// then optionally the charge tag, the descriptive tag, a `_rel` marker for
    /// relativistic calculations, a `_nosym` marker when point-group symmetry is
    /// disabled, and a `_c{c}` marker for a manual speed of light. The DIRAC dump and
    /// log files for the calculation are located through this name.
    ///
    /// # Errors
    ///
    /// [`MoleculeSpecificationError`] if the spin multiplicity has no spectroscopic
    /// name.
    pub fn name(&self) -> Result<String, MoleculeSpecificationError> {
        let mut element_counts: Vec<(u32, &str, usize)> = Vec::new();
        for atom in &self.atoms {
            match element_counts
                .iter_mut()
                .find(|(_, symbol, _)| *symbol == atom.atomic_symbol)
            {
                Some(entry) => entry.2 += 1,
                None => element_counts.push((atom.atomic_number, atom.atomic_symbol.as_str(), 1)),
            }
        }
        element_counts.sort_by_key(|&(atomic_number, _, _)| atomic_number);
        let mut name = element_counts
            .iter()
            .map(|(_, symbol, count)| format!("{symbol}{count}"))
            .join("-");

        name.push_str(&format!("_{}", self.basis));

        let multiplicity_name = MULTIPLICITY_NAMES.get(&self.multiplicity).ok_or_else(|| {
            MoleculeSpecificationError(format!(
                "Invalid spin multiplicity {} provided",
                self.multiplicity
            ))
        })?;
        name.push_str(&format!("_{multiplicity_name}"));

        if self.charge > 0 {
            name.push_str(&format!("_{}+", self.charge));
        } else if self.charge < 0 {
            name.push_str(&format!("_{}-", self.charge));
        }

        if !self.description.is_empty() {
            name.push_str(&format!("_{}", self.description));
        }
        if self.relativistic {
            name.push_str("_rel");
        }
        if !self.point_group_symmetry {
            name.push_str("_nosym");
        }
        if let Some(speed_of_light) = self.speed_of_light {
            name.push_str(&format!("_c{speed_of_light}"));
        }
        Ok(name)
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Geometry (Å):")?;
        for atom in &self.atoms {
            writeln!(f, "  {atom}")?;
        }
        writeln!(f, "Basis set: {}", self.basis)?;
        writeln!(f, "Spin multiplicity: {}", self.multiplicity)?;
        writeln!(f, "Net charge: {}", self.charge)?;
        if !self.description.is_empty() {
            writeln!(f, "Description: {}", self.description)?;
        }
        writeln!(f, "Relativistic: {}", nice_bool(self.relativistic))?;
        writeln!(
            f,
            "Point-group symmetry: {}",
            nice_bool(self.point_group_symmetry)
        )?;
        if let Some(speed_of_light) = self.speed_of_light {
            writeln!(f, "Manual speed of light: {speed_of_light} a.u.")?;
        }
        Ok(())
    }
}
