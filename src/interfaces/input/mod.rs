//! YAML input specification for the Fermidump binary.

use std::path::PathBuf;

use anyhow::{self, format_err};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::auxiliary::atom::{Atom, ElementMap};
use crate::auxiliary::molecule::{atoms_from_geometry_file, Molecule};
use crate::drivers::molecular_hamiltonian::{
    MolecularHamiltonianDriver, MolecularHamiltonianParams, MolecularHamiltonianResult,
};
use crate::drivers::Driver;

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

/// An enumerated type representing possible Hamiltonian-assembly input kinds from a
/// YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub enum MolecularHamiltonianInputKind {
    /// Variant indicating that the parameters for the Hamiltonian-assembly driver
    /// will be specified.
    Parameters(MolecularHamiltonianParams),

    /// Variant indicating that a previously saved molecule record will be read in
    /// from a Fermidump `.fermidump.mol` binary file. The associated string gives
    /// the name of the file without its extension.
    FromFile(String),
}

impl Default for MolecularHamiltonianInputKind {
    fn default() -> Self {
        MolecularHamiltonianInputKind::Parameters(MolecularHamiltonianParams::default())
    }
}

/// An enumerated type representing possible geometry sources in a YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub enum GeometryInput {
    /// Variant for a path to a geometry file whose four-field lines each give an
    /// atomic symbol and three Cartesian coordinates in Ångström.
    FromFile(PathBuf),

    /// Variant for an inline list of atoms, each an atomic symbol and three
    /// Cartesian coordinates in Ångström.
    Inline(Vec<(String, [f64; 3])>),
}

/// A structure containing the molecule specification from a YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub struct MoleculeInput {
    /// Specification of the molecular geometry.
    pub geometry: GeometryInput,

    /// The basis set of the calculation.
    pub basis: String,

    /// The spin multiplicity of the molecule.
    pub multiplicity: u32,

    /// The net molecular charge.
    #[serde(default)]
    pub charge: i32,

    /// An optional descriptive tag.
    #[serde(default)]
    pub description: String,

    /// Boolean indicating if the calculation is relativistic.
    #[serde(default)]
    pub relativistic: bool,

    /// Boolean indicating if point-group symmetry was enabled in the calculation.
    #[serde(default = "default_true")]
    pub point_group_symmetry: bool,

    /// Optional manual speed of light (in atomic units) used in the calculation.
    #[serde(default)]
    pub speed_of_light: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl MoleculeInput {
    /// Builds the molecule specified by this input.
    pub fn to_molecule(&self) -> Result<Molecule, anyhow::Error> {
        let atoms = match &self.geometry {
            GeometryInput::FromFile(path) => atoms_from_geometry_file(path)?,
            GeometryInput::Inline(entries) => {
                let emap = ElementMap::new();
                entries
                    .iter()
                    .map(|(symbol, [x, y, z])| {
                        let &(atomic_number, atomic_mass) = emap.get(symbol).ok_or_else(|| {
                            format_err!("Unknown element symbol `{symbol}` in the inline geometry.")
                        })?;
                        Ok(Atom {
                            atomic_number,
                            atomic_symbol: symbol.clone(),
                            atomic_mass,
                            coordinates: Point3::new(*x, *y, *z),
                        })
                    })
                    .collect::<Result<Vec<_>, anyhow::Error>>()?
            }
        };
        Molecule::builder()
            .atoms(atoms)
            .basis(self.basis.clone())
            .multiplicity(self.multiplicity)
            .charge(self.charge)
            .description(self.description.clone())
            .relativistic(self.relativistic)
            .point_group_symmetry(self.point_group_symmetry)
            .speed_of_light(self.speed_of_light)
            .build()
            .map_err(|err| format_err!(err))
    }
}

/// A structure containing Fermidump input parameters which can be serialised into
/// and deserialised from a YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub struct Input {
    /// Specification of the molecule and the DIRAC calculation on it. Required for a
    /// fresh ingestion; ignored when resuming from a saved molecule record.
    ///
    /// # Default
    ///
    /// If not specified, this will be taken to be `None`.
    #[serde(default)]
    pub molecule: Option<MoleculeInput>,

    /// Specification for Hamiltonian assembly: either driver parameters for a fresh
    /// ingestion, or the name of a saved molecule record to resume from.
    ///
    /// # Default
    ///
    /// If not specified, default driver parameters are used.
    #[serde(default)]
    pub hamiltonian: MolecularHamiltonianInputKind,
}

impl Input {
    /// Executes this input specification and returns the resulting molecule record.
    pub fn execute(&self) -> Result<MolecularHamiltonianResult, anyhow::Error> {
        match &self.hamiltonian {
            MolecularHamiltonianInputKind::Parameters(params) => {
                let molecule = self
                    .molecule
                    .as_ref()
                    .ok_or_else(|| {
                        format_err!(
                            "A molecule specification is required unless resuming from a saved \
                             molecule record."
                        )
                    })?
                    .to_molecule()?;
                let mut driver = MolecularHamiltonianDriver::builder()
                    .parameters(params)
                    .molecule(Some(&molecule))
                    .build()?;
                driver.run()?;
                driver.result().cloned()
            }
            MolecularHamiltonianInputKind::FromFile(record_name) => {
                let params = MolecularHamiltonianParams::default();
                let mut driver = MolecularHamiltonianDriver::builder()
                    .parameters(&params)
                    .saved_record(Some(record_name.clone()))
                    .build()?;
                driver.run()?;
                driver.result().cloned()
            }
        }
    }
}
