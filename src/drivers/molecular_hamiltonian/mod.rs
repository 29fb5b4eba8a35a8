//! Driver for assembling the second-quantised molecular Hamiltonian of one
//! DIRAC calculation.

use std::fmt;
use std::path::PathBuf;

use anyhow::{format_err, Context};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::auxiliary::molecule::Molecule;
use crate::drivers::Driver;
use crate::hamiltonian::{
    spatial_coefficients, spinor_coefficients, MolecularHamiltonian, OneBodyIntegrals,
    TwoBodyIntegrals,
};
use crate::interfaces::dirac::energies::DiracEnergies;
use crate::interfaces::dirac::fcidump::{Fcidump, OrbitalEnergies};
use crate::io::format::{
    fermidump_output, log_subtitle, log_title, nice_bool, write_subtitle, FermidumpOutput,
};
use crate::io::{read_fermidump_binary, write_fermidump_binary, FermidumpFileType};


// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// The default threshold below which assembled coefficient magnitudes are zeroed.
const DEFAULT_TRUNCATION_THRESHOLD: f64 = 1e-12;

fn default_truncation_threshold() -> f64 {
    DEFAULT_TRUNCATION_THRESHOLD
}

/// A structure containing control parameters for molecular Hamiltonian assembly.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct MolecularHamiltonianParams {
    /// Threshold below which assembled coefficient magnitudes are zeroed. Two
    /// assemblies with the same threshold and the same input integrals produce
    /// bit-identical tensors.
    #[builder(default = "DEFAULT_TRUNCATION_THRESHOLD")]
    #[serde(default = "default_truncation_threshold")]
    pub truncation_threshold: f64,

    /// Optional directory in which the DIRAC dump and output files are sought. If
    /// `None`, they are sought in the current working directory.
    #[builder(default = "None")]
    #[serde(default)]
    pub data_directory: Option<PathBuf>,

    /// Optional name for saving the resulting molecule record as a binary file of
    /// type [`FermidumpFileType::Mol`]. If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl MolecularHamiltonianParams {
    /// Returns a builder to construct a [`MolecularHamiltonianParams`] structure.
    pub fn builder() -> MolecularHamiltonianParamsBuilder {
        MolecularHamiltonianParamsBuilder::default()
    }
}

impl Default for MolecularHamiltonianParams {
    fn default() -> Self {
        MolecularHamiltonianParams::builder()
            .build()
            .expect("Unable to build a default `MolecularHamiltonianParams`.")
    }
}

impl fmt::Display for MolecularHamiltonianParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Truncation threshold: {:.3e}", self.truncation_threshold)?;
        writeln!(
            f,
            "Data directory: {}",
            self.data_directory
                .as_ref()
                .map(|directory| directory.display().to_string())
                .unwrap_or_else(|| "current directory".to_string())
        )?;
        writeln!(
            f,
            "Save molecule record to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                format!("{name}.{}", FermidumpFileType::Mol.ext())
            } else {
                nice_bool(false)
            }
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain the molecule record produced by one molecular Hamiltonian
/// assembly: the molecule metadata, the quantities ingested from the DIRAC files, and
/// the assembled Hamiltonian itself. This is the structure persisted to and resumed
/// from [`FermidumpFileType::Mol`] binary files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MolecularHamiltonianResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: MolecularHamiltonianParams,

    /// The molecule and calculation metadata.
    pub molecule: Molecule,

    /// The canonical calculation name through which the DIRAC files were located.
    pub name: String,

    /// The number of atoms in the molecule.
    pub n_atoms: usize,

    /// The number of electrons in the molecule.
    pub n_electrons: i64,

    /// The number of spin orbitals in the integral dump.
    pub n_orbitals: usize,

    /// The number of qubits required to represent the assembled Hamiltonian.
    pub n_qubits: usize,

    /// The core (reference) energy from the integral dump.
    pub core_energy: f64,

    /// The converged self-consistent-field total energy, if reported.
    pub scf_energy: Option<String>,

    /// The MP2 total energy, if reported.
    pub mp2_energy: Option<String>,

    /// The CCSD total energy, if reported.
    pub ccsd_energy: Option<String>,

    /// The orbital-energy spectrum from the integral dump.
    pub orbital_energies: OrbitalEnergies,

    /// The one-electron integrals exactly as dumped (1-based, chemist order).
    pub one_body_integrals: OneBodyIntegrals,

    /// The two-electron integrals exactly as dumped (1-based, chemist order).
    pub two_body_integrals: TwoBodyIntegrals,

    /// The assembled second-quantised Hamiltonian (0-based, physicist order).
    pub hamiltonian: MolecularHamiltonian,
}

impl MolecularHamiltonianResult {
    /// Returns the textual term-by-term rendering of the assembled Hamiltonian.
    pub fn hamiltonian_rendering(&self) -> String {
        self.hamiltonian.to_string()
    }
}

impl fmt::Display for MolecularHamiltonianResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Molecular Hamiltonian assembly summary")?;
        writeln!(f)?;
        writeln!(f, "Calculation name: {}", self.name)?;
        writeln!(f, "Atoms: {}", self.n_atoms)?;
        writeln!(f, "Electrons: {}", self.n_electrons)?;
        writeln!(f, "Spin orbitals: {}", self.n_orbitals)?;
        writeln!(f, "Qubits required: {}", self.n_qubits)?;
        writeln!(f)?;
        writeln!(f, "Core energy: {}", self.core_energy)?;
        writeln!(
            f,
            "SCF total energy: {}",
            self.scf_energy.as_deref().unwrap_or("--")
        )?;
        writeln!(
            f,
            "MP2 total energy: {}",
            self.mp2_energy.as_deref().unwrap_or("--")
        )?;
        writeln!(
            f,
            "CCSD total energy: {}",
            self.ccsd_energy.as_deref().unwrap_or("--")
        )?;
        writeln!(f)?;
        writeln!(f, "{:>8} {:>18}", "Orbital", "Energy")?;
        for (index, energy) in self.orbital_energies.iter() {
            writeln!(f, "{index:>8} {energy:>18.10}")?;
        }
        writeln!(f)?;
        let one_body_terms = self
            .hamiltonian
            .one_body_coefficients
            .iter()
            .filter(|value| **value != 0.0)
            .count();
        let two_body_terms = self
            .hamiltonian
            .two_body_coefficients
            .iter()
            .filter(|value| **value != 0.0)
            .count();
        writeln!(f, "Off-threshold one-body coefficients: {one_body_terms}")?;
        writeln!(f, "Off-threshold two-body coefficients: {two_body_terms}")?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for molecular Hamiltonian assembly. Exactly one of a molecule (for a
/// fresh ingestion of its DIRAC files) or the name of a saved molecule record (for
/// resumption without re-ingestion) must be supplied.
#[derive(Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct MolecularHamiltonianDriver<'a> {
    /// The control parameters for Hamiltonian assembly.
    parameters: &'a MolecularHamiltonianParams,

    /// A molecule whose DIRAC files are to be ingested. Only one of this or
    /// [`Self::saved_record`] should be specified.
    #[builder(default = "None")]
    molecule: Option<&'a Molecule>,

    /// The name of a previously saved molecule record (without the
    /// `.fermidump.mol` extension) to resume from. Only one of this or
    /// [`Self::molecule`] should be specified.
    #[builder(default = "None")]
    saved_record: Option<String>,

    /// The result of the Hamiltonian assembly.
    #[builder(setter(skip), default = "None")]
    result: Option<MolecularHamiltonianResult>,
}

impl<'a> MolecularHamiltonianDriverBuilder<'a> {
    fn validate(&self) -> Result<(), String> {
        let has_molecule = self.molecule.as_ref().is_some_and(|m| m.is_some());
        let has_record = self.saved_record.as_ref().is_some_and(|r| r.is_some());
        if has_molecule == has_record {
            Err("Neither or both `molecule` and `saved_record` are specified.".to_string())
        } else {
            Ok(())
        }
    }
}

impl<'a> MolecularHamiltonianDriver<'a> {
    /// Returns a builder to construct a [`MolecularHamiltonianDriver`].
    pub fn builder() -> MolecularHamiltonianDriverBuilder<'a> {
        MolecularHamiltonianDriverBuilder::default()
    }

    /// Executes the ingestion pipeline: energy-log scan, dump parse, coefficient
    /// expansion in the mode selected by the molecule's relativistic flag, and
    /// truncated assembly. No partial result is stored on failure.
    fn assemble_hamiltonian(&mut self) -> Result<(), anyhow::Error> {
        log_title("Molecular Hamiltonian Assembly");
        fermidump_output!("");
        let params = self.parameters;
        params.log_output_display();

        if let Some(record_name) = self.saved_record.clone() {
            log_subtitle("Resumption from a saved molecule record");
            fermidump_output!("");
            let result: MolecularHamiltonianResult =
                read_fermidump_binary(&record_name, FermidumpFileType::Mol).with_context(
                    || {
                        format!(
                            "Unable to read the saved molecule record `{record_name}.{}`",
                            FermidumpFileType::Mol.ext()
                        )
                    },
                )?;
            fermidump_output!("Molecule record for `{}` loaded.", result.name);
            fermidump_output!("");
            result.log_output_display();
            fermidump_output!("");
            self.result = Some(result);
            return Ok(());
        }

        let molecule = self
            .molecule
            .ok_or_else(|| format_err!("No molecule specified."))?;
        fermidump_output!("Molecule for Hamiltonian assembly:");
        molecule.log_output_display();
        let name = molecule.name()?;
        fermidump_output!("Calculation name: {name}");
        fermidump_output!("");

        let data_directory = params.data_directory.as_ref();
        let energies =
            DiracEnergies::from_file(DiracEnergies::out_path(&name, data_directory))?;
        let dump = Fcidump::from_file(Fcidump::dump_path(&name, data_directory))?;
        let n_spinors = dump.n_spinors();

        let (one_body_coefficients, two_body_coefficients) = if molecule.relativistic {
            spinor_coefficients(&dump.one_body, &dump.two_body, n_spinors)?
        } else {
            spatial_coefficients(&dump.one_body, &dump.two_body, n_spinors)?
        };
        let hamiltonian = MolecularHamiltonian::assemble(
            dump.core_energy,
            one_body_coefficients,
            two_body_coefficients,
            params.truncation_threshold,
        );

        let result = MolecularHamiltonianResult {
            parameters: params.clone(),
            molecule: molecule.clone(),
            name,
            n_atoms: molecule.n_atoms(),
            n_electrons: molecule.n_electrons(),
            n_orbitals: n_spinors,
            n_qubits: hamiltonian.n_qubits(),
            core_energy: dump.core_energy,
            scf_energy: energies.scf,
            mp2_energy: energies.mp2,
            ccsd_energy: energies.ccsd,
            orbital_energies: dump.orbital_energies,
            one_body_integrals: dump.one_body,
            two_body_integrals: dump.two_body,
            hamiltonian,
        };
        result.log_output_display();
        fermidump_output!("");

        if let Some(save_name) = params.result_save_name.as_ref() {
            write_fermidump_binary(save_name, FermidumpFileType::Mol, &result).with_context(
                || {
                    format!(
                        "Unable to save the molecule record as `{save_name}.{}`",
                        FermidumpFileType::Mol.ext()
                    )
                },
            )?;
            fermidump_output!(
                "Molecule record saved as `{save_name}.{}`.",
                FermidumpFileType::Mol.ext()
            );
            fermidump_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl<'a> Driver for MolecularHamiltonianDriver<'a> {
    type Params = MolecularHamiltonianParams;

    type Outcome = MolecularHamiltonianResult;

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.assemble_hamiltonian()
    }

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No molecular Hamiltonian assembly results found."))
    }
}
