use serde_yaml;

use crate::interfaces::input::{Input, MolecularHamiltonianInputKind};

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

#[test]
fn test_input_inline_geometry_relativistic_run() {
    let yaml = format!(
        "\
molecule:
  geometry: !Inline
    - [H, [0.0, 0.0, 0.0]]
    - [H, [0.0, 0.0, 0.7414]]
  basis: sto-3g
  multiplicity: 1
  relativistic: true
hamiltonian: !Parameters
  data_directory: {ROOT}/tests
"
    );
    let input: Input = serde_yaml::from_str(&yaml).unwrap();
    let result = input.execute().unwrap();
    assert_eq!(result.name, "H2_sto-3g_singlet_rel");
    assert_eq!(result.core_energy, 0.7137539936);
    assert_eq!(result.n_qubits, 4);
}

#[test]
fn test_input_geometry_from_file() {
    let yaml = format!(
        "\
molecule:
  geometry: !FromFile {ROOT}/tests/h2.xyz
  basis: sto-3g
  multiplicity: 1
hamiltonian: !Parameters
  data_directory: {ROOT}/tests
"
    );
    let input: Input = serde_yaml::from_str(&yaml).unwrap();
    let molecule = input.molecule.as_ref().unwrap().to_molecule().unwrap();
    assert_eq!(molecule.n_atoms(), 2);
    assert!(molecule.point_group_symmetry);
    assert!(!molecule.relativistic);

    let result = input.execute().unwrap();
    assert_eq!(result.name, "H2_sto-3g_singlet");
    assert_eq!(result.ccsd_energy, None);
}

#[test]
fn test_input_defaults() {
    let yaml = "\
molecule:
  geometry: !Inline
    - [He, [0.0, 0.0, 0.0]]
  basis: sto-3g
  multiplicity: 1
";
    let input: Input = serde_yaml::from_str(yaml).unwrap();
    match &input.hamiltonian {
        MolecularHamiltonianInputKind::Parameters(params) => {
            assert_eq!(params.truncation_threshold, 1e-12);
            assert!(params.data_directory.is_none());
            assert!(params.result_save_name.is_none());
        }
        MolecularHamiltonianInputKind::FromFile(_) => panic!("Expected default parameters."),
    }
}

#[test]
fn test_input_missing_molecule_is_rejected_before_io() {
    let yaml = "\
hamiltonian: !Parameters
  truncation_threshold: 1.0e-10
";
    let input: Input = serde_yaml::from_str(yaml).unwrap();
    assert!(input.molecule.is_none());
    assert!(input.execute().is_err());
}

#[test]
fn test_input_unknown_inline_element_is_rejected() {
    let yaml = "\
molecule:
  geometry: !Inline
    - [Qq, [0.0, 0.0, 0.0]]
  basis: sto-3g
  multiplicity: 1
";
    let input: Input = serde_yaml::from_str(yaml).unwrap();
    assert!(input.molecule.unwrap().to_molecule().is_err());
}
