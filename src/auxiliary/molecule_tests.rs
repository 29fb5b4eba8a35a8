use crate::auxiliary::atom::ElementMap;
use crate::auxiliary::molecule::{atoms_from_geometry_str, Molecule};

fn hydrogen_dimer(relativistic: bool) -> Molecule {
    let emap = ElementMap::new();
    let atoms = atoms_from_geometry_str("H 0.0 0.0 0.0\nH 0.0 0.0 0.7414\n", &emap).unwrap();
    Molecule::builder()
        .atoms(atoms)
        .basis("sto-3g".to_string())
        .multiplicity(1)
        .relativistic(relativistic)
        .build()
        .unwrap()
}

#[test]
fn test_molecule_name_hydrogen_dimer() {
    let mol = hydrogen_dimer(false);
    assert_eq!(mol.name().unwrap(), "H2_sto-3g_singlet");

    let mol_rel = hydrogen_dimer(true);
    assert_eq!(mol_rel.name().unwrap(), "H2_sto-3g_singlet_rel");
}

#[test]
fn test_molecule_name_water_sorted_by_atomic_number() {
    let emap = ElementMap::new();
    let atoms = atoms_from_geometry_str(
        "O 0.0 0.0 0.1173\nH 0.0 0.7572 -0.4692\nH 0.0 -0.7572 -0.4692\n",
        &emap,
    )
    .unwrap();
    let mol = Molecule::builder()
        .atoms(atoms)
        .basis("cc-pVDZ".to_string())
        .multiplicity(1)
        .build()
        .unwrap();
    // Hydrogen precedes oxygen regardless of input order.
    assert_eq!(mol.name().unwrap(), "H2-O1_cc-pVDZ_singlet");
}

#[test]
fn test_molecule_name_tags() {
    let emap = ElementMap::new();
    let atoms = atoms_from_geometry_str("He 0.0 0.0 0.0", &emap).unwrap();
    let mol = Molecule::builder()
        .atoms(atoms)
        .basis("sto-3g".to_string())
        .multiplicity(2)
        .charge(1)
        .description("ionised".to_string())
        .point_group_symmetry(false)
        .speed_of_light(Some(137.0))
        .build()
        .unwrap();
    assert_eq!(
        mol.name().unwrap(),
        "He1_sto-3g_doublet_1+_ionised_nosym_c137"
    );
}

#[test]
fn test_molecule_name_invalid_multiplicity() {
    let emap = ElementMap::new();
    let atoms = atoms_from_geometry_str("H 0.0 0.0 0.0", &emap).unwrap();
    let mol = Molecule::builder()
        .atoms(atoms)
        .basis("sto-3g".to_string())
        .multiplicity(13)
        .build()
        .unwrap();
    assert!(mol.name().is_err());
}

#[test]
fn test_molecule_electron_counts() {
    let emap = ElementMap::new();
    let atoms = atoms_from_geometry_str(
        "O 0.0 0.0 0.1173\nH 0.0 0.7572 -0.4692\nH 0.0 -0.7572 -0.4692\n",
        &emap,
    )
    .unwrap();
    let mol = Molecule::builder()
        .atoms(atoms)
        .basis("sto-3g".to_string())
        .multiplicity(1)
        .charge(1)
        .build()
        .unwrap();
    assert_eq!(mol.n_atoms(), 3);
    assert_eq!(mol.protons(), vec![1, 1, 8]);
    assert_eq!(mol.n_electrons(), 9);
    assert_eq!(mol.n_alpha_electrons(), 4);
    assert_eq!(mol.n_beta_electrons(), 4);
}

#[test]
fn test_atoms_from_geometry_str_skips_non_geometry_lines() {
    let emap = ElementMap::new();
    let atoms = atoms_from_geometry_str(
        "2\ncomment line\nH 0.0 0.0 0.0\nH 0.0 0.0 0.7414\n\n",
        &emap,
    )
    .unwrap();
    assert_eq!(atoms.len(), 2);
}

#[test]
fn test_atoms_from_geometry_str_rejects_bad_four_field_lines() {
    let emap = ElementMap::new();
    assert!(atoms_from_geometry_str("Zz 0.0 0.0 0.0", &emap).is_err());
    assert!(atoms_from_geometry_str("H 0.0 0.0 abc", &emap).is_err());
}
