use crate::interfaces::dirac::energies::DiracEnergies;
use crate::interfaces::dirac::MissingCalculationError;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

const SMALL_OUTPUT: &str = "\
                                DIRAC output
   Electronic energy                        :     -1.850997459110
   Total energy                             :     -1.137270174625
@ Total MP2 energy :                 -1.150263279700
@ Total CCSD energy :                -1.151672544200
";

#[test]
fn test_energies_scan_all_labels() {
    let energies = DiracEnergies::scan(SMALL_OUTPUT);
    assert_eq!(energies.scf.as_deref(), Some("-1.137270174625"));
    assert_eq!(energies.mp2.as_deref(), Some("-1.150263279700"));
    assert_eq!(energies.ccsd.as_deref(), Some("-1.151672544200"));
}

#[test]
fn test_energies_scan_first_matching_line_wins() {
    let contents = "\
   Total energy                             :     -1.10
   Total energy                             :     -1.20
";
    let energies = DiracEnergies::scan(contents);
    assert_eq!(energies.scf.as_deref(), Some("-1.10"));
}

#[test]
fn test_energies_scan_absent_labels_are_none() {
    let energies = DiracEnergies::scan("nothing of interest here\n");
    assert_eq!(energies, DiracEnergies::default());

    // A similarly-worded line without the exact SCF label spacing must not match.
    let energies = DiracEnergies::scan("   Total energy : -1.0\n");
    assert!(energies.scf.is_none());
}

#[test]
fn test_energies_scan_takes_last_token() {
    let contents = "@ Total CCSD energy : converged to -1.1516\n";
    let energies = DiracEnergies::scan(contents);
    assert_eq!(energies.ccsd.as_deref(), Some("-1.1516"));
}

#[test]
fn test_energies_out_path() {
    assert_eq!(
        DiracEnergies::out_path("H2_sto-3g_singlet", None::<&str>),
        std::path::PathBuf::from("H2_sto-3g_singlet.out")
    );
    assert_eq!(
        DiracEnergies::out_path("H2_sto-3g_singlet", Some("data")),
        std::path::PathBuf::from("data/H2_sto-3g_singlet.out")
    );
}

#[test]
fn test_energies_from_file() {
    let path = DiracEnergies::out_path("H2_sto-3g_singlet_rel", Some(format!("{ROOT}/tests")));
    let energies = DiracEnergies::from_file(path).unwrap();
    assert_eq!(energies.scf.as_deref(), Some("-1.137270174625"));
    assert_eq!(energies.mp2.as_deref(), Some("-1.150263279700"));
    assert_eq!(energies.ccsd.as_deref(), Some("-1.151672544200"));
}

#[test]
fn test_energies_from_file_missing_is_recoverable() {
    let err = DiracEnergies::from_file(format!("{ROOT}/tests/nonexistent.out")).unwrap_err();
    assert!(err.downcast_ref::<MissingCalculationError>().is_some());
}
