use crate::interfaces::dirac::fcidump::Fcidump;
use crate::interfaces::dirac::{FcidumpFormatError, MissingCalculationError};

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

const SMALL_DUMP: &str = "\
 &FCI NORB=  2,NELEC=  2,MS2= 0,
  ORBSYM=1,1,
  ISYM=1,
 &END
  1.5  0  0  0  0
  0.2  1  1  0  0
  0.3  1  2  0  0
 -0.5  1  0  0  0
  0.7  2  0  0  0
  0.1  1  1  1  1
";

#[test]
fn test_fcidump_parse_record_classification() {
    let dump = Fcidump::parse(SMALL_DUMP).unwrap();
    assert_eq!(dump.core_energy, 1.5);
    assert_eq!(dump.orbital_energies.len(), 2);
    assert_eq!(dump.orbital_energies[&1], -0.5);
    assert_eq!(dump.orbital_energies[&2], 0.7);
    assert_eq!(dump.one_body.len(), 2);
    assert_eq!(dump.one_body[&(1, 1)], 0.2);
    assert_eq!(dump.one_body[&(1, 2)], 0.3);
    assert_eq!(dump.two_body.len(), 1);
    assert_eq!(dump.two_body[&(1, 1, 1, 1)], 0.1);
    assert_eq!(dump.n_spinors(), 2);
}

#[test]
fn test_fcidump_parse_classification_boundaries() {
    // Records crafted so that only the number of trailing zero indices separates the
    // classes: any zero before a non-zero index must still classify as two-electron.
    let dump = Fcidump::parse(
        " &END
  0.10  1  2  3  0
  0.20  1  0  1  1
  0.30  2  3  0  0
  0.40  3  0  0  0
",
    )
    .unwrap();
    assert_eq!(dump.two_body[&(1, 2, 3, 0)], 0.10);
    assert_eq!(dump.two_body[&(1, 0, 1, 1)], 0.20);
    assert_eq!(dump.one_body[&(2, 3)], 0.30);
    assert_eq!(dump.orbital_energies[&3], 0.40);
    assert_eq!(dump.core_energy, 0.0);
}

#[test]
fn test_fcidump_parse_duplicate_keys_last_write_wins() {
    let dump = Fcidump::parse(
        " &END
  0.1  1  2  0  0
  0.9  1  2  0  0
",
    )
    .unwrap();
    assert_eq!(dump.one_body.len(), 1);
    assert_eq!(dump.one_body[&(1, 2)], 0.9);
}

#[test]
fn test_fcidump_parse_is_idempotent() {
    let first = Fcidump::parse(SMALL_DUMP).unwrap();
    let second = Fcidump::parse(SMALL_DUMP).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fcidump_parse_skips_blank_lines() {
    let dump = Fcidump::parse(" &END\n\n  1.5  0  0  0  0\n\n").unwrap();
    assert_eq!(dump.core_energy, 1.5);
}

#[test]
fn test_fcidump_parse_empty_body() {
    let dump = Fcidump::parse(" &FCI NORB= 0,\n &END\n").unwrap();
    assert_eq!(dump, Fcidump::default());
    assert_eq!(dump.n_spinors(), 0);
}

#[test]
fn test_fcidump_parse_missing_namelist_terminator() {
    let err = Fcidump::parse("  1.5  0  0  0  0\n").unwrap_err();
    assert!(err.downcast_ref::<FcidumpFormatError>().is_some());
}

#[test]
fn test_fcidump_parse_wrong_field_count() {
    let err = Fcidump::parse(" &END\n  1.5  0  0  0\n").unwrap_err();
    assert!(err.downcast_ref::<FcidumpFormatError>().is_some());
}

#[test]
fn test_fcidump_parse_non_numeric_value() {
    let err = Fcidump::parse(" &END\n  x.y  1  1  0  0\n").unwrap_err();
    assert!(err.downcast_ref::<FcidumpFormatError>().is_some());

    let err = Fcidump::parse(" &END\n  1.5  1  -1  0  0\n").unwrap_err();
    assert!(err.downcast_ref::<FcidumpFormatError>().is_some());
}

#[test]
fn test_fcidump_dump_path() {
    assert_eq!(
        Fcidump::dump_path("H2_sto-3g_singlet", None::<&str>),
        std::path::PathBuf::from("FCIDUMP_H2_sto-3g_singlet")
    );
    assert_eq!(
        Fcidump::dump_path("H2_sto-3g_singlet", Some("data")),
        std::path::PathBuf::from("data/FCIDUMP_H2_sto-3g_singlet")
    );
}

#[test]
fn test_fcidump_from_file() {
    let path = Fcidump::dump_path("H2_sto-3g_singlet_rel", Some(format!("{ROOT}/tests")));
    let dump = Fcidump::from_file(path).unwrap();
    assert_eq!(dump.core_energy, 0.7137539936);
    assert_eq!(dump.n_spinors(), 4);
    assert_eq!(dump.one_body.len(), 4);
    assert_eq!(dump.two_body.len(), 4);
}

#[test]
fn test_fcidump_from_file_missing_is_recoverable() {
    let err = Fcidump::from_file(format!("{ROOT}/tests/FCIDUMP_nonexistent")).unwrap_err();
    // The absence of the dump must be distinguishable from a malformed dump so that
    // callers can trigger the upstream calculation and retry.
    assert!(err.downcast_ref::<MissingCalculationError>().is_some());
    assert!(err.downcast_ref::<FcidumpFormatError>().is_none());
}
