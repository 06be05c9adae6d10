use std::io::Write;

use shadow_core::{ObservableSet, Pauli, PauliTerm, ShadowError};

const SAMPLE: &str = "4\n2 X 0 Z 1\n1 Y 3 2.5\n\n3 Z 0 Z 2 X 3\n";

#[test]
fn parses_header_terms_and_weights() {
    let set = ObservableSet::parse(SAMPLE).expect("valid observables");
    assert_eq!(set.system_size(), 4);
    assert_eq!(set.len(), 3);
    assert_eq!(set.max_locality(), 3);

    let first = &set.observables()[0];
    assert_eq!(
        first.terms(),
        &[PauliTerm::new(0, Pauli::X), PauliTerm::new(1, Pauli::Z)]
    );
    assert_eq!(first.weight(), 1.0);
    assert_eq!(set.observables()[1].weight(), 2.5);
    assert_eq!(set.observables()[1].quota(10), 25);
}

#[test]
fn inverted_index_lists_each_factor_once() {
    let set = ObservableSet::parse(SAMPLE).unwrap();
    let index = set.index();
    assert_eq!(index.num_qubits(), 4);
    assert_eq!(index.acting_on(0, Pauli::X), &[0]);
    assert_eq!(index.acting_on(0, Pauli::Z), &[2]);
    assert_eq!(index.acting_on(3, Pauli::X), &[2]);
    assert_eq!(index.acting_on(3, Pauli::Y), &[1]);
    assert!(index.acting_on(1, Pauli::X).is_empty());
    assert!(index.acting_on(17, Pauli::Z).is_empty());
}

#[test]
fn invalid_basis_is_malformed_observable() {
    let err = ObservableSet::parse("2\n1 W 0\n").expect_err("W is not a Pauli basis");
    match err {
        ShadowError::Parse(info) => {
            assert_eq!(info.code, "malformed-observable");
            assert_eq!(info.context.get("line").map(String::as_str), Some("2"));
            assert_eq!(info.context.get("token").map(String::as_str), Some("W"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn token_count_must_match_locality() {
    let err = ObservableSet::parse("3\n2 X 0 Z\n").unwrap_err();
    assert_eq!(err.info().code, "malformed-observable");
    let err = ObservableSet::parse("3\n1 X 0 1.0 7\n").unwrap_err();
    assert_eq!(err.info().code, "malformed-observable");
}

#[test]
fn non_positive_weights_are_rejected() {
    for text in ["2\n1 X 0 0\n", "2\n1 X 0 -1.5\n", "2\n1 X 0 NaN\n"] {
        let err = ObservableSet::parse(text).unwrap_err();
        assert_eq!(err.info().code, "invalid-weight", "input {text:?}");
    }
}

#[test]
fn qubits_must_lie_inside_the_system() {
    let err = ObservableSet::parse("2\n1 X 2\n").unwrap_err();
    assert_eq!(err.info().code, "qubit-out-of-range");
}

#[test]
fn missing_header_is_reported() {
    assert_eq!(
        ObservableSet::parse("").unwrap_err().info().code,
        "missing-header"
    );
    assert_eq!(
        ObservableSet::parse("two\n1 X 0\n").unwrap_err().info().code,
        "missing-header"
    );
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    match ObservableSet::load(&path).unwrap_err() {
        ShadowError::Io(info) => {
            assert_eq!(info.code, "file-not-found");
            assert!(info.context.contains_key("path"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn load_reads_file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    let set = ObservableSet::load(file.path()).unwrap();
    assert_eq!(set.len(), 3);
}

#[test]
fn text_rendering_parses_back() {
    let set = ObservableSet::parse(SAMPLE).unwrap();
    let again = ObservableSet::parse(&set.to_text()).unwrap();
    assert_eq!(set.observables(), again.observables());
    assert_eq!(set.system_size(), again.system_size());
}
