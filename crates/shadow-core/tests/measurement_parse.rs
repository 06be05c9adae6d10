use shadow_core::{MeasurementRecord, Outcome, Pauli, QubitMeasurement, ShadowError};

#[test]
fn parses_rounds_with_signed_outcomes() {
    let record = MeasurementRecord::parse("2\nX 1 Z -1\nY +1 Y 1\n").expect("valid record");
    assert_eq!(record.system_size(), 2);
    assert_eq!(record.len(), 2);
    assert_eq!(
        &*record.rounds()[0],
        &[
            QubitMeasurement::new(Pauli::X, Outcome::Plus),
            QubitMeasurement::new(Pauli::Z, Outcome::Minus),
        ]
    );
    assert_eq!(record.rounds()[1][0].outcome.sign(), 1);
}

#[test]
fn rounds_must_cover_every_qubit() {
    let err = MeasurementRecord::parse("3\nX 1 Z -1\n").unwrap_err();
    assert_eq!(err.info().code, "malformed-measurement");
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("2"));

    let mut record = MeasurementRecord::new(2);
    let err = record
        .push_round(vec![QubitMeasurement::new(Pauli::X, Outcome::Plus)])
        .unwrap_err();
    assert_eq!(err.info().code, "malformed-measurement");
    assert!(record.is_empty());
}

#[test]
fn outcomes_other_than_plus_minus_one_are_rejected() {
    let err = MeasurementRecord::parse("1\nZ 0\n").unwrap_err();
    assert_eq!(err.info().code, "invalid-outcome");
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("2"));
}

#[test]
fn bases_other_than_xyz_are_rejected() {
    let err = MeasurementRecord::parse("1\nI 1\n").unwrap_err();
    assert_eq!(err.info().code, "invalid-basis");
}

#[test]
fn system_size_mismatch_is_reported() {
    let record = MeasurementRecord::parse("2\nX 1 X 1\n").unwrap();
    assert!(record.ensure_system_size(2).is_ok());
    match record.ensure_system_size(3).unwrap_err() {
        ShadowError::SystemSize(info) => {
            assert_eq!(info.code, "system-size-mismatch");
            assert_eq!(info.context.get("expected").map(String::as_str), Some("3"));
            assert_eq!(info.context.get("found").map(String::as_str), Some("2"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn text_rendering_parses_back() {
    let record = MeasurementRecord::parse("3\nX 1 Y -1 Z 1\nZ -1 Z -1 X 1\n").unwrap();
    assert_eq!(record.to_text(), "3\nX 1 Y -1 Z 1\nZ -1 Z -1 X 1\n");
    assert_eq!(MeasurementRecord::parse(&record.to_text()).unwrap(), record);
}
