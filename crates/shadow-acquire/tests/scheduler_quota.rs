use shadow_acquire::{derandomized_plan, random_observables, DerandomizedScheduler, SchedulerConfig};
use shadow_core::{Observable, ObservableSet, Pauli, PauliTerm, RngHandle, ShadowError};

fn single(system_size: usize, terms: &[(usize, Pauli)], weight: f64) -> ObservableSet {
    let terms = terms
        .iter()
        .map(|&(qubit, pauli)| PauliTerm::new(qubit, pauli))
        .collect();
    ObservableSet::new(system_size, vec![Observable::new(terms, weight).unwrap()]).unwrap()
}

fn letters(plan: &shadow_acquire::MeasurementPlan) -> Vec<String> {
    plan.to_text().lines().map(str::to_owned).collect()
}

fn full_matches(observable: &Observable, setting: &[Pauli]) -> bool {
    observable
        .terms()
        .iter()
        .all(|term| setting[term.qubit] == term.pauli)
}

#[test]
fn single_factor_is_measured_in_its_basis() {
    let set = single(1, &[(0, Pauli::Z)], 1.0);
    let plan = derandomized_plan(&set, 1, SchedulerConfig::default()).unwrap();
    assert_eq!(letters(&plan), vec!["Z"]);
}

#[test]
fn untouched_qubits_default_to_x() {
    let set = single(2, &[(0, Pauli::Z)], 1.0);
    let plan = derandomized_plan(&set, 1, SchedulerConfig::default()).unwrap();
    assert_eq!(letters(&plan), vec!["Z X"]);
}

#[test]
fn ties_break_towards_the_first_basis() {
    let set = ObservableSet::parse("1\n1 Z 0\n1 X 0\n").unwrap();
    let plan = derandomized_plan(&set, 1, SchedulerConfig::default()).unwrap();
    assert_eq!(letters(&plan), vec!["X", "Z"]);
}

#[test]
fn weight_scales_the_quota() {
    let set = single(1, &[(0, Pauli::Y)], 2.0);
    let plan = derandomized_plan(&set, 3, SchedulerConfig::default()).unwrap();
    assert_eq!(plan.len(), 6);
    assert!(plan.settings().iter().all(|s| s[0] == Pauli::Y));
}

#[test]
fn already_complete_sets_yield_an_empty_plan() {
    let empty = ObservableSet::new(3, Vec::new()).unwrap();
    let plan = derandomized_plan(&empty, 10, SchedulerConfig::default()).unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.system_size(), 3);

    let light = single(2, &[(1, Pauli::X)], 0.25);
    let plan = derandomized_plan(&light, 3, SchedulerConfig::default()).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn round_limit_is_reported() {
    let set = single(1, &[(0, Pauli::Z)], 1.0);
    let config = SchedulerConfig {
        max_rounds: 2,
        ..SchedulerConfig::default()
    };
    let err = derandomized_plan(&set, 5, config).expect_err("five rounds are needed");
    match err {
        ShadowError::Schedule(info) => {
            assert_eq!(info.code, "iteration-cap-exceeded");
            assert_eq!(info.context.get("rounds").map(String::as_str), Some("2"));
            assert_eq!(info.context.get("satisfied").map(String::as_str), Some("0"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let set = single(1, &[(0, Pauli::Z)], 1.0);
    let config = SchedulerConfig {
        eta: 0.0,
        ..SchedulerConfig::default()
    };
    let err = DerandomizedScheduler::new(&set, 1, config).unwrap_err();
    assert_eq!(err.info().code, "invalid-eta");
}

#[test]
fn random_two_local_sets_meet_every_quota() {
    let mut rng = RngHandle::from_seed(11);
    let set = random_observables(5, 20, 2, &mut rng).unwrap();
    let target = 10;
    let plan = derandomized_plan(&set, target, SchedulerConfig::default()).unwrap();
    assert!(!plan.is_empty());

    for observable in set.observables() {
        let hits = plan
            .settings()
            .iter()
            .filter(|setting| full_matches(observable, setting))
            .count();
        assert!(
            hits >= observable.quota(target),
            "{:?} matched {} times",
            observable.terms(),
            hits
        );
    }
}

#[test]
fn iterator_and_plan_agree() {
    let set = ObservableSet::parse("3\n2 X 0 Y 1\n2 Z 1 Z 2\n1 Y 2 1.5\n").unwrap();
    let plan = derandomized_plan(&set, 4, SchedulerConfig::default()).unwrap();
    let scheduler = DerandomizedScheduler::new(&set, 4, SchedulerConfig::default()).unwrap();
    let rounds: Vec<_> = scheduler.collect::<Result<_, _>>().unwrap();
    assert_eq!(rounds.as_slice(), plan.settings());

    let again = derandomized_plan(&set, 4, SchedulerConfig::default()).unwrap();
    assert_eq!(plan, again);
}

#[test]
fn scheduler_tracks_progress() {
    let set = ObservableSet::parse("2\n1 X 0\n1 Z 1 2\n").unwrap();
    let mut scheduler = DerandomizedScheduler::new(&set, 2, SchedulerConfig::default()).unwrap();
    assert_eq!(scheduler.quotas(), &[2, 4]);
    assert!(!scheduler.is_complete());
    while scheduler.next_round().unwrap().is_some() {}
    assert!(scheduler.is_complete());
    assert_eq!(scheduler.satisfied(), 2);
    assert_eq!(scheduler.rounds(), 4);
    assert!(scheduler.matches()[0] >= 2);
    assert_eq!(scheduler.matches()[1], 4);
    assert!(scheduler.next_round().unwrap().is_none());
}
