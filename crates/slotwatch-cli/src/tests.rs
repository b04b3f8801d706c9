use super::*;

#[test]
fn parses_pin_search_with_defaults() {
    let cli = Cli::try_parse_from(["slotwatch", "--search-by", "pin", "--pin", "411001"])
        .expect("expected valid cli args");

    assert_eq!(cli.search_by, SearchMode::Pin);
    assert_eq!(cli.age, 100);
    assert_eq!(cli.search_days, 1);
    assert_eq!(cli.search_frequency, 30);
    assert!(cli.state_code.is_none());
    assert_eq!(cli.policy(), PollPolicy::UntilFound);

    let criteria = cli.criteria().expect("criteria should build");
    assert_eq!(
        criteria.locator(),
        &SearchLocator::ByPostalCode("411001".to_string())
    );
    assert_eq!(criteria.poll_interval_secs(), 1800);
}

#[test]
fn parses_district_search_with_overrides() {
    let cli = Cli::try_parse_from([
        "slotwatch",
        "--search-by",
        "district",
        "--district",
        "Pune",
        "--age",
        "45",
        "--search-days",
        "7",
        "--search-frequency",
        "5",
        "--state-code",
        "21",
        "--forever",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.state_code, Some(21));
    assert_eq!(cli.policy(), PollPolicy::Forever);
    let criteria = cli.criteria().unwrap();
    assert_eq!(criteria.locator(), &SearchLocator::ByDistrict("Pune".to_string()));
    assert_eq!(criteria.min_age(), 45);
    assert_eq!(criteria.window_days(), 7);
    assert_eq!(criteria.poll_interval_secs(), 300);
}

#[test]
fn once_flag_selects_single_cycle() {
    let cli = Cli::try_parse_from(["slotwatch", "--search-by", "pin", "--pin", "1", "--once"])
        .unwrap();
    assert_eq!(cli.policy(), PollPolicy::Once);
}

#[test]
fn once_and_forever_conflict() {
    let result = Cli::try_parse_from([
        "slotwatch",
        "--search-by",
        "pin",
        "--pin",
        "1",
        "--once",
        "--forever",
    ]);
    assert!(result.is_err());
}

#[test]
fn search_by_is_required() {
    assert!(Cli::try_parse_from(["slotwatch", "--pin", "411001"]).is_err());
}

#[test]
fn unknown_search_mode_is_rejected() {
    assert!(Cli::try_parse_from(["slotwatch", "--search-by", "state"]).is_err());
}

#[test]
fn missing_pin_is_invalid_input() {
    let cli = Cli::try_parse_from(["slotwatch", "--search-by", "pin", "--district", "Pune"])
        .expect("parsing succeeds; validation happens later");
    assert_eq!(
        cli.criteria(),
        Err(CriteriaError::MissingLocator {
            mode: SearchMode::Pin
        })
    );
}

#[test]
fn missing_district_is_invalid_input() {
    let cli = Cli::try_parse_from(["slotwatch", "--search-by", "district"]).unwrap();
    assert!(matches!(
        cli.criteria(),
        Err(CriteriaError::MissingLocator {
            mode: SearchMode::District
        })
    ));
}

#[test]
fn zero_search_days_is_invalid_input() {
    let cli = Cli::try_parse_from([
        "slotwatch",
        "--search-by",
        "pin",
        "--pin",
        "411001",
        "--search-days",
        "0",
    ])
    .unwrap();
    assert_eq!(cli.criteria(), Err(CriteriaError::ZeroWindow));
}

#[test]
fn finish_maps_terminal_states_to_exit_codes() {
    let found = SearchState::Found(Vec::new());
    let invalid = SearchState::InputInvalid(CriteriaError::ZeroWindow);
    assert_eq!(format!("{:?}", finish(&found)), format!("{:?}", ExitCode::SUCCESS));
    assert_eq!(format!("{:?}", finish(&invalid)), format!("{:?}", ExitCode::from(2)));
}
