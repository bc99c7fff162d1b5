use super::*;

#[test]
fn test_calc_error_construction() {
    let err = CalcError::config("Configuration file not found");
    assert!(matches!(err, CalcError::Config { .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.code(), ErrorCode::CONFIG_GENERIC);

    let err = CalcError::input("Bad age");
    assert!(matches!(err, CalcError::Input { .. }));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(err.code(), ErrorCode::INPUT_GENERIC);

    let err = CalcError::batch("Bad file");
    assert!(matches!(err, CalcError::Batch { .. }));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(err.code(), ErrorCode::BATCH_GENERIC);

    let err = CalcError::other("Unknown error");
    assert!(matches!(err, CalcError::Other { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.code(), ErrorCode::OTHER_GENERIC);
}

#[test]
fn test_error_display_includes_code() {
    let err = CalcError::config_with_code(ErrorCode::CONFIG_NOT_FOUND, "missing", None);
    assert_eq!(err.to_string(), "[E1001] Configuration error: missing");
}

#[test]
fn test_error_with_context() {
    let err = CalcError::config("Config error").with_context("reading premium.toml");
    assert!(err.to_string().contains("Config error: reading premium.toml"));
}

#[test]
fn test_with_row_only_applies_to_batch() {
    let err = CalcError::batch("bad row").with_row(3);
    assert!(matches!(err, CalcError::Batch { row: Some(3), .. }));
    assert!(err.user_message().contains("at row 3"));

    let err = CalcError::input("bad").with_row(3);
    assert!(matches!(err, CalcError::Input { .. }));
}

#[test]
fn test_developer_message_includes_source_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let err = CalcError::batch("Could not read").with_source(io);
    let msg = err.developer_message();

    assert!(msg.contains("[E4000]"));
    assert!(msg.contains("Generic batch error"));
    assert!(msg.contains("caused by: disk on fire"));
}

#[test]
fn test_user_messages() {
    let err = CalcError::config_with_code(
        ErrorCode::CONFIG_INVALID_VALUE,
        "max_age below min_age",
        Some(PathBuf::from("premium.toml")),
    );
    assert_eq!(
        err.user_message(),
        "Configuration problem in premium.toml: max_age below min_age"
    );

    let err = CalcError::batch_with_code(
        ErrorCode::BATCH_ROW_FAILED,
        "invalid gender",
        Some(PathBuf::from("people.csv")),
    )
    .with_row(2);
    assert_eq!(
        err.user_message(),
        "Batch error in 'people.csv' at row 2: invalid gender"
    );
}

#[test]
fn test_premium_error_codes() {
    let err = PremiumError::InvalidGender("other".into());
    assert_eq!(err.code(), ErrorCode::INPUT_INVALID_GENDER);
    assert_eq!(err.field(), InputField::Gender);

    let err = PremiumError::invalid_input(InputField::Age, "abc", InputProblem::NotAWholeNumber);
    assert_eq!(err.code(), ErrorCode::INPUT_INVALID_AGE);
    assert_eq!(err.to_string(), "Invalid age 'abc': must be a non-negative whole number");

    let err = PremiumError::invalid_input(
        InputField::Age,
        "200",
        InputProblem::OutOfBounds { min: 0, max: 150 },
    );
    assert_eq!(err.code(), ErrorCode::INPUT_AGE_OUT_OF_BOUNDS);

    let err = PremiumError::invalid_input(InputField::Coverage, "-1", InputProblem::Negative);
    assert_eq!(err.code(), ErrorCode::INPUT_INVALID_COVERAGE);
}

#[test]
fn test_invalid_input_carries_typed_problem() {
    let err = PremiumError::invalid_input(InputField::Coverage, "inf", InputProblem::NotFinite);
    match &err {
        PremiumError::InvalidInput {
            field,
            value,
            problem,
        } => {
            assert_eq!(*field, InputField::Coverage);
            assert_eq!(value, "inf");
            assert_eq!(*problem, InputProblem::NotFinite);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "Invalid coverage 'inf': must be a finite amount");

    assert_eq!(InputProblem::NotANumber.to_string(), "not a number");
    assert_eq!(InputProblem::Negative.to_string(), "must not be negative");
    assert_eq!(
        InputProblem::OutOfBounds { min: 18, max: 99 }.to_string(),
        "must be between 18 and 99"
    );
}

#[test]
fn test_premium_error_converts_to_input_error() {
    let err: CalcError = PremiumError::InvalidGender("robot".into()).into();
    assert_eq!(err.exit_code(), 3);
    assert_eq!(err.code(), ErrorCode::INPUT_INVALID_GENDER);
    assert!(matches!(err, CalcError::Input { field: Some(ref f), .. } if f == "gender"));
}

#[test]
fn test_input_errors_conversion() {
    let single = InputErrors(vec![PremiumError::invalid_input(
        InputField::Coverage,
        "x",
        InputProblem::NotANumber,
    )]);
    let err: CalcError = single.into();
    assert_eq!(err.code(), ErrorCode::INPUT_INVALID_COVERAGE);

    let many = InputErrors(vec![
        PremiumError::invalid_input(InputField::Age, "x", InputProblem::NotAWholeNumber),
        PremiumError::InvalidGender("x".into()),
    ]);
    assert_eq!(
        many.to_string(),
        "2 invalid inputs:\n  - Invalid age 'x': must be a non-negative whole number\n  - Invalid gender 'x': expected 'male' or 'female'"
    );
    let err: CalcError = many.into();
    assert_eq!(err.code(), ErrorCode::INPUT_MULTIPLE);
}

#[test]
fn test_io_error_conversion() {
    let err: CalcError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert_eq!(err.code(), ErrorCode::BATCH_FILE_NOT_FOUND);
    assert_eq!(err.exit_code(), 4);

    let err: CalcError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no").into();
    assert_eq!(err.code(), ErrorCode::BATCH_IO_ERROR);
}

#[test]
fn test_toml_error_conversion() {
    let parse_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
    let err: CalcError = parse_err.into();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);
    assert_eq!(err.exit_code(), 2);
}
