//! Behavior tests for the full option surface.
//!
//! Everything runs against `MemoryEngine`, whose call log makes "the engine
//! was never invoked" observable.

use tidyopt::{
    AccessLevel, AutoBool, AutoBoolOption, BoolOption, DuplicateAttrs, Encoding, EnumIntOption,
    Error, IntOption, MemoryEngine, Newline, OptionId, StringOption, Tidy,
};

fn fresh() -> Tidy<MemoryEngine> {
    Tidy::new(MemoryEngine::new())
}

#[test]
fn test_out_of_domain_values_never_reach_the_engine() {
    let mut tidy = fresh();

    for code in [3u64, 4, 100, u64::MAX] {
        let err = tidy
            .set_auto_bool_code(AutoBoolOption::ShowBodyOnly, code)
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }
    for code in [14u64, 200] {
        let err = tidy
            .set_enum_int(EnumIntOption::CharEncoding, code)
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    assert_eq!(tidy.engine().call_count(), 0);
}

#[test]
fn test_no_op_sets_report_unchanged() {
    let mut tidy = fresh();

    assert!(tidy.set_bool(BoolOption::Word2000, true).unwrap());
    assert!(!tidy.set_bool(BoolOption::Word2000, true).unwrap());
    assert!(tidy.set_bool(BoolOption::Word2000, false).unwrap());

    // Setting an option to the engine default is a successful no-op.
    assert!(!tidy.set_bool(BoolOption::Quiet, false).unwrap());

    assert!(tidy.set_int(IntOption::IndentSpaces, 2).unwrap());
    assert!(!tidy.set_int(IntOption::IndentSpaces, 2).unwrap());

    assert!(tidy.set_string(StringOption::CssPrefix, "c").unwrap());
    assert!(!tidy.set_string(StringOption::CssPrefix, "c").unwrap());
}

#[test]
fn test_tri_state_values_round_trip_through_the_engine() {
    let mut tidy = fresh();

    tidy.set_auto_bool(AutoBoolOption::MergeDivs, AutoBool::Auto)
        .unwrap();
    assert_eq!(tidy.engine().int_value(OptionId::MergeDivs), 2);

    tidy.set_auto_bool(AutoBoolOption::MergeDivs, AutoBool::Yes)
        .unwrap();
    assert_eq!(tidy.engine().int_value(OptionId::MergeDivs), 1);

    tidy.set_auto_bool(AutoBoolOption::MergeDivs, AutoBool::No)
        .unwrap();
    assert_eq!(tidy.engine().int_value(OptionId::MergeDivs), 0);
}

#[test]
fn test_rejection_surfaces_the_engine_diagnostic_verbatim() {
    let diagnostic = "Option 'output-xhtml' conflicts with 'output-xml'";
    let engine = MemoryEngine::new().reject_with(BoolOption::OutputXhtml, diagnostic);
    let mut tidy = Tidy::new(engine);

    let err = tidy.set_bool(BoolOption::OutputXhtml, true).unwrap_err();
    match err {
        Error::EngineRejected {
            option,
            diagnostic: text,
        } => {
            assert_eq!(option, "output-xhtml");
            assert_eq!(text.as_deref(), Some(diagnostic));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejection_without_diagnostic_is_still_a_failure() {
    let engine = MemoryEngine::new().reject_silently(IntOption::Wrap);
    let mut tidy = Tidy::new(engine);

    let err = tidy.set_int(IntOption::Wrap, 72).unwrap_err();
    match err {
        Error::EngineRejected { option, diagnostic } => {
            assert_eq!(option, "wrap");
            assert_eq!(diagnostic, None);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_string_sets_apply_on_success_and_skip_the_engine_on_marshal_failure() {
    let mut tidy = fresh();

    assert!(tidy
        .set_string(StringOption::Doctype, "-//ACME//DTD HTML 3.14159//EN")
        .unwrap());
    assert_eq!(
        tidy.engine().text_value(OptionId::Doctype),
        "-//ACME//DTD HTML 3.14159//EN"
    );
    assert_eq!(tidy.engine().call_count(), 1);

    let err = tidy
        .set_string(StringOption::AltText, "figure\0caption")
        .unwrap_err();
    assert!(matches!(err, Error::Marshal { option: "alt-text", .. }));
    // The failed marshal never produced an engine call.
    assert_eq!(tidy.engine().call_count(), 1);
}

#[test]
fn test_string_set_failure_paths_release_cleanly() {
    // Success, engine rejection and repeat calls all funnel the marshaled
    // buffer through the same scope; nothing is retained between calls.
    let engine = MemoryEngine::new().reject_with(StringOption::ErrorFile, "cannot open file");
    let mut tidy = Tidy::new(engine);

    assert!(tidy.set_string(StringOption::OutputFile, "out.html").unwrap());
    assert!(tidy.set_string(StringOption::ErrorFile, "errs.txt").is_err());
    assert!(!tidy.set_string(StringOption::OutputFile, "out.html").unwrap());
}

#[test]
fn test_every_enumeration_member_is_accepted_and_neighbors_are_rejected() {
    let mut tidy = fresh();

    for &code in Encoding::CODES {
        tidy.set_enum_int(EnumIntOption::InputEncoding, code).unwrap();
    }
    assert!(tidy
        .set_enum_int(EnumIntOption::InputEncoding, 14)
        .is_err());

    for &code in AccessLevel::CODES {
        tidy.set_enum_int(EnumIntOption::AccessibilityCheck, code)
            .unwrap();
    }
    assert!(tidy
        .set_enum_int(EnumIntOption::AccessibilityCheck, 4)
        .is_err());

    for &code in Newline::CODES {
        tidy.set_enum_int(EnumIntOption::Newline, code).unwrap();
    }
    assert!(tidy.set_enum_int(EnumIntOption::Newline, 3).is_err());

    for &code in DuplicateAttrs::CODES {
        tidy.set_enum_int(EnumIntOption::RepeatedAttributes, code)
            .unwrap();
    }
    assert!(tidy
        .set_enum_int(EnumIntOption::RepeatedAttributes, 2)
        .is_err());

    for &code in AutoBool::CODES {
        tidy.set_auto_bool_code(AutoBoolOption::OutputBom, code)
            .unwrap();
    }
    assert!(tidy.set_auto_bool_code(AutoBoolOption::OutputBom, 3).is_err());
}

#[test]
fn test_accessibility_check_scenario() {
    let mut tidy = fresh();

    let err = tidy
        .set_enum_int(EnumIntOption::AccessibilityCheck, 4)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "value 4 for option `accessibility-check` is out of range (valid: {0, 1, 2, 3})"
    );
    assert_eq!(tidy.engine().call_count(), 0);

    assert!(tidy
        .set_enum_int(EnumIntOption::AccessibilityCheck, 2)
        .unwrap());
    assert!(!tidy
        .set_enum_int(EnumIntOption::AccessibilityCheck, 2)
        .unwrap());
}

#[test]
fn test_typed_setters_encode_the_documented_codes() {
    let mut tidy = fresh();

    tidy.set_accessibility_check(AccessLevel::Priority3).unwrap();
    assert_eq!(tidy.engine().int_value(OptionId::AccessibilityCheckLevel), 3);

    tidy.set_input_encoding(Encoding::ShiftJis).unwrap();
    assert_eq!(tidy.engine().int_value(OptionId::InCharEncoding), 13);

    tidy.set_char_encoding(Encoding::Raw).unwrap();
    assert_eq!(tidy.engine().int_value(OptionId::CharEncoding), 0);

    tidy.set_newline(Newline::Cr).unwrap();
    assert_eq!(tidy.engine().int_value(OptionId::Newline), 2);

    tidy.set_newline(Newline::platform()).unwrap();
    assert_eq!(
        tidy.engine().int_value(OptionId::Newline),
        Newline::platform().code()
    );
}

#[test]
fn test_failed_option_does_not_disturb_previous_ones() {
    let engine = MemoryEngine::new().reject_with(BoolOption::WriteBack, "refused");
    let mut tidy = Tidy::new(engine);

    tidy.set_bool(BoolOption::Quiet, true).unwrap();
    tidy.set_int(IntOption::TabSize, 8).unwrap();
    assert!(tidy.set_bool(BoolOption::WriteBack, true).is_err());

    assert!(tidy.engine().bool_value(BoolOption::Quiet));
    assert_eq!(tidy.engine().int_value(OptionId::TabSize), 8);
    assert!(!tidy.engine().bool_value(BoolOption::WriteBack));
}
