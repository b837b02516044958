use inkblog_core::{must_match, FieldFailure, RegisterField, RegisterForm, SubmitOutcome};

fn filled_valid_form() -> RegisterForm {
    let mut form = RegisterForm::new();
    form.set_value(RegisterField::Username, "newwriter");
    form.set_value(RegisterField::Email, "writer@example.com");
    form.set_value(RegisterField::Password, "password1");
    form.set_value(RegisterField::ConfirmPassword, "password1");
    form
}

#[test]
fn username_length_window_is_six_to_twenty() {
    let mut form = RegisterForm::new();

    form.set_value(RegisterField::Username, "abc");
    assert_eq!(
        form.field_failures(RegisterField::Username),
        vec![FieldFailure::TooShort { min: 6, actual: 3 }]
    );

    form.set_value(RegisterField::Username, "abcdef");
    assert!(form.field_failures(RegisterField::Username).is_empty());

    form.set_value(RegisterField::Username, "a".repeat(21));
    assert!(matches!(
        form.field_failures(RegisterField::Username).as_slice(),
        [FieldFailure::TooLong { max: 20, .. }]
    ));
}

#[test]
fn password_requires_at_least_eight_characters() {
    let mut form = RegisterForm::new();

    form.set_value(RegisterField::Password, "p1");
    assert_eq!(
        form.field_failures(RegisterField::Password),
        vec![FieldFailure::TooShort { min: 8, actual: 2 }]
    );

    form.set_value(RegisterField::Password, "password1");
    assert!(form.field_failures(RegisterField::Password).is_empty());
}

#[test]
fn empty_required_fields_report_only_the_required_failure() {
    let form = RegisterForm::new();
    for field in [
        RegisterField::Username,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ] {
        assert_eq!(form.field_failures(field), vec![FieldFailure::Required]);
    }
}

#[test]
fn invitation_code_is_unconstrained() {
    let mut form = RegisterForm::new();
    assert!(form.field_failures(RegisterField::InvitationCode).is_empty());
    form.set_value(RegisterField::InvitationCode, "anything at all");
    assert!(form.field_failures(RegisterField::InvitationCode).is_empty());
}

#[test]
fn email_must_be_well_formed_when_present() {
    let mut form = RegisterForm::new();

    form.set_value(RegisterField::Email, "not-an-email");
    assert_eq!(
        form.field_failures(RegisterField::Email),
        vec![FieldFailure::InvalidEmail]
    );

    form.set_value(RegisterField::Email, "writer@example.com");
    assert!(form.field_failures(RegisterField::Email).is_empty());
}

#[test]
fn must_match_passes_on_equal_values_and_fails_on_unequal() {
    assert_eq!(must_match("secret", "secret", &[]), None);
    assert_eq!(
        must_match("secret", "other", &[]),
        Some(FieldFailure::FieldsMustMatch)
    );
}

#[test]
fn must_match_passes_when_first_field_is_empty() {
    // Documented asymmetry: the rule waits until both fields are populated,
    // so an empty value with a non-empty confirmation passes silently.
    assert_eq!(must_match("", "nonempty", &[]), None);
}

#[test]
fn must_match_defers_to_more_specific_confirmation_failures() {
    assert_eq!(
        must_match("secret", "", &[FieldFailure::Required]),
        None
    );
}

#[test]
fn mismatch_surfaces_on_the_confirmation_field() {
    let mut form = filled_valid_form();
    form.set_value(RegisterField::ConfirmPassword, "different1");

    assert!(form.field_failures(RegisterField::ConfirmPassword).is_empty());
    assert_eq!(
        form.visible_failures(RegisterField::ConfirmPassword),
        vec![FieldFailure::FieldsMustMatch]
    );
    assert!(!form.is_valid());
}

#[test]
fn valid_submit_is_accepted_without_side_effects() {
    let mut form = filled_valid_form();
    assert!(form.is_valid());
    assert_eq!(form.submit(), SubmitOutcome::Accepted);
    // Submit does not touch fields on the accepted path.
    assert!(!form.is_touched(RegisterField::Username));
}

#[test]
fn invalid_submit_marks_every_field_touched() {
    let mut form = RegisterForm::new();
    form.set_value(RegisterField::Username, "abc");

    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    for field in RegisterField::ALL {
        assert!(form.is_touched(field), "{} must be touched", field.as_str());
    }
}

#[test]
fn keystrokes_reevaluate_validity() {
    let mut form = filled_valid_form();
    assert!(form.is_valid());

    form.set_value(RegisterField::Password, "p1");
    assert!(!form.is_valid());

    form.set_value(RegisterField::Password, "password1");
    assert!(form.is_valid());
}
