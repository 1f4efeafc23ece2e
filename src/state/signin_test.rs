use super::*;

// =============================================================
// Email validation
// =============================================================

#[test]
fn email_empty_is_required() {
    assert_eq!(validate_email(""), Err("Email is required"));
}

#[test]
fn email_plain_address_ok() {
    assert_eq!(validate_email("a@b.com"), Ok(()));
}

#[test]
fn email_uppercase_ok() {
    assert_eq!(validate_email("USER@EXAMPLE.COM"), Ok(()));
}

#[test]
fn email_with_dots_plus_and_subdomain_ok() {
    assert_eq!(validate_email("user.name+tag@example.co.uk"), Ok(()));
}

#[test]
fn email_without_at_rejected() {
    assert_eq!(validate_email("not-an-email"), Err("This is not a valid email"));
}

#[test]
fn email_without_tld_rejected() {
    assert_eq!(validate_email("a@b"), Err("This is not a valid email"));
}

#[test]
fn email_single_char_tld_rejected() {
    assert_eq!(validate_email("a@b.c"), Err("This is not a valid email"));
}

#[test]
fn email_numeric_tld_rejected() {
    assert_eq!(validate_email("a@b.12"), Err("This is not a valid email"));
}

#[test]
fn email_empty_local_part_rejected() {
    assert_eq!(validate_email("@b.com"), Err("This is not a valid email"));
}

#[test]
fn email_empty_domain_rejected() {
    assert_eq!(validate_email("a@.com"), Err("This is not a valid email"));
}

#[test]
fn email_with_space_rejected() {
    assert_eq!(validate_email("a b@c.com"), Err("This is not a valid email"));
}

// =============================================================
// Password validation
// =============================================================

#[test]
fn password_empty_is_required() {
    assert_eq!(validate_password(""), Err("Password is required"));
}

#[test]
fn password_five_chars_rejected_before_any_request() {
    assert_eq!(
        validate_password("short"),
        Err("Password must be minimum 8 characters")
    );
}

#[test]
fn password_seven_chars_too_short() {
    assert_eq!(
        validate_password("a".repeat(7).as_str()),
        Err("Password must be minimum 8 characters")
    );
}

#[test]
fn password_eight_chars_ok() {
    assert_eq!(validate_password("a".repeat(8).as_str()), Ok(()));
}

#[test]
fn password_twenty_chars_ok() {
    assert_eq!(validate_password("a".repeat(20).as_str()), Ok(()));
}

#[test]
fn password_twenty_one_chars_too_long() {
    assert_eq!(
        validate_password("a".repeat(21).as_str()),
        Err("Password cannot exceed more than 20 characters")
    );
}

#[test]
fn password_with_space_rejected() {
    assert_eq!(
        validate_password("pass word1"),
        Err("Password cannot contain spaces")
    );
}

#[test]
fn password_with_tab_rejected() {
    assert_eq!(
        validate_password("passw\tord1"),
        Err("Password cannot contain spaces")
    );
}

#[test]
fn password_typical_ok() {
    assert_eq!(validate_password("password1"), Ok(()));
}

// =============================================================
// Combined validation
// =============================================================

#[test]
fn validate_reports_both_fields() {
    let errors = validate(&Credentials {
        email: String::new(),
        password: "short".to_owned(),
    });
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password must be minimum 8 characters"));
    assert!(!errors.is_clear());
}

#[test]
fn validate_clear_for_good_credentials() {
    let errors = validate(&Credentials {
        email: "a@b.com".to_owned(),
        password: "password1".to_owned(),
    });
    assert_eq!(errors, FieldErrors::default());
    assert!(errors.is_clear());
}

// =============================================================
// Workflow phases
// =============================================================

#[test]
fn workflow_starts_idle() {
    let state = SignInState::default();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.error.is_none());
    assert!(!state.is_submitting());
}

#[test]
fn begin_moves_idle_to_submitting() {
    let mut state = SignInState::default();
    assert!(state.begin());
    assert_eq!(state.phase, Phase::Submitting);
    assert!(state.is_submitting());
}

#[test]
fn begin_while_submitting_is_rejected() {
    let mut state = SignInState::default();
    assert!(state.begin());
    assert!(!state.begin());
    assert_eq!(state.phase, Phase::Submitting);
}

#[test]
fn succeed_moves_submitting_to_succeeded() {
    let mut state = SignInState::default();
    state.begin();
    state.succeed();
    assert_eq!(state.phase, Phase::Succeeded);
    assert!(state.error.is_none());
}

#[test]
fn fail_records_display_message() {
    let mut state = SignInState::default();
    state.begin();
    state.fail("Invalid credentials".to_owned());
    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn resubmit_allowed_after_failure() {
    let mut state = SignInState::default();
    state.begin();
    state.fail("Invalid credentials".to_owned());
    assert!(state.begin());
    assert_eq!(state.phase, Phase::Submitting);
    assert!(state.error.is_none());
}

#[test]
fn resubmit_allowed_after_success() {
    let mut state = SignInState::default();
    state.begin();
    state.succeed();
    assert!(state.begin());
    assert_eq!(state.phase, Phase::Submitting);
}

// =============================================================
// Role routing table
// =============================================================

#[test]
fn customer_routes_to_landing_page_with_reload() {
    let target = navigation_target("CUSTOMER").unwrap();
    assert_eq!(target.path, "/user-landing-page");
    assert!(target.force_reload);
}

#[test]
fn super_admin_routes_to_product_management() {
    let target = navigation_target("SUPER_ADMIN").unwrap();
    assert_eq!(target.path, "/super/admin/products");
    assert!(!target.force_reload);
}

#[test]
fn partner_routes_to_dashboard() {
    let target = navigation_target("PARTNER").unwrap();
    assert_eq!(target.path, "/partner/dashboard");
    assert!(!target.force_reload);
}

#[test]
fn admin_routes_to_user_management() {
    let target = navigation_target("ADMIN").unwrap();
    assert_eq!(target.path, "/admin/usermanagement");
    assert!(!target.force_reload);
}

#[test]
fn unknown_roles_do_not_navigate() {
    assert!(navigation_target("GUEST").is_none());
    assert!(navigation_target("").is_none());
    // Matching is exact, including case.
    assert!(navigation_target("admin").is_none());
}
