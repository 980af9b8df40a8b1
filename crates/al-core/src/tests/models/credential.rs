use crate::{Credential, Identity, ProfileView, SessionToken, Uid};

#[test]
fn test_credential_new_trims_both_fields() {
    let credential = Credential::new("  ann@example.com ", " secret1\n");

    assert_eq!(credential.email, "ann@example.com");
    assert_eq!(credential.password, "secret1");
}

#[test]
fn test_credential_debug_redacts_password() {
    let credential = Credential::new("ann@example.com", "secret1");

    let debug = format!("{credential:?}");

    assert!(debug.contains("ann@example.com"));
    assert!(!debug.contains("secret1"));
}

#[test]
fn test_session_token_debug_redacts_value() {
    let token = SessionToken::new("very-secret-token");

    assert_eq!(format!("{token:?}"), "SessionToken(<redacted>)");
    assert_eq!(token.expose(), "very-secret-token");
}

#[test]
fn test_fallback_view_takes_email_from_identity() {
    let identity = Identity::new(Uid::new("uid-1"), "ann@example.com");

    let view = ProfileView::fallback(&identity);

    assert_eq!(view.name, "Имя не найдено");
    assert_eq!(view.email, "ann@example.com");
}

#[test]
fn test_credential_new_keeps_no_break_space_and_strips_controls() {
    let credential = Credential::new("\u{0007}ann@example.com\u{00A0}", "\tsecret1\u{0000}");

    assert_eq!(credential.email, "ann@example.com\u{00A0}");
    assert_eq!(credential.password, "secret1");
}
