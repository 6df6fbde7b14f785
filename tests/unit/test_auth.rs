//! Authentication service tests

use secrecy::SecretString;

use device_gateway::authn::service::AuthService;
use device_gateway::authn::users::UserStore;

fn auth_service() -> AuthService {
    AuthService::new(
        UserStore::with_demo_users(),
        SecretString::from("unit-test-signing-key"),
        3600,
    )
}

#[test]
fn test_login_issues_valid_token() {
    let auth = auth_service();

    let response = auth.authenticate("admin", "admin123").unwrap().unwrap();
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.user_name, "admin");
    assert_eq!(response.expires_in, 3600);

    let claims = auth.validate(&response.access_token).unwrap();
    assert_eq!(claims.sub, "admin");
}

#[test]
fn test_login_rejects_wrong_password() {
    let auth = auth_service();
    assert!(auth.authenticate("admin", "wrong").unwrap().is_none());
}

#[test]
fn test_login_rejects_unknown_user() {
    let auth = auth_service();
    assert!(auth.authenticate("ghost", "admin123").unwrap().is_none());
}

#[test]
fn test_validate_rejects_tampered_token() {
    let auth = auth_service();
    let response = auth.authenticate("admin", "admin123").unwrap().unwrap();

    let mut tampered = response.access_token;
    tampered.push('x');
    assert!(auth.validate(&tampered).is_err());
}
