use super::*;
use crate::net::types::Role;

#[test]
fn endpoints_append_auth_paths() {
    assert_eq!(login_endpoint("https://api.example.org/api"), "https://api.example.org/api/auth/login");
    assert_eq!(register_endpoint("/api"), "/api/auth/register");
}

#[test]
fn rejection_uses_string_detail() {
    assert_eq!(
        rejection_from_body(401, r#"{"detail":"Invalid email or password"}"#),
        ApiError::Rejected { status: 401, detail: Some("Invalid email or password".to_owned()) }
    );
}

#[test]
fn rejection_without_usable_detail() {
    assert_eq!(rejection_from_body(500, "<html>oops</html>"), ApiError::Rejected { status: 500, detail: None });
    assert_eq!(
        rejection_from_body(422, r#"{"detail":[{"msg":"field required"}]}"#),
        ApiError::Rejected { status: 422, detail: None }
    );
}

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::Rejected { status: 400, detail: Some("Email already registered".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[test]
fn user_message_falls_back_for_other_failures() {
    let rejected = ApiError::Rejected { status: 401, detail: None };
    assert_eq!(rejected.user_message("Invalid credentials"), "Invalid credentials");
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Invalid credentials"), "Invalid credentials");
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message("Registration failed"), "Registration failed");
}

#[test]
fn http_api_is_unavailable_outside_the_browser() {
    let api = HttpAuthApi::new("/api");
    assert_eq!(api.base_url(), "/api");
    let login = futures::executor::block_on(api.login(&LoginRequest {
        email: "a@b.org".to_owned(),
        password: "secret".to_owned(),
    }));
    assert_eq!(login, Err(ApiError::Unavailable));
    let register = futures::executor::block_on(api.register(&RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.org".to_owned(),
        password: "secret".to_owned(),
        role: Role::Donor,
    }));
    assert_eq!(register, Err(ApiError::Unavailable));
}
