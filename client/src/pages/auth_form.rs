//! Sign-in / sign-up form rules and submit flows for the auth page.
//!
//! DESIGN
//! ======
//! Validation runs before any request, so a rejected form never reaches the
//! network. The flows are generic over [`AuthApi`] and report busy state
//! through a callback: `true` just before the request, `false` once it
//! settles, whatever the outcome.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::api::AuthApi;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, Role};
use crate::routes::AppRoute;

pub(crate) const MIN_PASSWORD_CHARS: usize = 6;

pub(crate) const MSG_SIGN_IN_MISSING: &str = "Please fill all fields";
pub(crate) const MSG_SIGN_UP_MISSING: &str = "Please fill all required fields";
pub(crate) const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub(crate) const MSG_PASSWORD_SHORT: &str = "Password must be at least 6 characters";
pub(crate) const MSG_ROLE_NOT_ALLOWED: &str = "Please choose a valid role";
pub(crate) const MSG_SIGN_IN_FAILED: &str = "Invalid credentials";
pub(crate) const MSG_SIGN_UP_FAILED: &str = "Registration failed";
pub(crate) const MSG_SIGNED_IN: &str = "Welcome back!";
pub(crate) const MSG_SIGNED_UP: &str = "Account created successfully!";

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Donor,
        }
    }
}

/// Result of a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    /// Rejected before any request was made.
    Invalid(&'static str),
    /// The request failed; message is ready to display.
    Failed(String),
    /// Signed in or registered; the caller stores the session and navigates.
    Authenticated { response: AuthResponse, destination: AppRoute, notice: &'static str },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse the role picker value; only self-assignable roles are accepted.
pub(crate) fn parse_sign_up_role(raw: &str) -> Option<Role> {
    raw.parse::<Role>().ok().filter(|role| role.is_self_assignable())
}

/// # Errors
///
/// Returns the message to show when email or password is blank.
pub(crate) fn validate_sign_in(form: &SignInForm) -> Result<LoginRequest, &'static str> {
    if is_blank(&form.email) || form.password.is_empty() {
        return Err(MSG_SIGN_IN_MISSING);
    }
    Ok(LoginRequest { email: form.email.trim().to_owned(), password: form.password.clone() })
}

/// # Errors
///
/// Returns the first failing rule: required fields, matching passwords,
/// minimum length, then role.
pub(crate) fn validate_sign_up(form: &SignUpForm) -> Result<RegisterRequest, &'static str> {
    if is_blank(&form.full_name) || is_blank(&form.email) || form.password.is_empty() {
        return Err(MSG_SIGN_UP_MISSING);
    }
    if form.password != form.confirm_password {
        return Err(MSG_PASSWORD_MISMATCH);
    }
    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(MSG_PASSWORD_SHORT);
    }
    if !form.role.is_self_assignable() {
        return Err(MSG_ROLE_NOT_ALLOWED);
    }
    Ok(RegisterRequest {
        name: form.full_name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        role: form.role,
    })
}

pub(crate) async fn submit_sign_in<A: AuthApi>(api: &A, form: &SignInForm, set_busy: &dyn Fn(bool)) -> SubmitOutcome {
    let request = match validate_sign_in(form) {
        Ok(request) => request,
        Err(message) => return SubmitOutcome::Invalid(message),
    };
    set_busy(true);
    let result = api.login(&request).await;
    set_busy(false);
    match result {
        Ok(response) => {
            let destination = AppRoute::dashboard_for(response.user.role);
            SubmitOutcome::Authenticated { response, destination, notice: MSG_SIGNED_IN }
        }
        Err(e) => SubmitOutcome::Failed(e.user_message(MSG_SIGN_IN_FAILED)),
    }
}

pub(crate) async fn submit_sign_up<A: AuthApi>(api: &A, form: &SignUpForm, set_busy: &dyn Fn(bool)) -> SubmitOutcome {
    let request = match validate_sign_up(form) {
        Ok(request) => request,
        Err(message) => return SubmitOutcome::Invalid(message),
    };
    set_busy(true);
    let result = api.register(&request).await;
    set_busy(false);
    match result {
        Ok(response) => SubmitOutcome::Authenticated {
            response,
            destination: AppRoute::VerifyPhone,
            notice: MSG_SIGNED_UP,
        },
        Err(e) => SubmitOutcome::Failed(e.user_message(MSG_SIGN_UP_FAILED)),
    }
}
