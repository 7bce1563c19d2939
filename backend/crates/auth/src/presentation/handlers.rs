//! HTTP Handlers
//!
//! Browser-flow handlers: successful actions answer with 302 redirects,
//! user mistakes re-render the form with a message, and only
//! infrastructure failures propagate as error responses.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    AuthConfig, ResolveSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput,
    SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::forms::{LoginForm, RegisterForm};
use crate::presentation::pages::{render_login_page, render_register_page};

const SIGNED_OUT_NOTICE: &str = "You have been signed out.";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Query parameters for GET /auth/
#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
    /// Set by the sign-out redirect to show the confirmation notice
    pub signed_out: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// GET /auth/
pub async fn login_page<R>(
    State(_state): State<AuthAppState<R>>,
    Query(query): Query<LoginPageQuery>,
) -> Html<String>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let notice = query.signed_out.as_deref().map(|_| SIGNED_OUT_NOTICE);
    Html(render_login_page(None, notice))
}

/// POST /auth/
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    // The form's `email` field carries the username
    let input = SignInInput {
        username: form.email,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = state.config.cookie_config().build_set_cookie(&output.token);
            (
                StatusCode::FOUND,
                [(header::SET_COOKIE, cookie), (header::LOCATION, "/todos/".to_string())],
            )
                .into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Invalid login attempt");
            Html(render_login_page(Some("Incorrect username or password."), None)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Registration
// ============================================================================

/// GET /auth/register
pub async fn register_page<R>(State(_state): State<AuthAppState<R>>) -> Html<String>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Html(render_register_page(None))
}

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: form.email,
        username: form.username,
        first_name: form.firstname,
        last_name: form.lastname,
        password: form.password,
        password_confirmation: form.password2,
    };

    match use_case.execute(input).await {
        // Registration never signs the user in; send them to the login page
        Ok(_) => (
            StatusCode::FOUND,
            [(header::LOCATION, "/auth/")],
        )
            .into_response(),
        Err(err) => match register_error_message(&err) {
            Some(message) => Html(render_register_page(Some(&message))).into_response(),
            None => err.into_response(),
        },
    }
}

/// Map a registration failure to the message shown on the re-rendered form
///
/// Infrastructure failures return `None` and propagate as error responses.
fn register_error_message(err: &AuthError) -> Option<String> {
    match err {
        AuthError::PasswordMismatch => Some("Passwords do not match.".to_string()),
        AuthError::DuplicateUser => Some("Username or email is already registered.".to_string()),
        AuthError::Validation(msg) | AuthError::PasswordValidation(msg) => Some(msg.clone()),
        _ => None,
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /auth/logout
///
/// Clears the cookie unconditionally; an invalid or absent session is
/// not an error.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let session = ResolveSessionUseCase::new(state.config.clone()).resolve(&headers);
    SignOutUseCase::new().execute(&session);

    let cookie = state.config.cookie_config().build_delete_cookie();

    (
        StatusCode::FOUND,
        [
            (header::SET_COOKIE, cookie),
            (header::LOCATION, "/auth/?signed_out=1".to_string()),
        ],
    )
}
