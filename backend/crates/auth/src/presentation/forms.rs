//! Form DTOs
//!
//! Field names mirror the HTML forms exactly. The login form posts its
//! username under `email` (the field doubles as the visible label in the
//! page); the value is matched against usernames, never email addresses.

use serde::Deserialize;

/// POST /auth/ body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Username (the form input is historically named `email`)
    pub email: String,
    pub password: String,
}

/// POST /auth/register body
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub password2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_field_names() {
        let form: LoginForm =
            serde_json::from_str(r#"{"email":"alice","password":"Secret1"}"#).unwrap();
        assert_eq!(form.email, "alice");
        assert_eq!(form.password, "Secret1");
    }

    #[test]
    fn test_register_form_field_names() {
        let form: RegisterForm = serde_json::from_str(
            r#"{"email":"a@x.com","username":"alice","firstname":"Alice","lastname":"Smith","password":"s","password2":"s"}"#,
        )
        .unwrap();
        assert_eq!(form.email, "a@x.com");
        assert_eq!(form.username, "alice");
        assert_eq!(form.firstname, "Alice");
        assert_eq!(form.lastname, "Smith");
    }
}
