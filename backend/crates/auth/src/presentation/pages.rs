//! HTML Pages
//!
//! Server-rendered login and registration pages. All user-influenced
//! values pass through `platform::html::escape` before interpolation.

use platform::html::escape as html_escape;

/// Render the login page
///
/// `error` re-renders after a failed attempt; `notice` carries the
/// sign-out confirmation.
pub fn render_login_page(error: Option<&str>, notice: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<div class="error">{}</div>"#, html_escape(msg)),
        None => String::new(),
    };
    let notice_html = match notice {
        Some(msg) => format!(r#"<div class="notice">{}</div>"#, html_escape(msg)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sign In - Todos</title>
    <style>
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f5f5; min-height: 100vh; display: flex; align-items: center; justify-content: center; }}
        .container {{ background: white; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); max-width: 400px; width: 100%; }}
        h1 {{ font-size: 1.5rem; margin-bottom: 1.5rem; color: #333; text-align: center; }}
        .form-group {{ margin-bottom: 1rem; }}
        label {{ display: block; margin-bottom: 0.25rem; color: #333; font-weight: 500; font-size: 0.875rem; }}
        input {{ width: 100%; padding: 0.625rem; border: 1px solid #ddd; border-radius: 4px; font-size: 1rem; }}
        input:focus {{ outline: none; border-color: #0066cc; }}
        button {{ width: 100%; padding: 0.75rem; background: #0066cc; color: white; border: none; border-radius: 4px; font-size: 1rem; cursor: pointer; margin-top: 0.5rem; }}
        button:hover {{ background: #0052a3; }}
        .error {{ background: #fee; border: 1px solid #fcc; color: #c00; padding: 0.75rem; border-radius: 4px; margin-bottom: 1rem; text-align: center; font-size: 0.875rem; }}
        .notice {{ background: #efe; border: 1px solid #cfc; color: #060; padding: 0.75rem; border-radius: 4px; margin-bottom: 1rem; text-align: center; font-size: 0.875rem; }}
        .register-link {{ text-align: center; margin-top: 1rem; font-size: 0.875rem; color: #666; }}
        .register-link a {{ color: #0066cc; text-decoration: none; }}
        .register-link a:hover {{ text-decoration: underline; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Sign In</h1>
        {notice_html}
        {error_html}
        <form method="post" action="/auth/">
            <div class="form-group">
                <label for="email">Username</label>
                <input type="text" id="email" name="email" required autocomplete="username" />
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" required autocomplete="current-password" />
            </div>
            <button type="submit">Sign In</button>
        </form>
        <p class="register-link">
            Don't have an account? <a href="/auth/register">Register</a>
        </p>
    </div>
</body>
</html>"#
    )
}

/// Render the registration page
pub fn render_register_page(error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<div class="error">{}</div>"#, html_escape(msg)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Register - Todos</title>
    <style>
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f5f5; min-height: 100vh; display: flex; align-items: center; justify-content: center; }}
        .container {{ background: white; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); max-width: 400px; width: 100%; }}
        h1 {{ font-size: 1.5rem; margin-bottom: 1.5rem; color: #333; text-align: center; }}
        .form-group {{ margin-bottom: 1rem; }}
        label {{ display: block; margin-bottom: 0.25rem; color: #333; font-weight: 500; font-size: 0.875rem; }}
        input {{ width: 100%; padding: 0.625rem; border: 1px solid #ddd; border-radius: 4px; font-size: 1rem; }}
        input:focus {{ outline: none; border-color: #0066cc; }}
        button {{ width: 100%; padding: 0.75rem; background: #0066cc; color: white; border: none; border-radius: 4px; font-size: 1rem; cursor: pointer; margin-top: 0.5rem; }}
        button:hover {{ background: #0052a3; }}
        .error {{ background: #fee; border: 1px solid #fcc; color: #c00; padding: 0.75rem; border-radius: 4px; margin-bottom: 1rem; text-align: center; font-size: 0.875rem; }}
        .login-link {{ text-align: center; margin-top: 1rem; font-size: 0.875rem; color: #666; }}
        .login-link a {{ color: #0066cc; text-decoration: none; }}
        .login-link a:hover {{ text-decoration: underline; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Register</h1>
        {error_html}
        <form method="post" action="/auth/register">
            <div class="form-group">
                <label for="email">Email</label>
                <input type="email" id="email" name="email" required autocomplete="email" />
            </div>
            <div class="form-group">
                <label for="username">Username</label>
                <input type="text" id="username" name="username" required autocomplete="username" />
            </div>
            <div class="form-group">
                <label for="firstname">First name</label>
                <input type="text" id="firstname" name="firstname" required autocomplete="given-name" />
            </div>
            <div class="form-group">
                <label for="lastname">Last name</label>
                <input type="text" id="lastname" name="lastname" required autocomplete="family-name" />
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" required autocomplete="new-password" />
            </div>
            <div class="form-group">
                <label for="password2">Confirm password</label>
                <input type="password" id="password2" name="password2" required autocomplete="new-password" />
            </div>
            <button type="submit">Register</button>
        </form>
        <p class="login-link">
            Already have an account? <a href="/auth/">Sign in</a>
        </p>
    </div>
</body>
</html>"#
    )
}
