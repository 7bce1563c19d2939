//! HTML Pages
//!
//! Server-rendered todo list and form pages. All user-influenced values
//! pass through `platform::html::escape` before interpolation.

use platform::html::escape as html_escape;

use crate::domain::entities::Todo;
use crate::domain::value_objects::Priority;

const PAGE_STYLE: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f5f5; min-height: 100vh; padding: 2rem 1rem; }
        .container { background: white; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); max-width: 640px; margin: 0 auto; }
        h1 { font-size: 1.5rem; margin-bottom: 1.5rem; color: #333; }
        .topbar { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 1rem; }
        .topbar a { color: #0066cc; text-decoration: none; font-size: 0.875rem; }
        .topbar a:hover { text-decoration: underline; }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #eee; font-size: 0.9rem; color: #333; }
        .done { text-decoration: line-through; color: #999; }
        .actions a { color: #0066cc; text-decoration: none; margin-right: 0.5rem; font-size: 0.875rem; }
        .actions a:hover { text-decoration: underline; }
        .empty { color: #666; font-size: 0.9rem; padding: 1rem 0; }
        .form-group { margin-bottom: 1rem; }
        label { display: block; margin-bottom: 0.25rem; color: #333; font-weight: 500; font-size: 0.875rem; }
        input, textarea, select { width: 100%; padding: 0.625rem; border: 1px solid #ddd; border-radius: 4px; font-size: 1rem; }
        input:focus, textarea:focus, select:focus { outline: none; border-color: #0066cc; }
        button { width: 100%; padding: 0.75rem; background: #0066cc; color: white; border: none; border-radius: 4px; font-size: 1rem; cursor: pointer; margin-top: 0.5rem; }
        button:hover { background: #0052a3; }
        .error { background: #fee; border: 1px solid #fcc; color: #c00; padding: 0.75rem; border-radius: 4px; margin-bottom: 1rem; text-align: center; font-size: 0.875rem; }
"#;

/// Render the todo list page
pub fn render_list_page(username: &str, todos: &[Todo]) -> String {
    let body = if todos.is_empty() {
        r#"<p class="empty">Nothing to do yet.</p>"#.to_string()
    } else {
        let rows = todos
            .iter()
            .map(|todo| {
                let title_class = if todo.complete { r#" class="done""# } else { "" };
                let status = if todo.complete { "Done" } else { "Open" };
                format!(
                    r#"            <tr>
                <td{title_class}>{title}</td>
                <td>{priority}</td>
                <td>{status}</td>
                <td class="actions">
                    <a href="/todos/edit-todo/{id}">Edit</a>
                    <a href="/todos/complete/{id}">{toggle}</a>
                    <a href="/todos/delete/{id}">Delete</a>
                </td>
            </tr>"#,
                    title = html_escape(todo.title.as_str()),
                    priority = todo.priority.level(),
                    id = todo.id.as_i64(),
                    toggle = if todo.complete { "Reopen" } else { "Complete" },
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<table>
            <tr><th>Title</th><th>Priority</th><th>Status</th><th></th></tr>
{rows}
        </table>"#
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Todos</title>
    <style>{PAGE_STYLE}</style>
</head>
<body>
    <div class="container">
        <div class="topbar">
            <h1>Todos for {username}</h1>
            <span><a href="/todos/add-todo">Add todo</a> | <a href="/auth/logout">Sign out</a></span>
        </div>
        {body}
    </div>
</body>
</html>"#,
        username = html_escape(username),
    )
}

/// Render the add-todo form
pub fn render_add_page(error: Option<&str>) -> String {
    render_form_page("Add Todo", "/todos/add-todo", "", "", None, error)
}

/// Render the edit-todo form with the current (or re-submitted) values
pub fn render_edit_page(
    id: i64,
    title: &str,
    description: &str,
    priority: Option<i16>,
    error: Option<&str>,
) -> String {
    render_form_page(
        "Edit Todo",
        &format!("/todos/edit-todo/{id}"),
        title,
        description,
        priority,
        error,
    )
}

fn render_form_page(
    heading: &str,
    action: &str,
    title: &str,
    description: &str,
    priority: Option<i16>,
    error: Option<&str>,
) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<div class="error">{}</div>"#, html_escape(msg)),
        None => String::new(),
    };

    let options = (Priority::MIN..=Priority::MAX)
        .map(|level| {
            let selected = if priority == Some(level) { " selected" } else { "" };
            format!(r#"<option value="{level}"{selected}>{level}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{heading} - Todos</title>
    <style>{PAGE_STYLE}</style>
</head>
<body>
    <div class="container">
        <div class="topbar">
            <h1>{heading}</h1>
            <span><a href="/todos/">Back to list</a></span>
        </div>
        {error_html}
        <form method="post" action="{action}">
            <div class="form-group">
                <label for="title">Title</label>
                <input type="text" id="title" name="title" value="{title}" required />
            </div>
            <div class="form-group">
                <label for="description">Description</label>
                <textarea id="description" name="description" rows="3">{description}</textarea>
            </div>
            <div class="form-group">
                <label for="priority">Priority</label>
                <select id="priority" name="priority">
                    {options}
                </select>
            </div>
            <button type="submit">Save</button>
        </form>
    </div>
</body>
</html>"#,
        title = html_escape(title),
        description = html_escape(description),
        action = html_escape(action),
    )
}
