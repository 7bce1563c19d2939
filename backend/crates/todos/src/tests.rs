//! Unit tests for the todos crate
//!
//! Use-case tests run against an in-memory repository. The flow tests
//! drive the composed auth + todos routers over `tower::oneshot`, so
//! the whole cookie round-trip is exercised without a database.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use kernel::id::{TodoId, UserId};

use crate::application::{
    CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, ListTodosUseCase, ToggleCompleteUseCase,
    UpdateTodoInput, UpdateTodoUseCase,
};
use crate::domain::entities::{NewTodo, Todo, TodoChanges};
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct FakeTodoRepository {
    todos: Arc<Mutex<Vec<Todo>>>,
    next_id: Arc<AtomicI64>,
}

impl TodoRepository for FakeTodoRepository {
    async fn list_for_owner(&self, owner_id: UserId) -> TodoResult<Vec<Todo>> {
        let todos = self.todos.lock().unwrap();
        Ok(todos
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<Option<Todo>> {
        let todos = self.todos.lock().unwrap();
        Ok(todos
            .iter()
            .find(|t| t.id == id && t.owner_id == owner_id)
            .cloned())
    }

    async fn create(&self, todo: &NewTodo) -> TodoResult<Todo> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Todo {
            id: TodoId::from_i64(id),
            title: todo.title.clone(),
            description: todo.description.clone(),
            priority: todo.priority,
            complete: false,
            owner_id: todo.owner_id,
        };
        self.todos.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_for_owner(
        &self,
        id: TodoId,
        owner_id: UserId,
        changes: &TodoChanges,
    ) -> TodoResult<bool> {
        let mut todos = self.todos.lock().unwrap();
        match todos
            .iter_mut()
            .find(|t| t.id == id && t.owner_id == owner_id)
        {
            Some(todo) => {
                todo.title = changes.title.clone();
                todo.description = changes.description.clone();
                todo.priority = changes.priority;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn toggle_complete_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<bool> {
        let mut todos = self.todos.lock().unwrap();
        match todos
            .iter_mut()
            .find(|t| t.id == id && t.owner_id == owner_id)
        {
            Some(todo) => {
                todo.complete = !todo.complete;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<bool> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| !(t.id == id && t.owner_id == owner_id));
        Ok(todos.len() < before)
    }
}

fn input(title: &str, priority: i16) -> CreateTodoInput {
    CreateTodoInput {
        title: title.to_string(),
        description: String::new(),
        priority,
    }
}

async fn seed(repo: &Arc<FakeTodoRepository>, owner: i64, title: &str) -> Todo {
    CreateTodoUseCase::new(repo.clone())
        .execute(UserId::from_i64(owner), input(title, 3))
        .await
        .expect("seeding should succeed")
}

// ============================================================================
// Validation
// ============================================================================

mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_priority_bounds_enforced() {
        let repo = Arc::new(FakeTodoRepository::default());
        let use_case = CreateTodoUseCase::new(repo.clone());
        let owner = UserId::from_i64(1);

        for priority in [0, 6, -1, 100] {
            let err = use_case
                .execute(owner, input("buy milk", priority))
                .await
                .unwrap_err();
            assert!(matches!(err, TodoError::Validation(_)), "priority {priority}");
        }

        for priority in 1..=5 {
            let todo = use_case
                .execute(owner, input("buy milk", priority))
                .await
                .unwrap();
            assert_eq!(todo.priority.level(), priority);
        }
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let repo = Arc::new(FakeTodoRepository::default());
        let err = CreateTodoUseCase::new(repo.clone())
            .execute(UserId::from_i64(1), input("   ", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
        assert!(repo.todos.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_description_stored_as_none() {
        let repo = Arc::new(FakeTodoRepository::default());
        let todo = CreateTodoUseCase::new(repo)
            .execute(
                UserId::from_i64(1),
                CreateTodoInput {
                    title: "buy milk".to_string(),
                    description: "   ".to_string(),
                    priority: 3,
                },
            )
            .await
            .unwrap();
        assert!(todo.description.is_none());
        assert!(!todo.complete);
    }
}

// ============================================================================
// Ownership scoping
// ============================================================================

mod ownership_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let repo = Arc::new(FakeTodoRepository::default());
        seed(&repo, 1, "alice's task").await;
        seed(&repo, 2, "bob's task").await;

        let alice = ListTodosUseCase::new(repo.clone())
            .execute(UserId::from_i64(1))
            .await
            .unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].title.as_str(), "alice's task");

        let nobody = ListTodosUseCase::new(repo)
            .execute(UserId::from_i64(99))
            .await
            .unwrap();
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn test_foreign_update_is_not_found_and_mutates_nothing() {
        let repo = Arc::new(FakeTodoRepository::default());
        let todo = seed(&repo, 1, "alice's task").await;

        let err = UpdateTodoUseCase::new(repo.clone())
            .execute(
                UserId::from_i64(2),
                todo.id,
                UpdateTodoInput {
                    title: "hijacked".to_string(),
                    description: String::new(),
                    priority: 1,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound));

        let stored = repo.todos.lock().unwrap();
        assert_eq!(stored[0].title.as_str(), "alice's task");
        assert_eq!(stored[0].priority.level(), 3);
    }

    #[tokio::test]
    async fn test_foreign_toggle_is_not_found_and_mutates_nothing() {
        let repo = Arc::new(FakeTodoRepository::default());
        let todo = seed(&repo, 1, "alice's task").await;

        let err = ToggleCompleteUseCase::new(repo.clone())
            .execute(UserId::from_i64(2), todo.id)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
        assert!(!repo.todos.lock().unwrap()[0].complete);
    }

    #[tokio::test]
    async fn test_foreign_delete_is_not_found_and_mutates_nothing() {
        let repo = Arc::new(FakeTodoRepository::default());
        let todo = seed(&repo, 1, "alice's task").await;

        let err = DeleteTodoUseCase::new(repo.clone())
            .execute(UserId::from_i64(2), todo.id)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
        assert_eq!(repo.todos.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_id_behaves_like_foreign_id() {
        let repo = Arc::new(FakeTodoRepository::default());
        seed(&repo, 1, "alice's task").await;

        let missing = DeleteTodoUseCase::new(repo.clone())
            .execute(UserId::from_i64(1), TodoId::from_i64(999))
            .await
            .unwrap_err();
        let foreign = DeleteTodoUseCase::new(repo)
            .execute(UserId::from_i64(2), TodoId::from_i64(1))
            .await
            .unwrap_err();

        assert!(matches!(missing, TodoError::NotFound));
        assert!(matches!(foreign, TodoError::NotFound));
    }

    #[tokio::test]
    async fn test_owner_can_toggle_back_and_forth() {
        let repo = Arc::new(FakeTodoRepository::default());
        let todo = seed(&repo, 1, "alice's task").await;
        let owner = UserId::from_i64(1);
        let use_case = ToggleCompleteUseCase::new(repo.clone());

        use_case.execute(owner, todo.id).await.unwrap();
        assert!(repo.todos.lock().unwrap()[0].complete);

        use_case.execute(owner, todo.id).await.unwrap();
        assert!(!repo.todos.lock().unwrap()[0].complete);
    }
}

// ============================================================================
// HTTP flow
// ============================================================================

mod flow_tests {
    use super::*;
    use auth::domain::entity::user::{NewUser, User};
    use auth::domain::repository::UserRepository;
    use auth::domain::value_object::{email::Email, user_name::UserName};
    use auth::error::{AuthError, AuthResult};
    use auth::{AuthConfig, ResolveSessionUseCase, auth_router_generic};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::presentation::router::todo_router_generic;

    #[derive(Clone, Default)]
    struct FakeUserRepository {
        users: Arc<Mutex<Vec<User>>>,
        next_id: Arc<AtomicI64>,
    }

    impl UserRepository for FakeUserRepository {
        async fn create(&self, user: &NewUser) -> AuthResult<User> {
            let mut users = self.users.lock().unwrap();
            if users
                .iter()
                .any(|u| u.username == user.username || u.email == user.email)
            {
                return Err(AuthError::DuplicateUser);
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let created = User {
                id: UserId::from_i64(id),
                email: user.email.clone(),
                username: user.username.clone(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                password: user.password.clone(),
                is_active: user.is_active,
            };
            users.push(created.clone());
            Ok(created)
        }

        async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.username == username).cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.email == email).cloned())
        }

        async fn exists_by_username_or_email(
            &self,
            username: &UserName,
            email: &Email,
        ) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .any(|u| &u.username == username || &u.email == email))
        }
    }

    fn app() -> Router {
        let config = Arc::new(AuthConfig {
            session_secret: [5u8; 32],
            cookie_secure: false,
            ..AuthConfig::default()
        });
        let sessions = Arc::new(ResolveSessionUseCase::new(config.clone()));

        Router::new()
            .nest("/auth", auth_router_generic(FakeUserRepository::default(), config))
            .nest(
                "/todos",
                todo_router_generic(FakeTodoRepository::default(), sessions),
            )
    }

    fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    /// First cookie pair from the Set-Cookie header, e.g. `access_token=...`
    fn session_cookie(response: &axum::response::Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .expect("response should set a cookie")
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .expect("response should redirect")
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_todo_access_redirects_to_login() {
        let app = app();
        for uri in [
            "/todos/",
            "/todos/add-todo",
            "/todos/edit-todo/1",
            "/todos/complete/1",
            "/todos/delete/1",
        ] {
            let response = app.clone().oneshot(get(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
            assert_eq!(location(&response), "/auth/", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_register_login_crud_cycle() {
        let app = app();

        // Register alice
        let response = app
            .clone()
            .oneshot(form_post(
                "/auth/register",
                "email=a%40x.com&username=alice&firstname=Alice&lastname=Smith&password=Secret1&password2=Secret1",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/auth/");

        // Login (form field `email` carries the username)
        let response = app
            .clone()
            .oneshot(form_post("/auth/", "email=alice&password=Secret1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/todos/");
        let cookie = session_cookie(&response);
        assert!(cookie.starts_with("access_token="));

        // Empty list
        let response = app.clone().oneshot(get("/todos/", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Nothing to do yet."));

        // Create
        let response = app
            .clone()
            .oneshot(form_post(
                "/todos/add-todo",
                "title=buy+milk&description=&priority=3",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/todos/");

        // List shows the new todo as open
        let response = app.clone().oneshot(get("/todos/", Some(&cookie))).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("buy milk"));
        assert!(html.contains("Open"));

        // Toggle complete
        let response = app
            .clone()
            .oneshot(get("/todos/complete/1", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);

        let response = app.clone().oneshot(get("/todos/", Some(&cookie))).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Done"));

        // Delete
        let response = app
            .clone()
            .oneshot(get("/todos/delete/1", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);

        let response = app.clone().oneshot(get("/todos/", Some(&cookie))).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Nothing to do yet."));
    }

    #[tokio::test]
    async fn test_failed_login_rerenders_with_message() {
        let app = app();

        let response = app
            .clone()
            .oneshot(form_post("/auth/", "email=ghost&password=nope", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Incorrect username or password."));
    }

    #[tokio::test]
    async fn test_foreign_edit_redirects_to_list() {
        let app = app();

        // Two users
        for (user, email) in [("alice", "a%40x.com"), ("bob", "b%40x.com")] {
            let body = format!(
                "email={email}&username={user}&firstname=X&lastname=Y&password=Secret1&password2=Secret1"
            );
            app.clone()
                .oneshot(form_post("/auth/register", &body, None))
                .await
                .unwrap();
        }
        let alice = session_cookie(
            &app.clone()
                .oneshot(form_post("/auth/", "email=alice&password=Secret1", None))
                .await
                .unwrap(),
        );
        let bob = session_cookie(
            &app.clone()
                .oneshot(form_post("/auth/", "email=bob&password=Secret1", None))
                .await
                .unwrap(),
        );

        // Alice creates todo 1
        app.clone()
            .oneshot(form_post(
                "/todos/add-todo",
                "title=secret&priority=5",
                Some(&alice),
            ))
            .await
            .unwrap();

        // Bob cannot see or touch it
        let response = app
            .clone()
            .oneshot(get("/todos/edit-todo/1", Some(&bob)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/todos/");

        let response = app
            .clone()
            .oneshot(form_post(
                "/todos/edit-todo/1",
                "title=stolen&priority=1",
                Some(&bob),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/todos/");

        // Alice still sees her original title
        let response = app.clone().oneshot(get("/todos/", Some(&alice))).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("secret"));
        assert!(!html.contains("stolen"));
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_and_redirects() {
        let app = app();

        app.clone()
            .oneshot(form_post(
                "/auth/register",
                "email=a%40x.com&username=alice&firstname=A&lastname=S&password=Secret1&password2=Secret1",
                None,
            ))
            .await
            .unwrap();
        let cookie = session_cookie(
            &app.clone()
                .oneshot(form_post("/auth/", "email=alice&password=Secret1", None))
                .await
                .unwrap(),
        );

        let response = app
            .clone()
            .oneshot(get("/auth/logout", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/auth/?signed_out=1");
        let cleared = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cleared.contains("Max-Age=0"));

        // Sign-out confirmation on the login page
        let response = app
            .clone()
            .oneshot(get("/auth/?signed_out=1", None))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("You have been signed out."));
    }
}

