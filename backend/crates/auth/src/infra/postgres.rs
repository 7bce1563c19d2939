//! PostgreSQL Repository Implementations

use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword,
};
use crate::error::AuthResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        // Unique violations on username/email surface as 23505 and are
        // classified into the duplicate error by the error layer.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                email,
                username,
                first_name,
                last_name,
                hashed_password,
                is_active
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id,
                email,
                username,
                first_name,
                last_name,
                hashed_password,
                is_active
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.password.as_str())
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await?;

        row.into_user()
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                email,
                username,
                first_name,
                last_name,
                hashed_password,
                is_active
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                email,
                username,
                first_name,
                last_name,
                hashed_password,
                is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username_or_email(
        &self,
        username: &UserName,
        email: &Email,
    ) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    hashed_password: String,
    is_active: bool,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password = UserPassword::from_phc_string(self.hashed_password)?;

        Ok(User {
            id: UserId::from_i64(self.id),
            email: Email::from_db(self.email),
            username: UserName::from_db(self.username),
            first_name: self.first_name,
            last_name: self.last_name,
            password,
            is_active: self.is_active,
        })
    }
}
