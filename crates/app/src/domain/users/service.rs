//! Users service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::users::{
    data::{NewUser, UserUpdate},
    errors::UsersServiceError,
    records::UserRecord,
};

const LIST_USERS_SQL: &str = "SELECT id, name, email, password_hash FROM users ORDER BY id";

const GET_USER_SQL: &str = "SELECT id, name, email, password_hash FROM users WHERE id = $1";

const FIND_USER_BY_EMAIL_SQL: &str =
    "SELECT id, name, email, password_hash FROM users WHERE email = $1";

const CREATE_USER_SQL: &str = "INSERT INTO users (name, email, password_hash) \
     VALUES ($1, $2, $3) RETURNING id, name, email, password_hash";

const UPDATE_USER_SQL: &str = "UPDATE users SET name = $1, email = $2, password_hash = $3 \
     WHERE id = $4 RETURNING id, name, email, password_hash";

const DELETE_USER_SQL: &str = "DELETE FROM users WHERE id = $1";

#[derive(Debug, Clone)]
pub struct PgUsersService {
    pool: PgPool,
}

impl PgUsersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError> {
        query_as::<Postgres, UserRecord>(LIST_USERS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(UsersServiceError::from)
    }

    async fn get_user(&self, id: i32) -> Result<UserRecord, UsersServiceError> {
        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(UsersServiceError::from)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<UserRecord, UsersServiceError> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(UsersServiceError::from)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.name)
            .bind(user.email)
            .bind(user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(UsersServiceError::from)
    }

    async fn update_user(
        &self,
        id: i32,
        update: UserUpdate,
    ) -> Result<UserRecord, UsersServiceError> {
        query_as::<Postgres, UserRecord>(UPDATE_USER_SQL)
            .bind(update.name)
            .bind(update.email)
            .bind(update.password_hash)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(UsersServiceError::from)
    }

    async fn delete_user(&self, id: i32) -> Result<(), UsersServiceError> {
        let rows_affected = query(DELETE_USER_SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(UsersServiceError::from)?
            .rows_affected();

        if rows_affected == 0 {
            return Err(UsersServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves all users.
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Retrieve a single user by id.
    async fn get_user(&self, id: i32) -> Result<UserRecord, UsersServiceError>;

    /// Look up the user owning the given email, for login.
    async fn find_user_by_email(&self, email: &str) -> Result<UserRecord, UsersServiceError>;

    /// Creates a new user record.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Updates a user's name, email, and password hash.
    async fn update_user(
        &self,
        id: i32,
        update: UserUpdate,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Deletes a user by id.
    async fn delete_user(&self, id: i32) -> Result<(), UsersServiceError>;
}
