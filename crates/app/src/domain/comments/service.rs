//! Comments service.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::comments::{
    data::{CommentUpdate, NewComment},
    errors::CommentsServiceError,
    records::CommentRecord,
};

const CREATE_COMMENT_SQL: &str = "INSERT INTO comments (user_id, product_id, content) \
     VALUES ($1, $2, $3) \
     RETURNING id, user_id, product_id, content, created_at, updated_at";

const LIST_COMMENTS_SQL: &str = "SELECT id, user_id, product_id, content, created_at, updated_at \
     FROM comments WHERE product_id = $1 ORDER BY id";

const GET_COMMENT_SQL: &str = "SELECT id, user_id, product_id, content, created_at, updated_at \
     FROM comments WHERE id = $1 AND product_id = $2";

// Owner-scoped: the user id is part of the match, so a mismatched owner
// behaves exactly like a missing row.
const UPDATE_COMMENT_SQL: &str = "UPDATE comments SET content = $1, updated_at = CURRENT_TIMESTAMP \
     WHERE id = $2 AND product_id = $3 AND user_id = $4 \
     RETURNING id, user_id, product_id, content, created_at, updated_at";

const DELETE_COMMENT_SQL: &str =
    "DELETE FROM comments WHERE id = $1 AND product_id = $2 AND user_id = $3";

#[derive(Debug, Clone)]
pub struct PgCommentsService {
    pool: PgPool,
}

impl PgCommentsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for CommentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            product_id: row.try_get("product_id")?,
            content: row.try_get("content")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[async_trait]
impl CommentsService for PgCommentsService {
    async fn create_comment(
        &self,
        comment: NewComment,
    ) -> Result<CommentRecord, CommentsServiceError> {
        query_as::<Postgres, CommentRecord>(CREATE_COMMENT_SQL)
            .bind(comment.user_id)
            .bind(comment.product_id)
            .bind(comment.content)
            .fetch_one(&self.pool)
            .await
            .map_err(CommentsServiceError::from)
    }

    async fn list_comments(
        &self,
        product_id: i32,
    ) -> Result<Vec<CommentRecord>, CommentsServiceError> {
        query_as::<Postgres, CommentRecord>(LIST_COMMENTS_SQL)
            .bind(product_id)
            .fetch_all(&self.pool)
            .await
            .map_err(CommentsServiceError::from)
    }

    async fn get_comment(
        &self,
        product_id: i32,
        comment_id: i32,
    ) -> Result<CommentRecord, CommentsServiceError> {
        query_as::<Postgres, CommentRecord>(GET_COMMENT_SQL)
            .bind(comment_id)
            .bind(product_id)
            .fetch_one(&self.pool)
            .await
            .map_err(CommentsServiceError::from)
    }

    async fn update_comment(
        &self,
        product_id: i32,
        comment_id: i32,
        user_id: i32,
        update: CommentUpdate,
    ) -> Result<CommentRecord, CommentsServiceError> {
        query_as::<Postgres, CommentRecord>(UPDATE_COMMENT_SQL)
            .bind(update.content)
            .bind(comment_id)
            .bind(product_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(CommentsServiceError::from)
    }

    async fn delete_comment(
        &self,
        product_id: i32,
        comment_id: i32,
        user_id: i32,
    ) -> Result<(), CommentsServiceError> {
        let rows_affected = query(DELETE_COMMENT_SQL)
            .bind(comment_id)
            .bind(product_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(CommentsServiceError::from)?
            .rows_affected();

        if rows_affected == 0 {
            return Err(CommentsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CommentsService: Send + Sync {
    /// Creates a new comment owned by the given user.
    async fn create_comment(
        &self,
        comment: NewComment,
    ) -> Result<CommentRecord, CommentsServiceError>;

    /// Retrieves all comments for a product.
    async fn list_comments(
        &self,
        product_id: i32,
    ) -> Result<Vec<CommentRecord>, CommentsServiceError>;

    /// Retrieve a single comment scoped to a product.
    async fn get_comment(
        &self,
        product_id: i32,
        comment_id: i32,
    ) -> Result<CommentRecord, CommentsServiceError>;

    /// Updates a comment's content, matching the owning user.
    async fn update_comment(
        &self,
        product_id: i32,
        comment_id: i32,
        user_id: i32,
        update: CommentUpdate,
    ) -> Result<CommentRecord, CommentsServiceError>;

    /// Deletes a comment, matching the owning user.
    async fn delete_comment(
        &self,
        product_id: i32,
        comment_id: i32,
        user_id: i32,
    ) -> Result<(), CommentsServiceError>;
}
