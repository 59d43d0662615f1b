use anyhow::Context;
use sqlx::PgPool;

use crate::{
    domain::{Comment, NewComment},
    repository::{CommentStore, StoreError},
};

#[derive(Debug, Clone)]
pub struct PgCommentStore {
    pool: PgPool,
}

impl PgCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CommentStore for PgCommentStore {
    #[tracing::instrument(
        name = "Inserting comment",
        skip(self, comment),
        fields(groomer_id=%comment.groomer_id, user_id=%comment.user_id)
    )]
    async fn create(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let record = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (groomer_id, user_id, title, message, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, groomer_id, user_id, title, message, rating
            "#,
        )
        .bind(comment.groomer_id)
        .bind(comment.user_id)
        .bind(&comment.title)
        .bind(&comment.message)
        .bind(comment.rating.value())
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert comment")?;

        Ok(record)
    }

    #[tracing::instrument(name = "Loading comment for groomer", skip(self))]
    async fn find_by_groomer_id(&self, groomer_id: i32) -> Result<Option<Comment>, StoreError> {
        let record = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, groomer_id, user_id, title, message, rating
            FROM comments
            WHERE groomer_id = $1
            LIMIT 1
            "#,
        )
        .bind(groomer_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load comment for groomer")?;

        Ok(record)
    }
}
