use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;

use crate::{
    domain::{Comment, NewComment},
    repository::{CommentStore, StoreError},
};

/// A `CommentStore` held in process memory. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryCommentStore {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Comment>>, StoreError> {
        self.comments
            .lock()
            .map_err(|_| StoreError::from(anyhow!("In-memory comment store lock was poisoned")))
    }
}

impl CommentStore for InMemoryCommentStore {
    async fn create(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let mut comments = self.lock()?;
        let id = comments.last().map_or(1, |last| last.id + 1);

        let record = Comment {
            id,
            groomer_id: comment.groomer_id,
            user_id: comment.user_id,
            title: comment.title,
            message: comment.message,
            rating: comment.rating.into(),
        };
        comments.push(record.clone());

        Ok(record)
    }

    async fn find_by_groomer_id(&self, groomer_id: i32) -> Result<Option<Comment>, StoreError> {
        let comments = self.lock()?;

        Ok(comments.iter().find(|c| c.groomer_id == groomer_id).cloned())
    }
}
