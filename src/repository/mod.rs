mod comment;
mod in_memory;

use std::fmt::{self, Debug, Formatter};
use std::future::Future;

pub use comment::*;
pub use in_memory::*;

use crate::domain::{Comment, NewComment};
use crate::utils;

/// Failure of the backing datastore.
#[derive(thiserror::Error)]
#[error(transparent)]
pub struct StoreError(#[from] anyhow::Error);

impl Debug for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// Persistence for comments. Handlers receive it as `web::Data<S>`.
pub trait CommentStore: Send + Sync + 'static {
    /// Assigns a fresh id to `comment`, persists it and returns the stored record.
    fn create(
        &self,
        comment: NewComment,
    ) -> impl Future<Output = Result<Comment, StoreError>> + Send;

    /// Returns one comment written about `groomer_id`, if any.
    ///
    /// Groomer ids are not unique; when several comments match, which one is
    /// returned is unspecified.
    fn find_by_groomer_id(
        &self,
        groomer_id: i32,
    ) -> impl Future<Output = Result<Option<Comment>, StoreError>> + Send;
}
