use std::fmt::{self, Debug, Formatter};

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Deserialize;

use crate::{
    domain::{CreateCommentPayload, InvalidRating, NewComment},
    repository::{CommentStore, StoreError},
    routes::build_error_response,
    utils,
};

#[derive(thiserror::Error)]
pub enum CommentError {
    #[error(transparent)]
    ValidationError(#[from] InvalidRating),

    #[error("Could not find comment {0}")]
    NotFound(i32),

    #[error("Failed to access the comment store")]
    StorageError(#[from] StoreError),
}

impl Debug for CommentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for CommentError {
    fn status_code(&self) -> StatusCode {
        match self {
            CommentError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CommentError::NotFound(_) => StatusCode::NOT_FOUND,
            CommentError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Store failures are logged with their causes, the caller only sees a generic message
            CommentError::StorageError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        build_error_response(self.status_code(), message)
    }
}

#[derive(Deserialize, Debug)]
pub struct GroomerPathParams {
    pub id: i32,
}

#[tracing::instrument(
    name = "Creating comment",
    skip(payload, store),
    fields(groomer_id=%payload.groomer_id, user_id=%payload.user_id)
)]
pub async fn create_comment<S: CommentStore>(
    payload: web::Json<CreateCommentPayload>,
    store: web::Data<S>,
) -> Result<HttpResponse, CommentError> {
    let comment: NewComment = payload.into_inner().try_into()?;

    let stored = store.create(comment).await?;

    tracing::info!(comment_id = stored.id, "Comment stored");
    Ok(HttpResponse::Ok().json(stored))
}

#[tracing::instrument(name = "Fetching comment for groomer", skip(store), fields(groomer_id=%path.id))]
pub async fn get_comment_for_groomer<S: CommentStore>(
    path: web::Path<GroomerPathParams>,
    store: web::Data<S>,
) -> Result<HttpResponse, CommentError> {
    let groomer_id = path.id;

    let comment = store
        .find_by_groomer_id(groomer_id)
        .await?
        .ok_or(CommentError::NotFound(groomer_id))?;

    Ok(HttpResponse::Ok().json(comment))
}
