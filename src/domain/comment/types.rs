use serde::{Deserialize, Serialize};

use crate::domain::{InvalidRating, NewComment};

/// A stored comment, as read from and written to the `comments` table.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub groomer_id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub rating: i32,
}

// Every field is mandatory, a missing one fails deserialization
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentPayload {
    pub groomer_id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub rating: i32,
}

impl TryFrom<CreateCommentPayload> for NewComment {
    type Error = InvalidRating;

    fn try_from(value: CreateCommentPayload) -> Result<Self, Self::Error> {
        NewComment::new(
            value.groomer_id,
            value.user_id,
            value.title,
            value.message,
            value.rating,
        )
    }
}
