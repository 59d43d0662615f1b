use crate::domain::{CommentRating, InvalidRating};

/// A comment that passed validation and has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub groomer_id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub rating: CommentRating,
}

impl NewComment {
    pub fn new(
        groomer_id: i32,
        user_id: i32,
        title: String,
        message: String,
        rating: i32,
    ) -> Result<Self, InvalidRating> {
        Ok(Self {
            groomer_id,
            user_id,
            title,
            message,
            rating: CommentRating::parse(rating)?,
        })
    }
}
