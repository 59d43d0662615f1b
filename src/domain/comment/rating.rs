pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid rating {0}: must be between 1 and 5.")]
pub struct InvalidRating(pub i32);

/// Rejects any rating outside `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> Result<(), InvalidRating> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(InvalidRating(rating));
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRating(i32);

impl CommentRating {
    /// Returns an instance of `CommentRating` if the rating passes `validate_rating`.
    pub fn parse(rating: i32) -> Result<Self, InvalidRating> {
        validate_rating(rating)?;
        Ok(Self(rating))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<CommentRating> for i32 {
    fn from(rating: CommentRating) -> Self {
        rating.0
    }
}
