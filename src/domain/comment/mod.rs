mod new_comment;
mod rating;
mod types;

pub use new_comment::NewComment;
pub use rating::*;
pub use types::*;
