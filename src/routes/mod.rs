mod comments;
mod health_check;

pub mod helpers;

pub use comments::*;
pub use health_check::*;
pub use helpers::*;
