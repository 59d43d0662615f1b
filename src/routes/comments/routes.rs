use crate::repository::CommentStore;
use crate::routes;
use actix_web::web;

pub fn comment_routes<S: CommentStore>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::post().to(routes::create_comment::<S>))
        // The path segment is a groomer id, not a comment id
        .route("/{id}", web::get().to(routes::get_comment_for_groomer::<S>));
}
