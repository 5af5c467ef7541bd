//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
///
/// Trailing slashes are handled by the `NormalizePath::trim` middleware
/// wrapped around the app, so `/users/` and `/users` both route here.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("", web::post().to(users::create_user))
                .route("", web::get().to(users::list_users))
                .route("/{id}", web::get().to(users::get_user))
                .route("/{id}", web::put().to(users::update_user))
                .route("/{id}", web::delete().to(users::delete_user))
                .route("/{id}/posts", web::post().to(users::create_post_for_user))
                .route("/{id}/posts", web::get().to(users::list_posts_for_user)),
        )
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        );
}
