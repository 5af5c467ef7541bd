//! Post endpoints.

use actix_web::{HttpResponse, web};

use scribe_core::domain::{NewPost, Post};
use scribe_shared::dto::{CreatePostRequest, PageQuery, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(super) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        owner_id: post.owner_id,
    }
}

/// GET /posts/
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = query.into_inner();
    let posts = state.posts.list(page.skip, page.limit).await?;

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state.posts.find_by_id(id).await?.ok_or_else(|| {
        tracing::debug!(post_id = id, "Post not found");
        AppError::NotFound("Post not found".to_string())
    })?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// PUT /posts/{id} - plain update, 404 when the post does not exist.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let new = NewPost {
        title: req.title,
        content: req.content,
    };

    let post = state.posts.update(id, new).await?.ok_or_else(|| {
        tracing::debug!(post_id = id, "Post not found");
        AppError::NotFound("Post not found".to_string())
    })?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state.posts.delete(id).await?.ok_or_else(|| {
        tracing::debug!(post_id = id, "Post not found");
        AppError::NotFound("Post not found".to_string())
    })?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}
