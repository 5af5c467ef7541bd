//! User endpoints.

use actix_web::{HttpResponse, web};

use scribe_core::domain::{NewPost, NewUser, Post, User};
use scribe_core::error::RepoError;
use scribe_shared::dto::{
    CreatePostRequest, CreateUserRequest, PageQuery, PostResponse, UserResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::posts::post_response;

fn user_response(user: User, posts: Vec<Post>) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        posts: posts.into_iter().map(post_response).collect(),
    }
}

/// Name the violated constraint in the conflict detail. An upsert can leave
/// the id sequence behind the highest row, so a later create may collide on
/// the primary key rather than the email.
fn conflict_error(violation: &str, email: &str) -> AppError {
    if violation.contains("email") {
        AppError::Conflict(format!("Email {email} already exists."))
    } else {
        AppError::Conflict("User id already exists.".to_string())
    }
}

fn validate(req: &CreateUserRequest) -> Result<(), AppError> {
    if req.name.is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    Ok(())
}

/// POST /users/
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate(&req)?;

    let new = NewUser {
        name: req.name,
        email: req.email,
    };
    let email = new.email.clone();

    let user = state.users.create(new).await.map_err(|e| match e {
        RepoError::UniqueViolation(msg) => conflict_error(&msg, &email),
        other => other.into(),
    })?;

    Ok(HttpResponse::Ok().json(user_response(user, Vec::new())))
}

/// GET /users/
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = query.into_inner();
    let users = state.users.list(page.skip, page.limit).await?;

    let body: Vec<UserResponse> = users
        .into_iter()
        .map(|u| user_response(u, Vec::new()))
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let user = state.users.find_by_id(id).await?.ok_or_else(|| {
        tracing::debug!(user_id = id, "User not found");
        AppError::NotFound("User not found".to_string())
    })?;
    let posts = state.posts.find_by_owner(id).await?;

    Ok(HttpResponse::Ok().json(user_response(user, posts)))
}

/// PUT /users/{id} - update the user, or insert a row carrying the supplied
/// id when none exists.
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    validate(&req)?;

    let new = NewUser {
        name: req.name,
        email: req.email,
    };
    let email = new.email.clone();

    let user = state.users.upsert(id, new).await.map_err(|e| match e {
        RepoError::UniqueViolation(msg) => conflict_error(&msg, &email),
        other => other.into(),
    })?;
    let posts = state.posts.find_by_owner(id).await?;

    Ok(HttpResponse::Ok().json(user_response(user, posts)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let user = state.users.delete(id).await?.ok_or_else(|| {
        tracing::debug!(user_id = id, "User not found");
        AppError::NotFound("User not found".to_string())
    })?;

    Ok(HttpResponse::Ok().json(user_response(user, Vec::new())))
}

/// POST /users/{id}/posts/
pub async fn create_post_for_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let owner_id = path.into_inner();
    let req = body.into_inner();

    let new = NewPost {
        title: req.title,
        content: req.content,
    };

    let post = state.posts.create(owner_id, new).await.map_err(|e| match e {
        RepoError::ForeignKeyViolation(_) => {
            tracing::debug!(user_id = owner_id, "Cannot create post for missing user");
            AppError::NotFound("User not found".to_string())
        }
        other => other.into(),
    })?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// GET /users/{id}/posts/
pub async fn list_posts_for_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let owner_id = path.into_inner();
    let posts = state.posts.find_by_owner(owner_id).await?;

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}
