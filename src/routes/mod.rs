use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub mod extract;
pub mod user;

// 用户相关的路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(user::create_user).get(user::list_users))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/login", post(user::login))
}

/// Routes are mounted at the root when `base_uri` is empty or `/`.
pub fn create_router(base_uri: &str) -> Router<AppState> {
    match base_uri.trim_matches('/') {
        "" => user_routes(),
        prefix => Router::new().nest(&format!("/{}", prefix), user_routes()),
    }
}
