use axum::{
    extract::{Json, Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
};

use crate::{
    AppState,
    cache::CachedUser,
    error::GatewayError,
    routes::extract::JsonBody,
    utils::status_messages,
};

use super::model::{
    CreateUserRequest, LoginRequest, LoginResponse, StatusResponse, UpdateUserRequest,
    UserResponse, UserView,
};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let user = state
        .users
        .create_user(req.into())
        .await
        .map_err(GatewayError::Backend)?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::new(status_messages::CREATED, user)),
    ))
}

/// 验证用户凭据并缓存会话信息
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let session = state
        .users
        .verify_credentials(req.into())
        .await
        .map_err(GatewayError::Backend)?;

    let token = session.token.clone();
    state.cache.set_user(&CachedUser::from(session)).await?;

    Ok((StatusCode::CREATED, Json(LoginResponse { token })))
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(GatewayError::Backend)?;

    let result: Vec<UserView> = users.into_iter().map(UserView::from).collect();
    Ok(Json(result))
}

/// 先查缓存，未命中再请求后端并写回缓存
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    // 读缓存失败按未命中处理
    match state.cache.get_user(&id).await {
        Ok(Some(cached)) => {
            tracing::debug!("Cache hit for user {}", id);
            return Ok(Json(UserView::from(cached)));
        }
        Ok(None) => tracing::debug!("Cache miss for user {}", id),
        Err(e) => tracing::warn!("Cache read failed for user {}: {}", id, e),
    }

    let user = state.users.get_user(&id).await.map_err(|status| {
        tracing::debug!("Backend lookup failed for user {}: {}", id, status.message());
        GatewayError::NotFound
    })?;

    let authorization = headers
        .get(AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .unwrap_or_default();
    state
        .cache
        .set_user(&CachedUser::from_lookup(&user, &authorization))
        .await?;

    Ok(Json(UserView::from(user)))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    // 不刷新缓存，旧记录保留到被覆盖或过期
    let user = state
        .users
        .update_user(req.into_update(id))
        .await
        .map_err(GatewayError::Backend)?;

    Ok(Json(UserResponse::new(status_messages::UPDATED, user)))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .users
        .delete_user(&id)
        .await
        .map_err(GatewayError::Rejected)?;

    Ok(Json(StatusResponse {
        status: status_messages::DELETED.to_string(),
    }))
}
