use axum::extract::State;
use axum::Extension;

use service::user::domain::{LoginUserRequest, RegisterUserRequest, TokenView, UpdateUserRequest, UserView};

use super::auth::ServerState;
use super::{ok, Data, OK};
use crate::errors::ApiError;
use crate::extract::ApiJson;

#[utoipa::path(post, path = "/api/users", tag = "users",
    request_body = crate::openapi::RegisterRequestDoc,
    responses((status = 200, description = "Registered", body = crate::openapi::UserDataDoc), (status = 400, description = "Invalid input or username taken", body = crate::openapi::ErrorDoc)))]
pub async fn register(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<RegisterUserRequest>,
) -> Result<ApiJson<Data<UserView>>, ApiError> {
    Ok(ok(state.users.register(input).await?))
}

#[utoipa::path(post, path = "/api/users/login", tag = "users",
    request_body = crate::openapi::LoginRequestDoc,
    responses((status = 200, description = "Session token", body = crate::openapi::TokenDataDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc), (status = 401, description = "Username or password wrong", body = crate::openapi::ErrorDoc)))]
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<LoginUserRequest>,
) -> Result<ApiJson<Data<TokenView>>, ApiError> {
    Ok(ok(state.users.login(input).await?))
}

#[utoipa::path(get, path = "/api/users/current", tag = "users", security(("token" = [])),
    responses((status = 200, description = "Current user", body = crate::openapi::UserDataDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)))]
pub async fn current(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
) -> Result<ApiJson<Data<UserView>>, ApiError> {
    Ok(ok(state.users.get(&user.username).await?))
}

#[utoipa::path(patch, path = "/api/users/current", tag = "users", security(("token" = [])),
    request_body = crate::openapi::UpdateUserRequestDoc,
    responses((status = 200, description = "Updated user", body = crate::openapi::UserDataDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiJson(input): ApiJson<UpdateUserRequest>,
) -> Result<ApiJson<Data<UserView>>, ApiError> {
    Ok(ok(state.users.update(&user.username, input).await?))
}

#[utoipa::path(delete, path = "/api/users/logout", tag = "users", security(("token" = [])),
    responses((status = 200, description = "Logged out", body = crate::openapi::OkDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)))]
pub async fn logout(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
) -> Result<ApiJson<Data<&'static str>>, ApiError> {
    state.users.logout(&user.username).await?;
    Ok(ok(OK))
}
