use axum::extract::State;
use axum::Extension;

use service::address::domain::{Address, AddressRequest};
use service::user::domain::UserView;

use super::auth::ServerState;
use super::{ok, Data, OK};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

#[utoipa::path(post, path = "/api/contacts/{id}/addresses", tag = "addresses", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id")),
    request_body = crate::openapi::AddressRequestDoc,
    responses((status = 200, description = "Created address", body = crate::openapi::AddressDataDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact is not found", body = crate::openapi::ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath(contact_id): ApiPath<i32>,
    ApiJson(input): ApiJson<AddressRequest>,
) -> Result<ApiJson<Data<Address>>, ApiError> {
    Ok(ok(state.addresses.create(&user.username, contact_id, input).await?))
}

#[utoipa::path(get, path = "/api/contacts/{id}/addresses", tag = "addresses", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id")),
    responses((status = 200, description = "Addresses ordered by id", body = crate::openapi::AddressListDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact is not found", body = crate::openapi::ErrorDoc)))]
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath(contact_id): ApiPath<i32>,
) -> Result<ApiJson<Data<Vec<Address>>>, ApiError> {
    Ok(ok(state.addresses.list(&user.username, contact_id).await?))
}

#[utoipa::path(get, path = "/api/contacts/{id}/addresses/{address_id}", tag = "addresses", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id"), ("address_id" = i32, Path, description = "Address id")),
    responses((status = 200, description = "Address", body = crate::openapi::AddressDataDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact or address is not found", body = crate::openapi::ErrorDoc)))]
pub async fn get(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath((contact_id, address_id)): ApiPath<(i32, i32)>,
) -> Result<ApiJson<Data<Address>>, ApiError> {
    Ok(ok(state.addresses.get(&user.username, contact_id, address_id).await?))
}

#[utoipa::path(put, path = "/api/contacts/{id}/addresses/{address_id}", tag = "addresses", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id"), ("address_id" = i32, Path, description = "Address id")),
    request_body = crate::openapi::AddressRequestDoc,
    responses((status = 200, description = "Replaced address", body = crate::openapi::AddressDataDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact or address is not found", body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath((contact_id, address_id)): ApiPath<(i32, i32)>,
    ApiJson(input): ApiJson<AddressRequest>,
) -> Result<ApiJson<Data<Address>>, ApiError> {
    Ok(ok(state.addresses.update(&user.username, contact_id, address_id, input).await?))
}

#[utoipa::path(delete, path = "/api/contacts/{id}/addresses/{address_id}", tag = "addresses", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id"), ("address_id" = i32, Path, description = "Address id")),
    responses((status = 200, description = "Removed", body = crate::openapi::OkDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact or address is not found", body = crate::openapi::ErrorDoc)))]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath((contact_id, address_id)): ApiPath<(i32, i32)>,
) -> Result<ApiJson<Data<&'static str>>, ApiError> {
    state.addresses.remove(&user.username, contact_id, address_id).await?;
    Ok(ok(OK))
}
