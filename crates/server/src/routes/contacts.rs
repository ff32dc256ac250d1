use axum::extract::State;
use axum::Extension;

use service::contact::domain::{Contact, ContactRequest, SearchContactRequest};
use service::pagination::Page;
use service::user::domain::UserView;

use super::auth::ServerState;
use super::{ok, Data, OK};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

#[utoipa::path(post, path = "/api/contacts", tag = "contacts", security(("token" = [])),
    request_body = crate::openapi::ContactRequestDoc,
    responses((status = 200, description = "Created contact", body = crate::openapi::ContactDataDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiJson(input): ApiJson<ContactRequest>,
) -> Result<ApiJson<Data<Contact>>, ApiError> {
    Ok(ok(state.contacts.create(&user.username, input).await?))
}

#[utoipa::path(get, path = "/api/contacts/{id}", tag = "contacts", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id")),
    responses((status = 200, description = "Contact", body = crate::openapi::ContactDataDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact is not found", body = crate::openapi::ErrorDoc)))]
pub async fn get(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiJson<Data<Contact>>, ApiError> {
    Ok(ok(state.contacts.get(&user.username, id).await?))
}

#[utoipa::path(put, path = "/api/contacts/{id}", tag = "contacts", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id")),
    request_body = crate::openapi::ContactRequestDoc,
    responses((status = 200, description = "Replaced contact", body = crate::openapi::ContactDataDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact is not found", body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ContactRequest>,
) -> Result<ApiJson<Data<Contact>>, ApiError> {
    Ok(ok(state.contacts.update(&user.username, id, input).await?))
}

#[utoipa::path(delete, path = "/api/contacts/{id}", tag = "contacts", security(("token" = [])),
    params(("id" = i32, Path, description = "Contact id")),
    responses((status = 200, description = "Removed with its addresses", body = crate::openapi::OkDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc), (status = 404, description = "contact is not found", body = crate::openapi::ErrorDoc)))]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiJson<Data<&'static str>>, ApiError> {
    state.contacts.remove(&user.username, id).await?;
    Ok(ok(OK))
}

#[utoipa::path(get, path = "/api/contacts", tag = "contacts", security(("token" = [])),
    params(
        ("name" = Option<String>, Query, description = "Substring of first or last name, case-insensitive"),
        ("email" = Option<String>, Query, description = "Substring of email"),
        ("phone" = Option<String>, Query, description = "Substring of phone"),
        ("page" = Option<u64>, Query, description = "1-based page, default 1"),
        ("size" = Option<u64>, Query, description = "Page size 1..=100, default 10")
    ),
    responses((status = 200, description = "One page of contacts", body = crate::openapi::ContactPageDoc), (status = 400, description = "Invalid query", body = crate::openapi::ErrorDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)))]
pub async fn search(
    State(state): State<ServerState>,
    Extension(user): Extension<UserView>,
    ApiQuery(query): ApiQuery<SearchContactRequest>,
) -> Result<ApiJson<Page<Contact>>, ApiError> {
    Ok(ApiJson(state.contacts.search(&user.username, query).await?))
}
