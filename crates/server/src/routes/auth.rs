use std::sync::Arc;

use argon2::Argon2;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;

use service::address::repository::SeaOrmAddressRepository;
use service::address::AddressService;
use service::contact::repository::SeaOrmContactRepository;
use service::contact::ContactService;
use service::user::repo::seaorm::SeaOrmUserRepository;
use service::user::UserService;

use crate::errors::ApiError;

pub type Users = UserService<SeaOrmUserRepository>;
pub type Contacts = ContactService<SeaOrmContactRepository>;
pub type Addresses = AddressService<SeaOrmContactRepository, SeaOrmAddressRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub users: Arc<Users>,
    pub contacts: Arc<Contacts>,
    pub addresses: Arc<Addresses>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self { Self::with_argon2(db, Argon2::default()) }

    /// Same wiring with custom password hashing parameters.
    pub fn with_argon2(db: DatabaseConnection, argon: Argon2<'static>) -> Self {
        let user_repo = Arc::new(SeaOrmUserRepository { db: db.clone() });
        let contact_repo = Arc::new(SeaOrmContactRepository { db: db.clone() });
        let address_repo = Arc::new(SeaOrmAddressRepository { db: db.clone() });
        Self {
            users: Arc::new(UserService::with_argon2(user_repo, argon)),
            contacts: Arc::new(ContactService::new(contact_repo.clone())),
            addresses: Arc::new(AddressService::new(contact_repo, address_repo)),
            db,
        }
    }
}

/// Raw token from `Authorization`; a `Bearer ` prefix is accepted but optional.
fn bearer_token(req: &Request) -> String {
    let value = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .trim();
    value.strip_prefix("Bearer ").unwrap_or(value).to_string()
}

/// Resolves the session token to a user and stores the `UserView` in request
/// extensions; anything else is 401.
pub async fn require_token(State(state): State<ServerState>, mut req: Request, next: Next) -> Result<Response, ApiError> {
    // owned copy: the request body is not Sync, so no borrow of it may cross the await
    let token = bearer_token(&req);
    let user = match state.users.authenticate(&token).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), "request without a valid session token");
            return Err(e.into());
        }
    };
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
