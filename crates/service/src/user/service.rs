use std::sync::Arc;

use argon2::Argon2;
use tracing::{debug, info, instrument};

use super::credentials::{generate_token, hash_password, verify_password};
use super::domain::{LoginUserRequest, NewUser, RegisterUserRequest, TokenView, UpdateUserRequest, UserChanges, UserView};
use super::repository::UserRepository;
use crate::errors::ServiceError;
use crate::validation::{validate, Violations};

/// User business service independent of web framework
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
    argon: Argon2<'static>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self::with_argon2(repo, Argon2::default()) }

    /// Hash with explicit argon2 parameters (verification reads them from the stored hash).
    pub fn with_argon2(repo: Arc<R>, argon: Argon2<'static>) -> Self { Self { repo, argon } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::user::{UserService, repository::mock::MockUserRepository};
    /// use service::user::domain::RegisterUserRequest;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let input = RegisterUserRequest { username: "test".into(), password: "password".into(), name: "Test user".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.username, "test");
    /// assert_eq!(user.name, "Test user");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterUserRequest) -> Result<UserView, ServiceError> {
        validate(&input)?;
        if let Some(existing) = self.repo.find_by_username(&input.username).await? {
            debug!("user exists: {}", existing.username);
            return Err(ServiceError::conflict("Username already exists"));
        }

        let password_hash = hash_password(&self.argon, &input.password)?;
        let user = self
            .repo
            .create(NewUser { username: input.username, name: input.name, password_hash })
            .await?;
        info!(username = %user.username, "user_registered");
        Ok(user.view())
    }

    /// Check credentials and start a new session, replacing any previous token.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginUserRequest) -> Result<TokenView, ServiceError> {
        validate(&input)?;
        let user = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or_else(ServiceError::bad_credentials)?;

        if !verify_password(&self.argon, &input.password, &user.password_hash)? {
            return Err(ServiceError::bad_credentials());
        }

        let token = generate_token();
        self.repo.set_token(&user.username, Some(token.clone())).await?;
        info!(username = %user.username, "user_logged_in");
        Ok(TokenView { token })
    }

    /// Resolve a bearer token to its user.
    pub async fn authenticate(&self, token: &str) -> Result<UserView, ServiceError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServiceError::unauthorized());
        }
        self.repo
            .find_by_token(token)
            .await?
            .map(|u| u.view())
            .ok_or_else(ServiceError::unauthorized)
    }

    pub async fn get(&self, username: &str) -> Result<UserView, ServiceError> {
        self.repo
            .find_by_username(username)
            .await?
            .map(|u| u.view())
            .ok_or_else(|| ServiceError::not_found("user"))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, username: &str, input: UpdateUserRequest) -> Result<UserView, ServiceError> {
        validate(&input)?;
        if input.name.is_none() && input.password.is_none() {
            return Err(Violations::single("name", "either name or password is required").into());
        }

        let password_hash = match input.password.as_deref() {
            Some(p) => Some(hash_password(&self.argon, p)?),
            None => None,
        };
        let password_changed = password_hash.is_some();
        let user = self
            .repo
            .update(username, UserChanges { name: input.name, password_hash })
            .await?;
        info!(username = %user.username, password_changed, "user_updated");
        Ok(user.view())
    }

    /// End the session; the old token stops authenticating.
    #[instrument(skip(self))]
    pub async fn logout(&self, username: &str) -> Result<(), ServiceError> {
        self.repo.set_token(username, None).await?;
        info!(%username, "user_logged_out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fast_argon2;
    use crate::user::repository::mock::MockUserRepository;

    fn service() -> (Arc<MockUserRepository>, UserService<MockUserRepository>) {
        let repo = Arc::new(MockUserRepository::default());
        (repo.clone(), UserService::with_argon2(repo, fast_argon2()))
    }

    fn register_input(username: &str) -> RegisterUserRequest {
        RegisterUserRequest { username: username.into(), password: "password".into(), name: "Test user".into() }
    }

    fn login_input(username: &str, password: &str) -> LoginUserRequest {
        LoginUserRequest { username: username.into(), password: password.into() }
    }

    #[tokio::test]
    async fn register_twice_conflicts() {
        let (_, svc) = service();
        let user = svc.register(register_input("test")).await.unwrap();
        assert_eq!(user, UserView { username: "test".into(), name: "Test user".into() });

        let err = svc.register(register_input("test")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn register_reports_all_invalid_fields() {
        let (_, svc) = service();
        let err = svc.register(RegisterUserRequest::default()).await.unwrap_err();
        let ServiceError::Validation(v) = err else { panic!("expected validation error") };
        assert_eq!(v.len(), 3);
        assert!(v.contains_field("username") && v.contains_field("password") && v.contains_field("name"));
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let (repo, svc) = service();
        svc.register(register_input("test")).await.unwrap();
        let stored = repo.stored("test").unwrap();
        assert_ne!(stored.password_hash, "password");
        assert!(stored.password_hash.starts_with("$argon2"));
        assert!(stored.token.is_none());
    }

    #[tokio::test]
    async fn login_issues_fresh_tokens() {
        let (repo, svc) = service();
        svc.register(register_input("test")).await.unwrap();

        let first = svc.login(login_input("test", "password")).await.unwrap();
        let second = svc.login(login_input("test", "password")).await.unwrap();
        assert_ne!(first.token, second.token);
        assert_eq!(repo.stored("test").unwrap().token.as_deref(), Some(second.token.as_str()));

        // the replaced token no longer authenticates
        assert!(matches!(svc.authenticate(&first.token).await, Err(ServiceError::Unauthorized(_))));
        assert_eq!(svc.authenticate(&second.token).await.unwrap().username, "test");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let (_, svc) = service();
        svc.register(register_input("test")).await.unwrap();

        let wrong_password = svc.login(login_input("test", "wrong-password")).await.unwrap_err();
        let unknown_user = svc.login(login_input("wrong-username", "password")).await.unwrap_err();
        assert!(matches!(wrong_password, ServiceError::Unauthorized(_)));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.code(), unknown_user.code());
    }

    #[tokio::test]
    async fn login_validates_before_lookup() {
        let (_, svc) = service();
        let err = svc.login(login_input("", "")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn authenticate_rejects_empty_and_unknown_tokens() {
        let (_, svc) = service();
        assert!(matches!(svc.authenticate("").await, Err(ServiceError::Unauthorized(_))));
        assert!(matches!(svc.authenticate("   ").await, Err(ServiceError::Unauthorized(_))));
        assert!(matches!(svc.authenticate("wrong-token").await, Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn update_password_rehashes() {
        let (repo, svc) = service();
        svc.register(register_input("test")).await.unwrap();

        let input = UpdateUserRequest { name: None, password: Some("rahasia".into()) };
        let view = svc.update("test", input).await.unwrap();
        assert_eq!(view.name, "Test user");

        let argon = fast_argon2();
        let hash = repo.stored("test").unwrap().password_hash;
        assert!(verify_password(&argon, "rahasia", &hash).unwrap());
        assert!(!verify_password(&argon, "password", &hash).unwrap());
    }

    #[tokio::test]
    async fn update_name_only_keeps_hash() {
        let (repo, svc) = service();
        svc.register(register_input("test")).await.unwrap();
        let before = repo.stored("test").unwrap().password_hash;

        let input = UpdateUserRequest { name: Some("Updated name".into()), password: None };
        let view = svc.update("test", input).await.unwrap();
        assert_eq!(view.name, "Updated name");
        assert_eq!(repo.stored("test").unwrap().password_hash, before);
    }

    #[tokio::test]
    async fn update_requires_some_field() {
        let (_, svc) = service();
        svc.register(register_input("test")).await.unwrap();
        let err = svc.update("test", UpdateUserRequest::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let (repo, svc) = service();
        svc.register(register_input("test")).await.unwrap();
        let token = svc.login(login_input("test", "password")).await.unwrap().token;

        svc.logout("test").await.unwrap();
        assert!(repo.stored("test").unwrap().token.is_none());
        assert!(matches!(svc.authenticate(&token).await, Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn get_returns_public_view() {
        let (_, svc) = service();
        svc.register(register_input("test")).await.unwrap();
        assert_eq!(svc.get("test").await.unwrap().name, "Test user");
        assert!(matches!(svc.get("nobody").await, Err(ServiceError::NotFound(_))));
    }
}
