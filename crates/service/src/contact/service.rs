use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Contact, ContactRequest, SearchContactRequest};
use super::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, Paging};
use crate::validation::validate;

/// Contact book operations for an authenticated owner.
/// A contact belonging to someone else is reported exactly like a missing one.
pub struct ContactService<R: ContactRepository> {
    repo: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, owner: &str, input: ContactRequest) -> Result<Contact, ServiceError> {
        validate(&input)?;
        let contact = self.repo.create(owner, input.into()).await?;
        info!(contact_id = contact.id, "contact_created");
        Ok(contact)
    }

    pub async fn get(&self, owner: &str, id: i32) -> Result<Contact, ServiceError> {
        self.repo
            .find_owned(owner, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("contact"))
    }

    /// Full replacement: omitted optional fields are cleared.
    #[instrument(skip(self, input))]
    pub async fn update(&self, owner: &str, id: i32, input: ContactRequest) -> Result<Contact, ServiceError> {
        validate(&input)?;
        let contact = self
            .repo
            .update(owner, id, input.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("contact"))?;
        info!(contact_id = contact.id, "contact_updated");
        Ok(contact)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, owner: &str, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(owner, id).await? {
            return Err(ServiceError::not_found("contact"));
        }
        info!("contact_removed");
        Ok(())
    }

    pub async fn search(&self, owner: &str, query: SearchContactRequest) -> Result<Page<Contact>, ServiceError> {
        validate(&query)?;
        let pagination = query.pagination();
        let (data, total) = self.repo.search(owner, &query.filter(), pagination).await?;
        Ok(Page { data, paging: Paging::new(pagination, total) })
    }
}
