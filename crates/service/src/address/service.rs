use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Address, AddressRequest};
use super::repository::AddressRepository;
use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::validation::validate;

/// Address operations. The parent contact must belong to `owner`; that is
/// checked first, so a foreign contact yields "contact is not found" before
/// the address itself is looked at.
pub struct AddressService<C: ContactRepository, A: AddressRepository> {
    contacts: Arc<C>,
    addresses: Arc<A>,
}

impl<C: ContactRepository, A: AddressRepository> AddressService<C, A> {
    pub fn new(contacts: Arc<C>, addresses: Arc<A>) -> Self { Self { contacts, addresses } }

    async fn ensure_contact(&self, owner: &str, contact_id: i32) -> Result<(), ServiceError> {
        match self.contacts.find_owned(owner, contact_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("contact")),
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, owner: &str, contact_id: i32, input: AddressRequest) -> Result<Address, ServiceError> {
        validate(&input)?;
        self.ensure_contact(owner, contact_id).await?;
        let address = self.addresses.create(contact_id, input.into()).await?;
        info!(address_id = address.id, "address_created");
        Ok(address)
    }

    pub async fn get(&self, owner: &str, contact_id: i32, id: i32) -> Result<Address, ServiceError> {
        self.ensure_contact(owner, contact_id).await?;
        self.addresses
            .find(contact_id, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("address"))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, owner: &str, contact_id: i32, id: i32, input: AddressRequest) -> Result<Address, ServiceError> {
        validate(&input)?;
        self.ensure_contact(owner, contact_id).await?;
        let address = self
            .addresses
            .update(contact_id, id, input.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("address"))?;
        info!("address_updated");
        Ok(address)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, owner: &str, contact_id: i32, id: i32) -> Result<(), ServiceError> {
        self.ensure_contact(owner, contact_id).await?;
        if !self.addresses.delete(contact_id, id).await? {
            return Err(ServiceError::not_found("address"));
        }
        info!("address_removed");
        Ok(())
    }

    pub async fn list(&self, owner: &str, contact_id: i32) -> Result<Vec<Address>, ServiceError> {
        self.ensure_contact(owner, contact_id).await?;
        self.addresses.list(contact_id).await
    }
}
