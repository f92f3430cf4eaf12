//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::EthosClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be resolved to exactly
/// one record from an identifier.
///
/// # Example
///
/// ```ignore
/// use ethos_client::{EthosClient, Person, Get};
///
/// let client = EthosClient::from_env().await?;
/// let person = Person::get(&client, "0123456".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EthosError::NotFound`] if nothing matches, or an
    /// error if the request fails.
    async fn get(client: &EthosClient, id: Self::Id) -> Result<Self>;
}
