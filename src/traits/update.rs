//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::EthosClient;
use crate::error::Result;

/// Update an existing entity.
///
/// # Example
///
/// ```ignore
/// use ethos_client::{EthosClient, PersonHold, Update};
///
/// let client = EthosClient::from_env().await?;
/// PersonHold::update(&client, hold_id, hold).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Replace the entity with the given representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EthosError::Remote`] if the API rejects the update.
    async fn update(client: &EthosClient, id: Self::Id, params: Self::Params) -> Result<()>;
}
