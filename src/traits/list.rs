//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::EthosClient;
use crate::error::Result;

/// List entities matching a query.
///
/// The Ethos resources used here return their whole collection in one
/// response, so there is no paging.
///
/// # Example
///
/// ```ignore
/// use ethos_client::{EthosClient, PersonHold, PersonHoldQuery, List};
///
/// let client = EthosClient::from_env().await?;
/// let holds = PersonHold::list(&client, &PersonHoldQuery::for_person(guid)).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Query parameters for filtering.
    type Query: Send + Sync;

    /// List entities matching the query, in the order the API returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &EthosClient, query: &Self::Query) -> Result<Vec<Self>>;
}
