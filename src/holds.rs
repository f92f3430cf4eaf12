//! Hold lifecycle operations.
//!
//! Each operation issues its requests one after another; a lookup that
//! matches nothing fails with [`EthosError::NotFound`] rather than yielding
//! an empty value.

use chrono::Utc;

use crate::client::EthosClient;
use crate::error::{EthosError, Result};
use crate::models::{
    find_hold_type_by_code, HoldType, HoldTypeQuery, Person, PersonHold, PersonHoldQuery,
};
use crate::traits::{Get, List, Update};

impl EthosClient {
    /// Get a person record by Colleague ID (RCID).
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::NotFound`] if no person carries the credential.
    pub async fn get_person_by_external_id(&self, rcid: &str) -> Result<Person> {
        Person::get(self, rcid.to_string()).await
    }

    /// Get every hold for a person GUID, in API order.
    pub async fn get_holds_by_person_guid(&self, guid: &str) -> Result<Vec<PersonHold>> {
        PersonHold::list(self, &PersonHoldQuery::for_person(guid)).await
    }

    /// Get every hold for a person identified by RCID.
    pub async fn get_holds_by_external_id(&self, rcid: &str) -> Result<Vec<PersonHold>> {
        let person = self.get_person_by_external_id(rcid).await?;
        self.get_holds_by_person_guid(person.guid()).await
    }

    /// Get the first hold of the given hold type for a person.
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::NotFound`] if the person has no hold of that type.
    #[tracing::instrument(skip(self))]
    pub async fn get_hold_by_external_id_and_type_guid(
        &self,
        rcid: &str,
        type_guid: &str,
    ) -> Result<PersonHold> {
        self.get_holds_by_external_id(rcid)
            .await?
            .into_iter()
            .find(|hold| hold.has_type(type_guid))
            .ok_or_else(|| EthosError::NotFound {
                entity_type: "person hold",
                id: format!("{rcid}/{type_guid}"),
            })
    }

    /// Replace a hold with the given representation.
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::Validation`] without touching the network if the
    /// hold has no `id`, and [`EthosError::Remote`] if the API rejects it.
    #[tracing::instrument(skip(self, hold), fields(hold_id = hold.id.as_deref()))]
    pub async fn update_hold(&self, hold: &PersonHold) -> Result<()> {
        let id = hold.guid().ok_or_else(|| {
            EthosError::Validation("person hold must have an id to be updated".to_string())
        })?;

        PersonHold::update(self, id.to_string(), hold.clone()).await
    }

    /// Get the whole hold type catalog.
    pub async fn list_hold_types(&self) -> Result<Vec<HoldType>> {
        HoldType::list(self, &HoldTypeQuery).await
    }

    /// Resolve a hold type code (e.g., "ACC") to its GUID.
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::NotFound`] if no catalog entry has the code.
    #[tracing::instrument(skip(self))]
    pub async fn get_hold_type_guid_by_code(&self, code: &str) -> Result<String> {
        let catalog = self.list_hold_types().await?;
        find_hold_type_by_code(&catalog, code)
            .map(|t| t.id.clone())
            .ok_or_else(|| EthosError::NotFound {
                entity_type: "hold type",
                id: code.to_string(),
            })
    }

    /// End a person's hold of the given hold type as of now.
    ///
    /// `endOn` is set to the current UTC time; `comment` replaces the hold's
    /// comment only when non-empty. Returns the hold as submitted.
    #[tracing::instrument(skip(self, comment))]
    pub async fn end_hold_by_external_id_and_type_guid(
        &self,
        rcid: &str,
        type_guid: &str,
        comment: &str,
    ) -> Result<PersonHold> {
        let mut hold = self
            .get_hold_by_external_id_and_type_guid(rcid, type_guid)
            .await?;

        hold.end(Utc::now(), comment);
        self.update_hold(&hold).await?;

        tracing::info!(hold_id = hold.guid(), "ended person hold");
        Ok(hold)
    }

    /// End a person's hold identified by hold type code.
    #[tracing::instrument(skip(self, comment))]
    pub async fn end_hold_by_external_id_and_type_code(
        &self,
        rcid: &str,
        code: &str,
        comment: &str,
    ) -> Result<PersonHold> {
        let type_guid = self.get_hold_type_guid_by_code(code).await?;
        self.end_hold_by_external_id_and_type_guid(rcid, &type_guid, comment)
            .await
    }
}
