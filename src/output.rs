//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::models::parse_timestamp;
use crate::{HoldType, Person, PersonHold};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render a timestamp in UTC, or as received if it can't be read.
fn display_timestamp(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |t| t.format(TIMESTAMP_FORMAT).to_string())
}

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Person {
    fn pretty_print(&self) -> String {
        let header = format!("Person: {}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];

        if let Some(name) = self.display_name() {
            lines.push(format!("Name:           {}", name));
        }

        if let Some(rcid) = self.external_id() {
            lines.push(format!("Colleague ID:   {}", rcid));
        }

        for credential in self
            .credentials
            .iter()
            .filter(|c| c.credential_type != crate::COLLEAGUE_PERSON_ID)
        {
            lines.push(format!(
                "Credential:     {} = {}",
                credential.credential_type, credential.value
            ));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for PersonHold {
    fn pretty_print(&self) -> String {
        let header = format!("Hold: {}", self.guid().unwrap_or("(no id)"));
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];

        if let Some(type_guid) = self.type_guid() {
            lines.push(format!("Type:           {}", type_guid));
        }

        if let Some(category) = self.hold_type.as_ref().and_then(|t| t.category.as_ref()) {
            lines.push(format!("Category:       {}", category));
        }

        if let Some(person) = self.person_guid() {
            lines.push(format!("Person:         {}", person));
        }

        if let Some(ref start) = self.start_on {
            lines.push(format!("Starts:         {}", display_timestamp(start)));
        }

        match self.end_on {
            Some(ref end) => lines.push(format!("Ends:           {}", display_timestamp(end))),
            None => lines.push("Ends:           (open)".to_string()),
        }

        if let Some(ref comment) = self.comment {
            lines.push(format!("Comment:        {}", comment));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for HoldType {
    fn pretty_print(&self) -> String {
        let header = format!("Hold Type: {}", self.code);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider, format!("GUID:           {}", self.id)];

        if let Some(ref title) = self.title {
            lines.push(format!("Title:          {}", title));
        }

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        lines.join("\n")
    }
}
