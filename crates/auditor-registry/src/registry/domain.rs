use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for stored auditor records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditorId(pub String);

impl AuditorId {
    /// Mints a fresh random identifier. The upstream export carries no stable
    /// key, so every ingestion run assigns new ones.
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One row of the auditor directory. All fields are carried as text; the
/// registration date in particular is whatever the export said, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auditor {
    pub auditor_id: AuditorId,
    pub name: String,
    pub company: String,
    pub registration_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_unique() {
        let first = AuditorId::mint();
        let second = AuditorId::mint();
        assert_ne!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn auditor_serializes_with_flat_string_fields() {
        let auditor = Auditor {
            auditor_id: AuditorId("abc-123".to_string()),
            name: "JANE EXAMPLE".to_string(),
            company: "EXAMPLE PARTNERS".to_string(),
            registration_date: "14/02/2005".to_string(),
        };

        let json = serde_json::to_value(&auditor).expect("auditor serializes");
        assert_eq!(json["auditor_id"], "abc-123");
        assert_eq!(json["name"], "JANE EXAMPLE");
        assert_eq!(json["company"], "EXAMPLE PARTNERS");
        assert_eq!(json["registration_date"], "14/02/2005");
    }
}
