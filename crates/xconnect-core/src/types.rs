#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColleagueRecord {
    /// Represents one colleague entry in the directory.
    ///
    /// `id` is assigned once at creation and never changes. Every other field is
    /// free text; absent fields decode as empty strings.
    #[cfg_attr(feature = "serde", serde(alias = "_id"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub surname: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub department: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Notes from the last catch-up. Persisted under the `protocol` key.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "protocol", alias = "lastProtocol")
    )]
    pub last_protocol: String,
}

impl ColleagueRecord {
    pub fn from_fields(id: impl Into<String>, fields: RecordFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            surname: fields.surname,
            department: fields.department,
            description: fields.description,
            last_protocol: fields.last_protocol,
        }
    }

    /// The record's editable fields, without its identity.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            department: self.department.clone(),
            description: self.description.clone(),
            last_protocol: self.last_protocol.clone(),
        }
    }

    /// Case-insensitive substring match over every free-text field.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        [
            &self.name,
            &self.surname,
            &self.department,
            &self.description,
            &self.last_protocol,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordFields {
    /// The full field set supplied to create/update. Update replaces all of them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub surname: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub department: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "protocol", alias = "lastProtocol")
    )]
    pub last_protocol: String,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProfileSnapshot {
    /// The user's own public identity, shared through the exchange payload.
    ///
    /// Never stored inside the directory; it has its own storage keys.
    pub name: String,
    pub surname: String,
    pub department: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> ColleagueRecord {
        ColleagueRecord {
            id: "1".to_string(),
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            department: "R&D".to_string(),
            description: "met at expo".to_string(),
            last_protocol: "discussed roadmap".to_string(),
        }
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let r = ann();
        assert!(r.matches("expo"));
        assert!(r.matches("ANN"));
        assert!(r.matches("r&d"));
        assert!(r.matches("Roadmap"));
        assert!(!r.matches("sales"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(ann().matches(""));
        assert!(ColleagueRecord::from_fields("2", RecordFields::default()).matches(""));
    }

    #[test]
    fn fields_roundtrip_through_from_fields() {
        let r = ann();
        let rebuilt = ColleagueRecord::from_fields(r.id.clone(), r.fields());
        assert_eq!(rebuilt, r);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_names_use_protocol_and_accept_legacy_aliases() {
        let v = serde_json::to_value(ann()).unwrap();
        assert_eq!(v["protocol"], "discussed roadmap");
        assert!(v.get("last_protocol").is_none());

        let legacy: ColleagueRecord =
            serde_json::from_str(r#"{"_id":"9","name":"Bo","lastProtocol":"x"}"#).unwrap();
        assert_eq!(legacy.id, "9");
        assert_eq!(legacy.last_protocol, "x");
        assert_eq!(legacy.surname, "");
    }
}
