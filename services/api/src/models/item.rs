//! Item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Document;

/// Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create an unsaved item stamped with the current time
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

impl Document for Item {
    const COLLECTION: &'static str = "items";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Item creation payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl From<NewItem> for Item {
    fn from(payload: NewItem) -> Self {
        Item::new(payload.name, payload.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_item_is_unsaved_and_stamped() {
        let before = Utc::now();
        let item = Item::new("pen", "blue");

        assert_eq!(item.id, None);
        assert!(item.created_at >= before);
        assert!(item.created_at <= Utc::now());
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let mut item = Item::new("pen", "blue");
        item.id = Some("abc".to_string());

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["name"], "pen");
        assert_eq!(value["description"], "blue");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_payload_ignores_client_id_and_timestamp() {
        let payload: NewItem = serde_json::from_value(json!({
            "id": "forged",
            "name": "pen",
            "createdAt": "2000-01-01T00:00:00Z"
        }))
        .unwrap();

        let item = Item::from(payload);
        assert_eq!(item.id, None);
        assert_eq!(item.name, "pen");
        assert_eq!(item.description, "");
        assert!(item.created_at.timestamp() > 946_684_800);
    }
}
