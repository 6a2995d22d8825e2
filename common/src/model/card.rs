use super::lenient;
use crate::resource::{Endpoints, Envelope, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
}

impl Resource for Card {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("cards", "Card")
            .plural("Cards")
            .endpoints(Endpoints::new("/api/cards/getall"))
            .list_envelope(Envelope::Keyed("cards"))
            .field(FieldSpec::text("title", "Title"))
            .field(FieldSpec::text("type", "Type"))
            .field(FieldSpec::text("status", "Status"))
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_plain_id() {
        let card: Card =
            serde_json::from_str(r#"{"id":1,"title":"Premium Card","type":"Gold","status":"Active"}"#)
                .unwrap();
        assert_eq!(card.id(), "1");
        assert_eq!(card.field_value("type").as_deref(), Some("Gold"));
    }
}
