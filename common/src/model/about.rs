use super::lenient;
use chrono::{DateTime, Utc};
use crate::resource::{CellStyle, Endpoints, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

/// The single "about us" text block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for About {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("about", "About Us")
            .plural("About Us")
            .endpoints(
                Endpoints::new("/api/aboutus/about")
                    .create("/api/aboutus/create-about")
                    .update("/api/aboutus/updateabout/{id}"),
            )
            .field(FieldSpec::long_text("description", "Description").required())
            .field(FieldSpec::image("image", "Image"))
            .singleton()
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// A statistic card shown below the about text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutCard {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub count: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for AboutCard {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("aboutcards", "Card")
            .plural("About Cards")
            .endpoints(
                Endpoints::new("/api/aboutcard/getallcards")
                    .create("/api/aboutcard/create-card")
                    .update("/api/aboutcard/updatecard/{id}")
                    .delete("/api/aboutcard/deletecard/{id}"),
            )
            .field(FieldSpec::text("title", "Title").required())
            .field(
                FieldSpec::long_text("description", "Description")
                    .required()
                    .shown_as(CellStyle::Truncate(60)),
            )
            .field(FieldSpec::number("count", "Count").required())
            .field(FieldSpec::image("image", "Image"))
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
