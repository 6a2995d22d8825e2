use super::lenient;
use chrono::{DateTime, Utc};
use crate::resource::{CellStyle, Endpoints, Envelope, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

/// Homepage banner. Images are stored as bare file names under
/// `/uploads/banners/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub images: Vec<String>,
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

impl Resource for Banner {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("banners", "Banner")
            .plural("Banners")
            .endpoints(
                Endpoints::new("/api/banners/getallbanners")
                    .detail("/api/banners/banner/{id}")
                    .create("/api/banners/create")
                    .update("/api/banners/updatebanner/{id}")
                    .delete("/api/banners/deletebanner/{id}"),
            )
            .list_envelope(Envelope::Keyed("banners"))
            .detail_envelope(Envelope::Keyed("banner"))
            .field(FieldSpec::text("title", "Title").required())
            .field(FieldSpec::text("name", "Name").required())
            .field(
                FieldSpec::long_text("content", "Content")
                    .required()
                    .shown_as(CellStyle::Truncate(60)),
            )
            .field(FieldSpec::images("images", "Images").stored_under("/uploads/banners"))
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
