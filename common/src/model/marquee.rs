use super::lenient;
use crate::resource::{CellStyle, Endpoints, Envelope, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

/// One entry of the scrolling announcement bar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marquee {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon: String,
}

impl Resource for Marquee {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("marquees", "Marquee")
            .plural("Marquees")
            .endpoints(
                Endpoints::new("/api/marquees/getall")
                    .create("/api/marquees/add")
                    .update("/api/marquees/update/{id}")
                    .delete("/api/marquees/delete/{id}"),
            )
            .list_envelope(Envelope::Keyed("marquees"))
            .field(FieldSpec::text("text", "Text").required())
            .field(
                FieldSpec::text("icon", "Icon class")
                    .default_value("fa-envelope")
                    .shown_as(CellStyle::Icon),
            )
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
