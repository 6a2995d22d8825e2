use super::lenient;
use chrono::{DateTime, Utc};
use crate::resource::{
    CellStyle, Endpoints, Envelope, FieldSpec, PageImage, Resource, ResourceConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub answer: String,
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

impl Resource for Faq {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("faqs", "FAQ")
            .plural("FAQs")
            .endpoints(
                Endpoints::new("/api/admin/getallfaqs")
                    .create("/api/admin/createfaq")
                    .update("/api/admin/updatefaq/{id}")
                    .delete("/api/admin/deletefaq/{id}")
                    .remove_page_image("/api/admin/faq-image"),
            )
            .list_envelope(Envelope::Keyed("data"))
            .field(FieldSpec::text("question", "Question").required())
            .field(
                FieldSpec::long_text("answer", "Answer")
                    .required()
                    .shown_as(CellStyle::Truncate(80)),
            )
            .batch_create("faqs")
            .page_image(PageImage {
                part: "image",
                label: "FAQ image",
                response_key: "faqImage",
                storage_prefix: None,
            })
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
