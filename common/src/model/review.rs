use super::lenient;
use chrono::{DateTime, Utc};
use crate::resource::{CellStyle, Endpoints, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

pub const RATINGS: &[&str] = &["1", "2", "3", "4", "5"];

/// Customer testimonial. `image` is a server-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rating: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub comment: String,
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

impl Resource for Review {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("reviews", "Review")
            .plural("Reviews")
            .endpoints(
                Endpoints::new("/api/reviews/allreviews")
                    .create("/api/reviews/create-review")
                    .update("/api/reviews/updatereview/{id}")
                    .delete("/api/reviews/deletereview/{id}"),
            )
            .field(FieldSpec::text("name", "Name").required())
            .field(
                FieldSpec::choice("rating", "Rating", RATINGS)
                    .default_value("5")
                    .shown_as(CellStyle::Stars(5)),
            )
            .field(
                FieldSpec::long_text("comment", "Comment")
                    .required()
                    .shown_as(CellStyle::Truncate(80)),
            )
            .field(FieldSpec::image("image", "Image"))
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
    fn numeric_rating_reads_as_enum_option() {
        let review: Review =
            serde_json::from_str(r#"{"_id":"r1","name":"Li","rating":4,"comment":"Good"}"#).unwrap();
        assert_eq!(review.rating, "4");
        assert!(RATINGS.contains(&review.rating.as_str()));
        assert!(review.image_refs("image").is_empty());
    }
}
