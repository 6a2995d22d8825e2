use super::lenient;
use chrono::{DateTime, Utc};
use crate::resource::{Endpoints, Envelope, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

/// A registered storefront user. Read and delete only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mobile: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
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

impl Resource for Customer {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("users", "User")
            .plural("Customers")
            .endpoints(
                Endpoints::new("/api/users/getallusers")
                    .detail("/api/users/user/{id}")
                    .delete("/api/users/deleteuser/{id}"),
            )
            .list_envelope(Envelope::Keyed("users"))
            .detail_envelope(Envelope::Keyed("user"))
            .field(FieldSpec::text("name", "Name"))
            .field(FieldSpec::text("email", "Email").input("email"))
            .field(FieldSpec::text("mobile", "Mobile").input("tel"))
            .field(FieldSpec::text("location", "Location"))
            .searchable(&["name", "email", "mobile", "location"])
            .export(
                "customers.csv",
                &[
                    ("ID", "_id"),
                    ("Name", "name"),
                    ("Email", "email"),
                    ("Mobile", "mobile"),
                    ("Location", "location"),
                ],
            )
            .delete_warning("This will delete the user permanently!")
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
