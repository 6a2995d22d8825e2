use super::lenient;
use crate::resource::{CellStyle, Endpoints, Envelope, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

/// Store contact details; at most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: String,
}

impl Resource for ContactInfo {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("contact", "Contact info")
            .plural("Contact info")
            .endpoints(
                Endpoints::new("/api/contactus/get")
                    .create("/api/contactus/create")
                    .update("/api/contactus/update/{id}"),
            )
            .list_envelope(Envelope::Keyed("data"))
            .field(FieldSpec::text("email", "Email").input("email").required())
            .field(FieldSpec::text("phone", "Phone").input("tel").required())
            .field(FieldSpec::long_text("address", "Address").required())
            .singleton()
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// A message sent through the storefront contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub formatted_date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub formatted_time: String,
}

impl Resource for ContactSubmission {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("submissions", "Submission")
            .plural("Submissions")
            .endpoints(
                Endpoints::new("/api/contactus/submissions")
                    .delete("/api/contactus/submissions/{id}"),
            )
            .list_envelope(Envelope::Keyed("data"))
            .field(FieldSpec::text("name", "Name"))
            .field(FieldSpec::text("email", "Email"))
            .field(FieldSpec::text("number", "Number"))
            .field(FieldSpec::long_text("message", "Message").shown_as(CellStyle::Truncate(20)))
            .field(FieldSpec::text("formattedDate", "Date"))
            .field(FieldSpec::text("formattedTime", "Time"))
            .page_size(10)
            .delete_warning("This submission will be permanently deleted.")
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
