use super::lenient;
use crate::resource::{Endpoints, Envelope, FieldSpec, Resource, ResourceConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub customer: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
}

impl Resource for Order {
    fn config() -> ResourceConfig {
        ResourceConfig::builder("orders", "Order")
            .plural("Orders")
            .endpoints(Endpoints::new("/api/orders/getall"))
            .list_envelope(Envelope::Keyed("orders"))
            .field(FieldSpec::text("customer", "Customer"))
            .field(FieldSpec::number("amount", "Amount"))
            .field(FieldSpec::text("date", "Date"))
            .build()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
