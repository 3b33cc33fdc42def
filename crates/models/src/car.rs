use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ModelError;

/// Advisory status labels. The `status` field is not restricted to these.
pub mod status {
    pub const ON_THE_WAY: &str = "on the way";
    pub const IN_STOCK: &str = "in stock";
    pub const SOLD_OUT: &str = "sold out";
    pub const WITHDRAWN_FROM_SALE: &str = "withdrawn from sale";

    pub const ALL: [&str; 4] = [ON_THE_WAY, IN_STOCK, SOLD_OUT, WITHDRAWN_FROM_SALE];
}

/// A car listing. Identity is assigned by the store, never embedded here.
///
/// Fields missing from an incoming payload, or set to `null`, decode to their zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mileage: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CarRecord {
    pub fn new(brand: &str, model: &str, price: u64, status: &str, mileage: u64) -> Self {
        Self {
            brand: brand.to_string(),
            model: model.to_string(),
            price,
            status: status.to_string(),
            mileage,
        }
    }

    /// The record every fresh inventory starts with.
    pub fn seed() -> Self {
        Self::new("nissan", "almera", 20000, status::IN_STOCK, 30000)
    }

    /// Decode a request body. Only JSON well-formedness and field types are checked.
    /// A bare `null` body yields the zero-valued record.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        serde_json::from_slice::<Option<Self>>(bytes)
            .map(Option::unwrap_or_default)
            .map_err(|e| ModelError::Decode(e.to_string()))
    }

    pub fn has_known_status(&self) -> bool {
        status::ALL.contains(&self.status.as_str())
    }
}
