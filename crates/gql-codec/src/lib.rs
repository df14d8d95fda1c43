//! Converts records to and from the store's flat property representation.

mod deserialize;
pub use deserialize::{deserialize, deserialize_record};

mod params;
pub use params::bind_params;

mod projector;
pub use projector::{project, Projector};

mod serialize;
pub use serialize::{serialize, serialize_record, serialize_with_key};

mod value;
pub use value::{from_property_value, to_property_value};

/// Prefix of every flattened map entry property.
pub const FLATTEN_PREFIX: &str = "g/kv_";

/// Separates the field name from the entry key in a flattened map property.
pub const FLATTEN_DIVIDER: &str = "_g/k_";

/// The property name a map entry is stored under.
pub fn flattened_name(field: &str, entry: &str) -> String {
    format!("{FLATTEN_PREFIX}{field}{FLATTEN_DIVIDER}{entry}")
}
