use crate::{schema::ModelSchema, stmt::ValueRecord, Result};

/// A record type that can be stored in and queried from the store.
///
/// The record produced by [`Model::to_record`] and consumed by
/// [`Model::load`] holds one value per field of [`Model::schema`], in
/// declaration order.
pub trait Model: Sized {
    /// The schema descriptor for this record type, built once and cached.
    fn schema() -> &'static ModelSchema;

    /// Lower the record into its field values.
    fn to_record(&self) -> ValueRecord;

    /// Rebuild the record from its field values.
    fn load(record: ValueRecord) -> Result<Self>;
}
