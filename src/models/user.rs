use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// Externally owned user record. This service reads it, never writes it,
/// and never schematizes it beyond the two fields the lookup depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        rename = "_id",
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    pub id: ObjectId,
    pub age: i64,
    /// Whatever else the owning system stored; passed through untouched.
    #[serde(flatten)]
    pub extra: mongodb::bson::Document,
}
