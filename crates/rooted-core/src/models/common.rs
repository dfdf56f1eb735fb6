//! Shared serde helpers for MongoDB models

/// Serde helper for `Option<DateTime<Utc>>` stored as BSON datetime.
/// Used by models that have optional datetime fields in MongoDB.
pub mod bson_datetime_option {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(dt) => {
                let bson_dt = bson::DateTime::from_chrono(*dt);
                Serialize::serialize(&bson_dt, serializer)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<bson::DateTime> = Option::deserialize(deserializer)?;
        Ok(opt.map(|dt| dt.to_chrono()))
    }
}

/// Render an optional ObjectId as a plain string for API responses
pub fn object_id_string(id: &Option<mongodb::bson::oid::ObjectId>) -> String {
    id.as_ref().map(|oid| oid.to_hex()).unwrap_or_default()
}
