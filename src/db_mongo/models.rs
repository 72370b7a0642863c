use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;

/// One intake record in the shelter collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub animal: String,
    pub age: i32,
    pub breed: String,
}

impl Animal {
    pub fn new(
        name: impl Into<String>,
        animal: impl Into<String>,
        age: i32,
        breed: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            animal: animal.into(),
            age,
            breed: breed.into(),
        }
    }
}
