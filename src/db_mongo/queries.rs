use mongodb::{Collection, bson::{Bson, Document}};

use crate::error::Result;

/// Insert one document, reporting whether the store assigned it an `_id`
pub async fn insert_document(
    collection: &Collection<Document>,
    document: &Document,
) -> Result<bool> {
    let result = collection.insert_one(document).await?;

    Ok(!matches!(result.inserted_id, Bson::Null))
}

/// Fetch every document matching `filter`, fully materialized
pub async fn find_documents(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Vec<Document>> {
    let mut cursor = collection.find(filter).await?;

    let mut documents = Vec::new();
    while cursor.advance().await? {
        documents.push(cursor.deserialize_current()?);
    }

    Ok(documents)
}
