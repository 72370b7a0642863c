use mongodb::{
    Client, Collection,
    bson::Document,
};
use serde::Serialize;

use crate::config::ShelterConfig;
use crate::db_mongo::{self, queries};
use crate::error::Result;
use crate::validation::into_document;

/// Create/read access to a single collection of shelter records.
///
/// The database and collection are fixed when the shelter is built; every
/// operation targets that collection.
pub struct AnimalShelter {
    collection: Collection<Document>,
}

impl AnimalShelter {
    /// Connect with the given credentials and bind the configured collection.
    ///
    /// Fails with the driver's error if the server cannot be reached or refuses
    /// the credentials.
    pub async fn connect(config: &ShelterConfig) -> Result<Self> {
        let client = db_mongo::create_client(&config.connection_uri()).await?;

        tracing::info!(
            "Using collection {}.{} on {}:{}",
            config.database,
            config.collection,
            config.host,
            config.port
        );

        Ok(Self::with_client(&client, &config.database, &config.collection))
    }

    /// Bind a collection on an existing client. No round-trip to the server.
    pub fn with_client(client: &Client, database: &str, collection: &str) -> Self {
        let collection = db_mongo::get_database(client, database).collection::<Document>(collection);

        Self { collection }
    }

    #[cfg(test)]
    fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// Insert `document` as a new record.
    ///
    /// Returns `true` when the store acknowledged the insert with a new `_id`.
    /// Empty, absent or non-mapping input is rejected before the store is
    /// contacted.
    pub async fn create<T>(&self, document: &T) -> Result<bool>
    where
        T: Serialize + ?Sized,
    {
        let document = into_document(document, "document")?;

        let inserted = queries::insert_document(&self.collection, &document).await?;
        tracing::debug!(
            "Inserted document into {} (acknowledged: {})",
            self.collection.name(),
            inserted
        );

        Ok(inserted)
    }

    /// All records matching `criteria`, using the server's own matching rules.
    pub async fn read<Q>(&self, criteria: &Q) -> Result<Vec<Document>>
    where
        Q: Serialize + ?Sized,
    {
        let filter = into_document(criteria, "query")?;

        let documents = queries::find_documents(&self.collection, filter).await?;
        tracing::debug!(
            "Read {} documents from {}",
            documents.len(),
            self.collection.name()
        );

        Ok(documents)
    }
}
