use anyhow::{Context, Result};
use mongodb::bson::doc;
use tracing_subscriber::EnvFilter;

use animal_shelter::{Animal, AnimalShelter, ShelterConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ShelterConfig::from_env().context("Failed to load MongoDB configuration")?;
    let shelter = AnimalShelter::connect(&config)
        .await
        .context("Failed to connect to MongoDB")?;

    let murph = Animal::new("Murph", "dog", 1, "German Shepherd");
    let insert_result = shelter
        .create(&murph)
        .await
        .context("Failed to insert example record")?;
    tracing::info!("Insert Result: {}", insert_result);

    let read_result = shelter
        .read(&doc! { "name": "Murph" })
        .await
        .context("Failed to read example record")?;
    tracing::info!("Read Result: {} documents", read_result.len());

    println!("{}", serde_json::to_string_pretty(&read_result)?);

    Ok(())
}
