pub mod config;
pub mod db_mongo;
pub mod error;
pub mod shelter;
pub mod validation;

pub use config::ShelterConfig;
pub use db_mongo::models::Animal;
pub use error::{Result, ShelterError};
pub use shelter::AnimalShelter;
