use std::time::Duration;

use animal_shelter::{AnimalShelter, ShelterConfig};
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::{ContainerAsync, GenericImage, ImageExt, runners::AsyncRunner};

pub const ROOT_USER: &str = "shelter";
pub const ROOT_PASSWORD: &str = "p@ss:word!";

/// A throwaway MongoDB server and a shelter connected to it.
///
/// The container is removed when this is dropped, taking every test record with it.
pub struct TestShelter {
    pub shelter: AnimalShelter,
    pub port: u16,
    _container: ContainerAsync<GenericImage>,
}

pub async fn start_shelter() -> TestShelter {
    let container = GenericImage::new("mongo", "7.0")
        .with_exposed_port(27017.tcp())
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
        .with_startup_timeout(Duration::from_secs(120))
        .with_env_var("MONGO_INITDB_ROOT_USERNAME", ROOT_USER)
        .with_env_var("MONGO_INITDB_ROOT_PASSWORD", ROOT_PASSWORD)
        .start()
        .await
        .expect("Failed to start MongoDB container");

    let port = container
        .get_host_port_ipv4(27017)
        .await
        .expect("mapped port for 27017");

    let config = ShelterConfig {
        user: ROOT_USER.to_string(),
        password: ROOT_PASSWORD.to_string(),
        host: "127.0.0.1".to_string(),
        port,
        database: "aac".to_string(),
        collection: "animals".to_string(),
    };

    // The image restarts mongod once after creating the root user; the driver's
    // server selection rides out that gap.
    let shelter = AnimalShelter::connect(&config)
        .await
        .expect("connect to MongoDB container");

    TestShelter {
        shelter,
        port,
        _container: container,
    }
}
