use bestiary_service::config::{Config, ServerConfig};
use bestiary_service::startup::{AppState, Application};

pub struct TestApp {
    pub address: String,
    pub state: AppState,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            service_name: "bestiary-service-test".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let state = app.state();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, state }
    }

    /// Current number of creatures in the registry.
    pub async fn registry_len(&self) -> usize {
        self.state.bestiary.registry().len().await
    }
}
