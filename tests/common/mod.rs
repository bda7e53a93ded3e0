use mongodb::bson::{doc, oid::ObjectId};
use user_service::config::UserConfig;
use user_service::services::MongoDb;
use user_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("users_test_{}", Uuid::new_v4());

        let mut config = UserConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Insert a user record the way the owning system would store it.
    pub async fn seed_user(&self, id: ObjectId, age: i32, name: &str) {
        self.db
            .database()
            .collection::<mongodb::bson::Document>("users")
            .insert_one(doc! { "_id": id, "age": age, "name": name }, None)
            .await
            .expect("Failed to seed user");
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
