use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub firebase_project_id: String,
    pub client_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let port = get_env_or_default("PORT", "5000")
            .parse::<u16>()
            .expect("PORT must be a valid number");

        Self {
            database_url: expect_env("DATABASE_URL"),
            firebase_project_id: expect_env("FIREBASE_PROJECT_ID"),
            client_url: get_env_or_default("CLIENT_URL", "http://localhost:5173"),
            port,
        }
    }
}

// Helper function to panic with a clear error
fn expect_env(var_name: &str) -> String {
    env::var(var_name).unwrap_or_else(|_| panic!("Missing required env variable: {}", var_name))
}

fn get_env_or_default(var_name: &str, default: &str) -> String {
    env::var(var_name).unwrap_or_else(|_| default.to_string())
}
