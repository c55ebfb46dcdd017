use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenv().is_ok();

        let port = env::var("PORT")
            .ok()
            .map(|p| p.parse().expect("PORT must be a valid u16 number"))
            .unwrap_or(5000);

        // Absent DATABASE_URL means the local default store, chosen in db::connect_with_fallback.
        let database_url = env::var("DATABASE_URL").ok();

        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET missing, it is required");

        Self {
            port,
            database_url,
            jwt_secret,
        }
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}
