const DEV_TOKEN_SECRET: &str = "insecure-dev-secret-change-me";

/// Settings for the fixture schedule generator.
#[derive(Clone, Default)]
pub struct ScheduleSettings {
    /// Expose which team sits out each tour of an odd-sized field instead
    /// of dropping that information together with the bye fixtures.
    pub show_idle_team: bool,
}

/// Settings for password hashing and access token issuance.
#[derive(Clone)]
pub struct AuthSettings {
    pub token_secret: String,
    pub token_expire_minutes: i64,
    pub bcrypt_cost: u32,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_secret: token_secret_from_env(),
            token_expire_minutes: 120,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

fn token_secret_from_env() -> String {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            log::warn!("JWT_SECRET is not set, falling back to the development secret");
            DEV_TOKEN_SECRET.to_string()
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub auth: AuthSettings,
    pub schedule: ScheduleSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            auth: AuthSettings::default(),
            schedule: ScheduleSettings::default(),
        }
    }
}
