use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

lazy_static! {
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
    pub static ref ALLOWED_ORIGINS: Vec<String> = load_or_default(
        env::ALLOWED_ORIGINS_ENV_VAR,
        prod::ALLOWED_ORIGINS
    )
    .split(',')
    .map(|origin| origin.trim().to_owned())
    .filter(|origin| !origin.is_empty())
    .collect();
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
}

pub const DEFAULT_LOG_FILTER: &str = "info";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
    pub const ALLOWED_ORIGINS: &str =
        "http://localhost:8080,http://127.0.0.1:8080";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
