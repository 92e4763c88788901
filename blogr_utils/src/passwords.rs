use argon2::Config;
use rand::Rng;

pub use argon2::Error as PasswordError;

#[cfg(not(any(test, feature = "test-utils")))]
fn password_config() -> Config<'static> {
    Config::default()
}

// Fast and weak
#[cfg(any(test, feature = "test-utils"))]
fn password_config() -> Config<'static> {
    Config { mem_cost: 64, time_cost: 1, lanes: 1, ..Config::default() }
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let mut rng = rand::rngs::OsRng;
    let salt: [u8; 32] = rng.gen();
    argon2::hash_encoded(password.as_bytes(), &salt, &password_config())
}

pub fn verify_password(
    password_hash: &str,
    password: &str,
) -> Result<bool, PasswordError> {
    argon2::verify_encoded(password_hash, password.as_bytes())
}
