use super::AuthError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, cost)?)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(password, password_hash)?)
}
