use crate::error::CompassError;

/// Fixed bcrypt cost factor.
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, CompassError> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, CompassError> {
    Ok(bcrypt::verify(password, hash)?)
}
