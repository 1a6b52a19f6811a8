//! User Records

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
