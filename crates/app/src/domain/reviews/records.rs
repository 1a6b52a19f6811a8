//! Review Records

use jiff::Timestamp;

/// Review Record
#[derive(Debug, Clone)]
pub struct ReviewRecord {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
