//! Comment Records

use jiff::Timestamp;

/// Comment Record
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
