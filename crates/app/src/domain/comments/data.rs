//! Comments Data

/// New Comment Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_id: i32,
    pub product_id: i32,
    pub content: String,
}

/// Comment Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentUpdate {
    pub content: String,
}
