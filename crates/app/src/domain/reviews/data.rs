//! Reviews Data

/// New Review Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub content: String,
}
