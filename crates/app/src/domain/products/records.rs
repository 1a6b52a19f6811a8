//! Product Records

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
}
