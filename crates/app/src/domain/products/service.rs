//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    data::NewProduct, errors::ProductsServiceError, records::ProductRecord,
};

const LIST_PRODUCTS_SQL: &str = "SELECT id, name, description, price FROM products ORDER BY id";

const GET_PRODUCT_SQL: &str = "SELECT id, name, description, price FROM products WHERE id = $1";

const CREATE_PRODUCT_SQL: &str = "INSERT INTO products (name, description, price) \
     VALUES ($1, $2, $3) RETURNING id, name, description, price";

const DELETE_PRODUCT_SQL: &str = "DELETE FROM products WHERE id = $1";

#[derive(Debug, Clone)]
pub struct PgProductsService {
    pool: PgPool,
}

impl PgProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
        })
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(ProductsServiceError::from)
    }

    async fn get_product(&self, id: i32) -> Result<ProductRecord, ProductsServiceError> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(ProductsServiceError::from)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await
            .map_err(ProductsServiceError::from)
    }

    async fn delete_product(&self, id: i32) -> Result<(), ProductsServiceError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(ProductsServiceError::from)?
            .rows_affected();

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product by id.
    async fn get_product(&self, id: i32) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product record.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product by id.
    async fn delete_product(&self, id: i32) -> Result<(), ProductsServiceError>;
}
