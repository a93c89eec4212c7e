use crate::db::{DbConnection, DbPool};
use crate::domain::product::Product;
use crate::domain::promotion_product::PromotionProduct;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;
pub mod promotion_product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
}

/// Read-only operations over promotion-product association records.
pub trait PromotionProductReader {
    /// Fetch the associations whose promotion id is in `promotion_ids`,
    /// joined with their owning promotion, ordered by association id.
    fn list_with_promotion_by_promotion_ids(
        &self,
        promotion_ids: &[i32],
    ) -> RepositoryResult<Vec<PromotionProduct>>;
}
