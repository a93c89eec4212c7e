use mockall::mock;

use super::{ProductReader, PromotionProductReader};
use crate::domain::{product::Product, promotion_product::PromotionProduct};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    }
}

mock! {
    pub PromotionProductReader {}

    impl PromotionProductReader for PromotionProductReader {
        fn list_with_promotion_by_promotion_ids(&self, promotion_ids: &[i32]) -> RepositoryResult<Vec<PromotionProduct>>;
    }
}
