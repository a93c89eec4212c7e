use diesel::prelude::*;

use crate::domain::promotion_product::PromotionProduct as DomainPromotionProduct;
use crate::models::promotion::Promotion as DbPromotion;
use crate::models::promotion_product::PromotionProduct as DbPromotionProduct;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PromotionProductReader};

impl PromotionProductReader for DieselRepository {
    fn list_with_promotion_by_promotion_ids(
        &self,
        promotion_ids: &[i32],
    ) -> RepositoryResult<Vec<DomainPromotionProduct>> {
        use crate::schema::{promotion_products, promotions};

        if promotion_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let rows = promotion_products::table
            .inner_join(promotions::table)
            .filter(promotion_products::promotion_id.eq_any(promotion_ids))
            .order(promotion_products::id.asc())
            .load::<(DbPromotionProduct, DbPromotion)>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
