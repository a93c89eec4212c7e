use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::promotion_product::PromotionProduct as DomainPromotionProduct;
use crate::models::promotion::Promotion as DbPromotion;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::promotion_products)]
pub struct PromotionProduct {
    pub id: i32,
    pub promotion_id: i32,
    pub product_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<(PromotionProduct, DbPromotion)> for DomainPromotionProduct {
    fn from((association, promotion): (PromotionProduct, DbPromotion)) -> Self {
        Self {
            id: association.id,
            promotion_id: association.promotion_id,
            product_id: association.product_id,
            promotion: promotion.into(),
            created_at: association.created_at,
            updated_at: association.updated_at,
        }
    }
}
