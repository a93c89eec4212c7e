use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a purchasable product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Base price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Query definition used to price a product with requested coupons.
///
/// Carries the raw caller-supplied coupon ids; duplicates and empty input are
/// rejected by the pricing service, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductAmountQuery {
    /// Identifier of the product being priced.
    pub product_id: i32,
    /// Requested coupon (promotion) identifiers, in caller order.
    pub coupon_ids: Vec<i32>,
}

impl ProductAmountQuery {
    /// Construct a query for `product_id` with no coupons requested yet.
    pub fn new(product_id: i32) -> Self {
        Self {
            product_id,
            coupon_ids: Vec::new(),
        }
    }

    /// Attach the requested coupon ids, replacing any previously set.
    pub fn coupons(mut self, coupon_ids: impl Into<Vec<i32>>) -> Self {
        self.coupon_ids = coupon_ids.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_keeps_caller_order() {
        let query = ProductAmountQuery::new(1).coupons(vec![8, 1, 5]);

        assert_eq!(query.product_id, 1);
        assert_eq!(query.coupon_ids, vec![8, 1, 5]);
    }

    #[test]
    fn query_defaults_to_no_coupons() {
        let query = ProductAmountQuery::new(7);

        assert!(query.coupon_ids.is_empty());
    }
}
