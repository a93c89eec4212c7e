use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::promotion::Promotion;

/// Association between a promotion and a product it may be applied to.
///
/// Fetched as a candidate for price calculation with its owning promotion
/// already joined in.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PromotionProduct {
    /// Unique identifier of the association row.
    pub id: i32,
    /// Identifier of the owning promotion.
    pub promotion_id: i32,
    /// Identifier of the product the promotion applies to.
    pub product_id: i32,
    /// The owning promotion, loaded by the repository join.
    pub promotion: Promotion,
    /// Timestamp for when the association record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the association record.
    pub updated_at: NaiveDateTime,
}
