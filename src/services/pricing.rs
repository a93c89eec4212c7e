use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::domain::product::{Product, ProductAmountQuery};
use crate::domain::promotion_product::PromotionProduct;
use crate::repository::{ProductReader, PromotionProductReader};
use crate::services::{PricingError, ServiceResult};

/// Computes the final amount for the queried product after applying the
/// requested coupon.
///
/// Loads the product, validates the raw coupon ids, fetches the matching
/// promotion associations and hands them to [`compute_amount`]. Every
/// violation maps to exactly one [`PricingError`] kind and aborts the request.
pub fn get_product_amount<R>(repo: &R, query: &ProductAmountQuery) -> ServiceResult<i64>
where
    R: ProductReader + PromotionProductReader + ?Sized,
{
    let product = repo
        .get_product_by_id(query.product_id)?
        .ok_or(PricingError::NotExistProduct)?;

    validate_coupon_ids(&query.coupon_ids)?;

    let candidates = repo.list_with_promotion_by_promotion_ids(&query.coupon_ids)?;
    if candidates.is_empty() {
        return Err(PricingError::NotExistPromotion);
    }

    let now = chrono::Utc::now().naive_utc();
    compute_amount(&product, &candidates, now)
}

/// Rejects empty and duplicated coupon-id input before any association lookup.
fn validate_coupon_ids(coupon_ids: &[i32]) -> ServiceResult<()> {
    if coupon_ids.is_empty() {
        return Err(PricingError::NotExistPromotion);
    }

    let unique: HashSet<i32> = coupon_ids.iter().copied().collect();
    if unique.len() != coupon_ids.len() {
        return Err(PricingError::DuplicatedPromotion);
    }

    Ok(())
}

/// Validates the first candidate association against `product` and computes
/// the discounted amount.
///
/// Checks run in a fixed order and short-circuit on the first violation:
/// validity period, product linkage, then price bound. A passing candidate
/// prices the product at `price_cents - discount_cents`.
pub fn compute_amount(
    product: &Product,
    candidates: &[PromotionProduct],
    now: NaiveDateTime,
) -> ServiceResult<i64> {
    let candidate = candidates
        .first()
        .ok_or(PricingError::NotExistPromotion)?;

    if candidates.len() > 1 {
        log::warn!(
            "{} promotion candidates fetched for product {}, only the first is considered",
            candidates.len(),
            product.id
        );
    }

    let promotion = &candidate.promotion;

    if !promotion.is_active_at(now) {
        return Err(PricingError::InvalidPromotionPeriod);
    }

    if candidate.product_id != product.id {
        return Err(PricingError::InvalidPromotionProduct);
    }

    if promotion.discount_cents > product.price_cents {
        return Err(PricingError::ExceedOriginPrice);
    }

    Ok(product.price_cents - promotion.discount_cents)
}
