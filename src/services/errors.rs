use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Business-rule failures raised while pricing a product.
///
/// Every violation is terminal for the request; the transport layer maps the
/// stable [`code`](PricingError::code) to a user-visible response.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("product does not exist")]
    NotExistProduct,
    #[error("promotion does not exist")]
    NotExistPromotion,
    #[error("duplicated promotion requested")]
    DuplicatedPromotion,
    #[error("promotion period is not active")]
    InvalidPromotionPeriod,
    #[error("promotion does not apply to the requested product")]
    InvalidPromotionProduct,
    #[error("promotion discount exceeds the original price")]
    ExceedOriginPrice,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl PricingError {
    /// Stable machine-checkable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotExistProduct => "NOT_EXIST_PRODUCT",
            Self::NotExistPromotion => "NOT_EXIST_PROMOTION",
            Self::DuplicatedPromotion => "DUPLICATED_PROMOTION",
            Self::InvalidPromotionPeriod => "INVALID_PROMOTION_PERIOD",
            Self::InvalidPromotionProduct => "INVALID_PROMOTION_PRODUCT",
            Self::ExceedOriginPrice => "EXCEED_ORIGIN_PRICE",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

pub type ServiceResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(PricingError::NotExistProduct.code(), "NOT_EXIST_PRODUCT");
        assert_eq!(PricingError::NotExistPromotion.code(), "NOT_EXIST_PROMOTION");
        assert_eq!(
            PricingError::DuplicatedPromotion.code(),
            "DUPLICATED_PROMOTION"
        );
        assert_eq!(
            PricingError::InvalidPromotionPeriod.code(),
            "INVALID_PROMOTION_PERIOD"
        );
        assert_eq!(
            PricingError::InvalidPromotionProduct.code(),
            "INVALID_PROMOTION_PRODUCT"
        );
        assert_eq!(PricingError::ExceedOriginPrice.code(), "EXCEED_ORIGIN_PRICE");
        assert_eq!(
            PricingError::Repository(RepositoryError::NotFound).code(),
            "INTERNAL_ERROR"
        );
    }
}
