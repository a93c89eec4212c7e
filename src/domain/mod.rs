pub mod product;
pub mod promotion;
pub mod promotion_product;
