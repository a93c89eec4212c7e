use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::promotion::Promotion as DomainPromotion;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::promotions)]
pub struct Promotion {
    pub id: i32,
    pub name: String,
    pub discount_cents: i64,
    pub use_started_at: NaiveDateTime,
    pub use_ended_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Promotion> for DomainPromotion {
    fn from(value: Promotion) -> Self {
        Self {
            id: value.id,
            name: value.name,
            discount_cents: value.discount_cents,
            use_started_at: value.use_started_at,
            use_ended_at: value.use_ended_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
