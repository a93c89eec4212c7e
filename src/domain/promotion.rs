use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a promotional discount campaign.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Promotion {
    /// Unique identifier of the promotion.
    pub id: i32,
    /// Human-readable name of the promotion.
    pub name: String,
    /// Subtractive discount in the smallest currency unit (for example cents).
    pub discount_cents: i64,
    /// First instant at which the promotion may be used.
    pub use_started_at: NaiveDateTime,
    /// Last instant at which the promotion may be used.
    pub use_ended_at: NaiveDateTime,
    /// Timestamp for when the promotion record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the promotion record.
    pub updated_at: NaiveDateTime,
}

impl Promotion {
    /// Whether the promotion is usable at `now`. Both window ends are inclusive.
    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.use_started_at <= now && now <= self.use_ended_at
    }
}
