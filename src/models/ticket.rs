use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length of generated ticket identifiers.
pub const TICKET_ID_LEN: usize = 10;

/// A single purchased ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub username: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub purchase_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        price: Decimal,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            price,
            purchase_date: now,
            update_date: now,
        }
    }

    /// Hands the ticket over to `username` and stamps the update time.
    ///
    /// `update_date` never moves behind `purchase_date`, even if the clock
    /// steps backwards.
    pub fn transfer_to(&mut self, username: impl Into<String>, now: DateTime<Utc>) {
        self.username = username.into();
        self.update_date = now.max(self.purchase_date);
    }
}
