//! Fixed demo data set for manual testing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::Ticket;

const DEMO_TICKETS: [(&str, &str, i64); 10] = [
    ("a1B2c3D4e5", "alice", 10),
    ("f6G7h8I9j0", "bob", 20),
    ("k1L2m3N4o5", "carol", 30),
    ("p6Q7r8S9t0", "dave", 40),
    ("u1V2w3X4y5", "erin", 50),
    ("z6A7b8C9d0", "frank", 60),
    ("e1F2g3H4i5", "grace", 70),
    ("j6K7l8M9n0", "heidi", 80),
    ("o1P2q3R4s5", "ivan", 90),
    ("t6U7v8W9x0", "judy", 100),
];

/// The ten demo tickets, priced 10 through 100, all stamped with `now`.
pub fn demo_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    DEMO_TICKETS
        .iter()
        .map(|&(id, username, price)| Ticket::new(id, username, Decimal::new(price, 0), now))
        .collect()
}
