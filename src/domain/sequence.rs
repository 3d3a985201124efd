use serde::{Deserialize, Serialize};

/// Counter that hands out order numbers.
pub const ORDER_SEQUENCE: &str = "ordernum";

/// A named counter row. `next_id` is the value the next caller receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub name: String,
    pub next_id: i32,
}
