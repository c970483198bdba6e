use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer order, the root of the generation input graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Display identifier, e.g. `ORD-1`.
    pub order_number: String,
    pub order_date: NaiveDate,
    /// Link to the delivery location for finished work, if one was set up.
    pub delivery_link: Option<String>,
}

impl Order {
    /// Order date rendered as `YYYYMMDD`, the form used in generated list
    /// names.
    pub fn date_stamp(&self) -> String {
        self.order_date.format("%Y%m%d").to_string()
    }
}
