use std::fmt;

use serde::{Deserialize, Serialize};

/// Fulfilment state of an order.
///
/// Orders move forward one step at a time along
/// `pending -> packed -> shipped -> delivered`; the only side exit is
/// `cancelled`, reachable from `pending` or `packed` and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Packed,
    Shipped,
    Delivered,
    Cancelled,
}

const FORWARD_CHAIN: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Packed,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
];

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Packed => "packed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Shopper-facing message recorded in the status history.
    pub fn message(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Order placed successfully",
            OrderStatus::Packed => "Order has been packed",
            OrderStatus::Shipped => "Order is on the way",
            OrderStatus::Delivered => "Order delivered successfully",
            OrderStatus::Cancelled => "Order has been cancelled",
        }
    }

    /// Successor in the forward chain; `None` once terminal.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Packed),
            OrderStatus::Packed => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Cancellation is only allowed before the order leaves the warehouse.
    pub fn can_cancel(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Packed)
    }

    /// Fraction of the forward chain completed, in `0.0..=1.0`. Cancelled
    /// orders report no progress regardless of how far they got.
    pub fn progress(self) -> f64 {
        match FORWARD_CHAIN.iter().position(|s| *s == self) {
            Some(index) => (index as f64 + 1.0) / FORWARD_CHAIN.len() as f64,
            None => 0.0,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
