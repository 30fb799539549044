//! Delivery status transitions
//!
//! A status change is a pure function from the new status to the UI
//! descriptor the dashboard should show. Applying the same change twice gives
//! the same descriptor, so callers can re-apply it freely.

use std::fmt;
use std::str::FromStr;

use crate::errors::StatusError;

/// Lifecycle of an order, in the only order it may advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Capitalized name for badges
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// The status this one advances to, if any
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::Unknown(s.to_string()))
    }
}

/// Button offered next to an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAction {
    pub label: &'static str,
    /// Status the button moves the order to
    pub target: OrderStatus,
    pub button_class: &'static str,
}

/// Everything the dashboard shows for an order in a given status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub status: OrderStatus,
    /// CSS class of the status badge, `status-<name>`
    pub badge_class: String,
    pub label: &'static str,
    /// `None` once the order is delivered
    pub action: Option<StatusAction>,
    /// Container the order card belongs in, if it moves
    pub section: Option<&'static str>,
}

/// Descriptor for an order now in `status`
pub fn status_view(status: OrderStatus) -> StatusView {
    let action = match status {
        OrderStatus::Pending => Some(StatusAction {
            label: "Mark as Processing",
            target: OrderStatus::Processing,
            button_class: "btn-warning",
        }),
        OrderStatus::Processing => Some(StatusAction {
            label: "Mark as Shipped",
            target: OrderStatus::Shipped,
            button_class: "btn-success",
        }),
        OrderStatus::Shipped => Some(StatusAction {
            label: "Mark Delivered",
            target: OrderStatus::Delivered,
            button_class: "btn-primary",
        }),
        OrderStatus::Delivered => None,
    };
    let section = match status {
        OrderStatus::Processing => Some("processing-orders-container"),
        _ => None,
    };
    StatusView {
        status,
        badge_class: format!("status-{status}"),
        label: status.label(),
        action,
        section,
    }
}

/// Move an order from `from` to `to` and describe the result.
///
/// Staying in place is allowed and yields the same view again. Moving
/// backwards is rejected; skipping ahead is allowed.
pub fn transition(from: OrderStatus, to: OrderStatus) -> Result<StatusView, StatusError> {
    if to < from {
        return Err(StatusError::Backward { from, to });
    }
    Ok(status_view(to))
}
