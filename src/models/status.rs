use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::errors::ServiceError;

/// Enum representing the possible statuses of an order request.
///
/// The wire representation is the lowercase status name; collaborators
/// exchanging status strings round-trip through `FromStr`/`Display`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Delivered,
    Received,
    Cancelled,
}

/// Display descriptor associated with an order status: a human-readable
/// label plus color and icon tokens for the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusConfig {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Descriptor returned for any status identifier outside the known set.
/// Unknown input is a normal, handled case, not a failure.
pub const UNKNOWN_STATUS: StatusConfig = StatusConfig {
    label: "Unknown",
    color: "neutral",
    icon: "circle",
};

/// Canonical display ordering over all valid statuses. Callers must not
/// assume any other ordering is meaningful; this sequence is authoritative.
pub const STATUS_ORDER: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Approved,
    OrderStatus::Delivered,
    OrderStatus::Received,
    OrderStatus::Cancelled,
];

impl OrderStatus {
    /// Returns the display descriptor registered for this status.
    pub fn config(&self) -> &'static StatusConfig {
        match self {
            OrderStatus::Pending => &StatusConfig {
                label: "Pending",
                color: "amber",
                icon: "clock",
            },
            OrderStatus::Approved => &StatusConfig {
                label: "Approved",
                color: "blue",
                icon: "check-circle",
            },
            OrderStatus::Delivered => &StatusConfig {
                label: "Delivered",
                color: "indigo",
                icon: "truck",
            },
            OrderStatus::Received => &StatusConfig {
                label: "Received",
                color: "green",
                icon: "package-check",
            },
            OrderStatus::Cancelled => &StatusConfig {
                label: "Cancelled",
                color: "red",
                icon: "x-circle",
            },
        }
    }
}

/// Looks up the display descriptor for a status identifier.
///
/// Total over all strings: identifiers outside the known enumeration
/// resolve to [`UNKNOWN_STATUS`]. No errors, no side effects.
pub fn status_config(status: &str) -> &'static StatusConfig {
    match status.parse::<OrderStatus>() {
        Ok(known) => known.config(),
        Err(_) => &UNKNOWN_STATUS,
    }
}

/// Parses a status identifier at a strict boundary, where an unknown
/// value is an input error rather than a display concern.
pub fn parse_status(raw: &str) -> Result<OrderStatus, ServiceError> {
    raw.parse::<OrderStatus>()
        .map_err(|_| ServiceError::InvalidStatus(raw.to_string()))
}
