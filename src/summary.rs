//! Data preparation for the capacity and priority charts.
//!
//! Chart drawing itself belongs to an external charting library; this module
//! only turns the serialized attributes into clean numbers. Entries missing
//! required fields are dropped silently. When nothing usable is left the
//! result is `SummaryError::PartialData`, which callers show as an
//! informational placeholder rather than an empty chart.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::SummaryError;

pub const WEIGHT_ATTRIBUTE: &str = "data-weight";
pub const CAPACITY_ATTRIBUTE: &str = "data-capacity";
pub const SELECTED_ATTRIBUTE: &str = "data-selected";
pub const ORDERS_ATTRIBUTE: &str = "data-orders";

pub const DEFAULT_CAPACITY: f64 = 100.0;

/// Truck load against capacity, in kilograms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitySummary {
    pub used: f64,
    pub capacity: f64,
    /// Never negative, even when overloaded
    pub available: f64,
}

impl CapacitySummary {
    pub fn new(used: f64, capacity: f64) -> Self {
        Self {
            used,
            capacity,
            available: (capacity - used).max(0.0),
        }
    }

    /// Decode the weight and capacity attributes; absent or blank values
    /// take their defaults (0 and 100)
    pub fn from_attributes(
        weight: Option<&str>,
        capacity: Option<&str>,
    ) -> Result<Self, SummaryError> {
        let used = parse_number(WEIGHT_ATTRIBUTE, weight, 0.0)?;
        let capacity = parse_number(CAPACITY_ATTRIBUTE, capacity, DEFAULT_CAPACITY)?;
        Ok(Self::new(used, capacity))
    }

    /// Used share of capacity, or `None` for a zero capacity
    pub fn utilization(&self) -> Option<f64> {
        (self.capacity > 0.0).then(|| self.used / self.capacity)
    }

    /// `(label, value)` pairs in chart order
    pub fn series(&self) -> [(&'static str, f64); 2] {
        [
            ("Used Capacity", self.used),
            ("Available Capacity", self.available),
        ]
    }
}

fn parse_number(
    attribute: &'static str,
    raw: Option<&str>,
    default: f64,
) -> Result<f64, SummaryError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SummaryError::InvalidNumber {
            attribute,
            value: raw.to_string(),
        })
}

fn parse_entries(attribute: &'static str, json: Option<&str>) -> Result<Vec<Value>, SummaryError> {
    match json {
        None => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json)
            .map_err(|source| SummaryError::InvalidJson { attribute, source }),
    }
}

#[derive(Debug, Deserialize)]
struct SelectedOrderRecord {
    order_id: Option<Value>,
    weight: Option<f64>,
}

/// Weight of one selected order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWeight {
    pub order_id: String,
    pub weight: f64,
}

impl OrderWeight {
    pub fn label(&self) -> String {
        format!("Order #{}", self.order_id)
    }
}

/// Weights of the orders packed onto a truck
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWeights {
    pub orders: Vec<OrderWeight>,
}

impl OrderWeights {
    /// Decode the selected-orders attribute, keeping entries that have both
    /// an `order_id` and a numeric `weight`
    pub fn from_json(json: Option<&str>) -> Result<Self, SummaryError> {
        let orders: Vec<_> = parse_entries(SELECTED_ATTRIBUTE, json)?
            .iter()
            .filter_map(|value| SelectedOrderRecord::deserialize(value).ok())
            .filter_map(|record| {
                let order_id = match record.order_id? {
                    Value::Null => return None,
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                Some(OrderWeight {
                    order_id,
                    weight: record.weight?,
                })
            })
            .collect();

        if orders.is_empty() {
            return Err(SummaryError::PartialData {
                dataset: "selected orders",
            });
        }
        Ok(Self { orders })
    }

    pub fn total(&self) -> f64 {
        self.orders.iter().map(|o| o.weight).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Express,
    Standard,
}

#[derive(Debug, Deserialize)]
struct PriorityRecord {
    delivery_type: DeliveryType,
    #[serde(default)]
    premium_member: bool,
}

/// Order counts by delivery type and membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityBreakdown {
    pub premium_express: usize,
    pub regular_express: usize,
    pub premium_standard: usize,
    pub regular_standard: usize,
}

impl PriorityBreakdown {
    /// Count orders; entries without a known `delivery_type` are skipped
    pub fn from_json(json: Option<&str>) -> Result<Self, SummaryError> {
        let records: Vec<_> = parse_entries(ORDERS_ATTRIBUTE, json)?
            .iter()
            .filter_map(|value| PriorityRecord::deserialize(value).ok())
            .collect();

        if records.is_empty() {
            return Err(SummaryError::PartialData { dataset: "orders" });
        }

        let mut breakdown = Self::default();
        for record in records {
            let slot = match (record.delivery_type, record.premium_member) {
                (DeliveryType::Express, true) => &mut breakdown.premium_express,
                (DeliveryType::Express, false) => &mut breakdown.regular_express,
                (DeliveryType::Standard, true) => &mut breakdown.premium_standard,
                (DeliveryType::Standard, false) => &mut breakdown.regular_standard,
            };
            *slot += 1;
        }
        Ok(breakdown)
    }

    pub fn express_total(&self) -> usize {
        self.premium_express + self.regular_express
    }

    pub fn standard_total(&self) -> usize {
        self.premium_standard + self.regular_standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Severity;

    #[test]
    fn capacity_defaults() {
        let summary = CapacitySummary::from_attributes(None, None).unwrap();
        assert_eq!(summary, CapacitySummary::new(0.0, 100.0));
        assert_eq!(summary.available, 100.0);

        let blank = CapacitySummary::from_attributes(Some(""), Some("  ")).unwrap();
        assert_eq!(blank, summary);
    }

    #[test]
    fn overloaded_truck_has_no_negative_space() {
        let summary = CapacitySummary::from_attributes(Some("120.5"), Some("100")).unwrap();
        assert_eq!(summary.available, 0.0);
        assert!(summary.utilization().unwrap() > 1.0);
        assert_eq!(summary.series()[0], ("Used Capacity", 120.5));
    }

    #[test]
    fn non_numeric_capacity_is_an_error() {
        let err = CapacitySummary::from_attributes(Some("12"), Some("lots")).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::InvalidNumber {
                attribute: "data-capacity",
                ..
            }
        ));
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn order_weights_skip_incomplete_entries() {
        let json = r#"[
            {"order_id": 7, "weight": 12.5},
            {"order_id": 8},
            {"weight": 3},
            null,
            {"order_id": "A-9", "weight": 4}
        ]"#;
        let weights = OrderWeights::from_json(Some(json)).unwrap();
        let labels: Vec<_> = weights.orders.iter().map(OrderWeight::label).collect();
        assert_eq!(labels, vec!["Order #7", "Order #A-9"]);
        assert_eq!(weights.total(), 16.5);
    }

    #[test]
    fn no_usable_weights_is_partial_data() {
        let err = OrderWeights::from_json(Some(r#"[{"order_id": 1}]"#)).unwrap_err();
        assert!(matches!(err, SummaryError::PartialData { .. }));
        assert_eq!(err.severity(), Severity::Info);

        assert!(matches!(
            OrderWeights::from_json(None),
            Err(SummaryError::PartialData { .. })
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = OrderWeights::from_json(Some("[{")).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::InvalidJson {
                attribute: "data-selected",
                ..
            }
        ));
    }

    #[test]
    fn priority_counts() {
        let json = r#"[
            {"order_id": 1, "delivery_type": "express", "premium_member": true},
            {"order_id": 2, "delivery_type": "express", "premium_member": false},
            {"order_id": 3, "delivery_type": "express"},
            {"order_id": 4, "delivery_type": "standard", "premium_member": true},
            {"order_id": 5, "delivery_type": "drone", "premium_member": true}
        ]"#;
        let breakdown = PriorityBreakdown::from_json(Some(json)).unwrap();
        assert_eq!(
            breakdown,
            PriorityBreakdown {
                premium_express: 1,
                regular_express: 2,
                premium_standard: 1,
                regular_standard: 0,
            }
        );
        assert_eq!(breakdown.express_total(), 3);
        assert_eq!(breakdown.standard_total(), 1);
    }

    #[test]
    fn priority_with_only_unknown_types_is_partial_data() {
        let json = r#"[{"delivery_type": "drone"}]"#;
        assert!(matches!(
            PriorityBreakdown::from_json(Some(json)),
            Err(SummaryError::PartialData { dataset: "orders" })
        ));
    }
}
