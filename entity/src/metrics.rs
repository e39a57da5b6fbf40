use serde::{Deserialize, Serialize};

/// Precomputed dashboard snapshot. Derived, not authoritative: it must
/// always agree with a fresh re-derivation from the entity collections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub new_leads: i64,
    pub deals_in_negotiation: i64,
    pub closed_deals_this_month: i64,
    pub total_revenue: i64,
    pub conversion_rate: f64,
    pub average_deal_value: i64,
}
