//! Derived metrics over entity snapshots: stage totals, funnels, location
//! rollups, agent target progress, source distribution, loyalty sums, and
//! the dashboard re-derivation. Stage and source rollups emit one row per
//! enum member, zero-filled, in enum order.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Utc};
use entity::{
    Client, DashboardMetrics, Deal, DealStage, Lead, LeadSource, LeadStatus, Property, User,
    UserRole,
};

use crate::lookup::find_property;

#[derive(Clone, Debug, PartialEq)]
pub struct StageTotal {
    pub stage: DealStage,
    pub count: usize,
    pub total_value: i64,
}

/// Per-stage deal counts and value sums, in pipeline order. A stage with
/// no deals yields `count = 0, total_value = 0` rather than being absent.
pub fn stage_totals(deals: &[Deal]) -> Vec<StageTotal> {
    DealStage::ALL
        .iter()
        .map(|&stage| {
            let mut count = 0;
            let mut total_value = 0;
            for deal in deals.iter().filter(|deal| deal.stage == stage) {
                count += 1;
                total_value += deal.value;
            }
            StageTotal {
                stage,
                count,
                total_value,
            }
        })
        .collect()
}

pub fn pipeline_value(deals: &[Deal]) -> i64 {
    deals.iter().map(|deal| deal.value).sum()
}

pub fn average_deal_value(deals: &[Deal]) -> i64 {
    if deals.is_empty() {
        return 0;
    }
    pipeline_value(deals) / deals.len() as i64
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunnelStage {
    pub label: String,
    pub count: usize,
    /// Share of the first stage's count, rounded to a whole percent.
    /// Defined as 0 for every stage when the first count is 0.
    pub percentage: u32,
}

pub fn sales_funnel(rows: &[(&str, usize)]) -> Vec<FunnelStage> {
    let first = rows.first().map(|(_, count)| *count).unwrap_or(0);
    rows.iter()
        .map(|&(label, count)| FunnelStage {
            label: label.to_string(),
            count,
            percentage: if first == 0 {
                0
            } else {
                (count as f64 / first as f64 * 100.0).round() as u32
            },
        })
        .collect()
}

/// The conventional five-row funnel over the lead collection. A lead at
/// qualification rank N counts toward every row up to N, so counts are
/// non-increasing by construction; the closing row comes from closed deals.
pub fn lead_funnel(leads: &[Lead], deals: &[Deal]) -> Vec<FunnelStage> {
    let at_least = |floor: u8| {
        leads
            .iter()
            .filter(|lead| lead.status.rank().is_some_and(|rank| rank >= floor))
            .count()
    };
    let closed = deals
        .iter()
        .filter(|deal| deal.stage == DealStage::Closed)
        .count();
    let rows = [
        ("Leads Generated", leads.len()),
        (
            "Qualified Leads",
            at_least(LeadStatus::Qualified.rank().unwrap_or(1)),
        ),
        (
            "Property Visits",
            at_least(LeadStatus::VisitScheduled.rank().unwrap_or(2)),
        ),
        (
            "Offers Made",
            at_least(LeadStatus::Negotiation.rank().unwrap_or(3)),
        ),
        ("Deals Closed", closed),
    ];
    sales_funnel(&rows)
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationStat {
    pub location: String,
    pub count: usize,
    pub avg_price: i64,
    pub deals_completed: usize,
}

/// Properties grouped by location (sorted by name for stable output) with
/// closed deals joined through each deal's property. Deals whose property
/// reference dangles contribute to no group.
pub fn location_stats(properties: &[Property], deals: &[Deal]) -> Vec<LocationStat> {
    let mut groups: BTreeMap<&str, (usize, i64)> = BTreeMap::new();
    for property in properties {
        let entry = groups.entry(property.location.as_str()).or_default();
        entry.0 += 1;
        entry.1 += property.price;
    }

    let mut completed: HashMap<&str, usize> = HashMap::new();
    for deal in deals.iter().filter(|deal| deal.stage == DealStage::Closed) {
        if let Some(property) = find_property(properties, &deal.property_id) {
            *completed.entry(property.location.as_str()).or_default() += 1;
        }
    }

    groups
        .into_iter()
        .map(|(location, (count, price_sum))| LocationStat {
            location: location.to_string(),
            count,
            avg_price: if count == 0 { 0 } else { price_sum / count as i64 },
            deals_completed: completed.get(location).copied().unwrap_or(0),
        })
        .collect()
}

/// `revenue / target * 100`, unclamped above 100. A zero or negative
/// target has no meaningful progress and is defined as 0.
pub fn target_progress(revenue: i64, target: i64) -> f64 {
    if target <= 0 {
        return 0.0;
    }
    revenue as f64 / target as f64 * 100.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct AgentPerformance {
    pub agent_id: String,
    pub name: String,
    pub deals_completed: usize,
    pub revenue: i64,
    pub target: i64,
    pub progress: f64,
}

/// Closed-deal revenue against target for every Agent-role user, in user
/// order. Agents absent from the target map fall back to `default_target`.
pub fn agent_performance(
    users: &[User],
    deals: &[Deal],
    targets: &HashMap<String, i64>,
    default_target: i64,
) -> Vec<AgentPerformance> {
    users
        .iter()
        .filter(|user| user.role == UserRole::Agent)
        .map(|user| {
            let mut deals_completed = 0;
            let mut revenue = 0;
            for deal in deals
                .iter()
                .filter(|deal| deal.stage == DealStage::Closed && deal.agent_id == user.id)
            {
                deals_completed += 1;
                revenue += deal.value;
            }
            let target = targets.get(&user.id).copied().unwrap_or(default_target);
            AgentPerformance {
                agent_id: user.id.clone(),
                name: user.name.clone(),
                deals_completed,
                revenue,
                target,
                progress: target_progress(revenue, target),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SourceCount {
    pub source: LeadSource,
    pub count: usize,
    pub percentage: u32,
}

/// Lead counts per source, one row per `LeadSource` member. Shares are of
/// the whole collection and 0 when it is empty.
pub fn lead_sources(leads: &[Lead]) -> Vec<SourceCount> {
    let total = leads.len();
    LeadSource::ALL
        .iter()
        .map(|&source| {
            let count = leads.iter().filter(|lead| lead.source == source).count();
            SourceCount {
                source,
                count,
                percentage: if total == 0 {
                    0
                } else {
                    (count as f64 / total as f64 * 100.0).round() as u32
                },
            }
        })
        .collect()
}

pub fn loyalty_total(clients: &[Client]) -> i64 {
    clients.iter().map(|client| client.loyalty_points).sum()
}

/// Pure balance arithmetic. Non-negativity of `delta` is the caller's
/// contract, enforced at the mutation boundary.
pub fn add_points(balance: i64, delta: i64) -> i64 {
    balance + delta
}

/// Re-derive the dashboard snapshot from the collections. The stored
/// `DashboardMetrics` is a cache of exactly this computation.
pub fn dashboard_metrics(leads: &[Lead], deals: &[Deal], now: DateTime<Utc>) -> DashboardMetrics {
    let closed: Vec<&Deal> = deals
        .iter()
        .filter(|deal| deal.stage == DealStage::Closed)
        .collect();
    let closed_this_month = closed
        .iter()
        .filter(|deal| {
            deal.updated_at.year() == now.year() && deal.updated_at.month() == now.month()
        })
        .count();
    DashboardMetrics {
        new_leads: leads
            .iter()
            .filter(|lead| lead.status == LeadStatus::New)
            .count() as i64,
        deals_in_negotiation: deals
            .iter()
            .filter(|deal| deal.stage == DealStage::Negotiation)
            .count() as i64,
        closed_deals_this_month: closed_this_month as i64,
        total_revenue: closed.iter().map(|deal| deal.value).sum(),
        conversion_rate: if leads.is_empty() {
            0.0
        } else {
            closed.len() as f64 / leads.len() as f64 * 100.0
        },
        average_deal_value: average_deal_value(deals),
    }
}
