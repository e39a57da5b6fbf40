//! The in-memory entity store. Collections are seeded once and read as
//! snapshots; the only writes are the three optimistic, last-write-wins
//! mutations below. There is exactly one logical writer, so no locking
//! happens at this level.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::{
    Client, DashboardMetrics, Deal, DealStage, Lead, Property, Task, TaskStatus, User,
};
use thiserror::Error;

use crate::aggregate;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    InvalidInput(String),
}

pub struct EntityStore {
    pub leads: Vec<Lead>,
    pub properties: Vec<Property>,
    pub clients: Vec<Client>,
    pub deals: Vec<Deal>,
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
    /// Per-agent revenue targets, keyed by user id.
    pub agent_targets: HashMap<String, i64>,
    /// Dashboard snapshot taken at seed time; queries re-derive instead of
    /// reading this, and tests assert the two agree.
    pub metrics: DashboardMetrics,
    seeded_at: DateTime<Utc>,
}

impl EntityStore {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        leads: Vec<Lead>,
        properties: Vec<Property>,
        clients: Vec<Client>,
        deals: Vec<Deal>,
        tasks: Vec<Task>,
        users: Vec<User>,
        agent_targets: HashMap<String, i64>,
        seeded_at: DateTime<Utc>,
    ) -> Self {
        let metrics = aggregate::dashboard_metrics(&leads, &deals, seeded_at);
        Self {
            leads,
            properties,
            clients,
            deals,
            tasks,
            users,
            agent_targets,
            metrics,
            seeded_at,
        }
    }

    /// The reference instant the demo data was written against.
    pub fn seeded_at(&self) -> DateTime<Utc> {
        self.seeded_at
    }

    /// Move a deal to another pipeline stage and bump its update stamp.
    /// Moving to the current stage is not an error; the stamp still moves.
    pub fn move_deal_stage(
        &mut self,
        deal_id: &str,
        stage: DealStage,
        now: DateTime<Utc>,
    ) -> Result<Deal, StoreError> {
        let deal = self
            .deals
            .iter_mut()
            .find(|deal| deal.id == deal_id)
            .ok_or(StoreError::NotFound("deal"))?;
        deal.stage = stage;
        deal.updated_at = now;
        Ok(deal.clone())
    }

    pub fn complete_task(&mut self, task_id: &str) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(StoreError::NotFound("task"))?;
        task.status = TaskStatus::Done;
        Ok(task.clone())
    }

    /// Credit referral points to a client. Deltas are non-negative by
    /// contract; a negative delta is rejected before any state changes.
    pub fn add_loyalty_points(
        &mut self,
        client_id: &str,
        delta: i64,
    ) -> Result<Client, StoreError> {
        if delta < 0 {
            return Err(StoreError::InvalidInput(
                "points delta must be non-negative".to_string(),
            ));
        }
        let client = self
            .clients
            .iter_mut()
            .find(|client| client.id == client_id)
            .ok_or(StoreError::NotFound("client"))?;
        client.loyalty_points = aggregate::add_points(client.loyalty_points, delta);
        Ok(client.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn demo_seed_satisfies_the_record_invariants() {
        let store = EntityStore::demo();
        assert!(!store.leads.is_empty());
        assert!(!store.deals.is_empty());
        for lead in &store.leads {
            assert!(lead.budget_min <= lead.budget_max, "lead {}", lead.id);
            assert!(lead.score <= 100);
        }
        for property in &store.properties {
            assert!(property.price > 0);
            assert!(property.area_sqft > 0);
        }
        for deal in &store.deals {
            assert!(deal.value > 0);
            assert!(deal.updated_at >= deal.created_at);
        }
        for client in &store.clients {
            assert!(client.loyalty_points >= 0);
            assert!(client.preferences.budget_min <= client.preferences.budget_max);
        }
    }

    #[test]
    fn demo_seed_keeps_a_dangling_reference_around() {
        let store = EntityStore::demo();
        let dangling_saved = store.clients.iter().any(|client| {
            client
                .saved_property_ids
                .iter()
                .any(|id| !store.properties.iter().any(|p| &p.id == id))
        });
        assert!(dangling_saved, "a client should reference a withdrawn listing");
        let dangling_deal = store
            .deals
            .iter()
            .any(|deal| !store.properties.iter().any(|p| p.id == deal.property_id));
        assert!(dangling_deal, "a deal should reference a withdrawn listing");
    }

    #[test]
    fn move_deal_stage_updates_stage_and_stamp() {
        let mut store = EntityStore::demo();
        let id = store.deals[0].id.clone();
        let now = store.seeded_at() + Duration::days(1);
        let moved = store
            .move_deal_stage(&id, DealStage::Legal, now)
            .expect("deal exists");
        assert_eq!(moved.stage, DealStage::Legal);
        assert_eq!(moved.updated_at, now);
        let stored = store.deals.iter().find(|d| d.id == id).unwrap();
        assert_eq!(stored.stage, DealStage::Legal);
    }

    #[test]
    fn mutations_on_unknown_ids_return_not_found() {
        let mut store = EntityStore::demo();
        let now = store.seeded_at();
        assert!(matches!(
            store.move_deal_stage("deal-404", DealStage::Closed, now),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.complete_task("task-404"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.add_loyalty_points("client-404", 10),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn negative_point_deltas_are_rejected_without_side_effects() {
        let mut store = EntityStore::demo();
        let id = store.clients[0].id.clone();
        let before = store.clients[0].loyalty_points;
        assert!(matches!(
            store.add_loyalty_points(&id, -5),
            Err(StoreError::InvalidInput(_))
        ));
        assert_eq!(store.clients[0].loyalty_points, before);
        let after = store.add_loyalty_points(&id, 50).expect("client exists");
        assert_eq!(after.loyalty_points, before + 50);
    }

    #[test]
    fn completing_a_task_flips_its_status() {
        let mut store = EntityStore::demo();
        let open = store
            .tasks
            .iter()
            .find(|task| task.status == TaskStatus::Open)
            .map(|task| task.id.clone())
            .expect("demo seed has open tasks");
        let done = store.complete_task(&open).expect("task exists");
        assert_eq!(done.status, TaskStatus::Done);
    }
}
