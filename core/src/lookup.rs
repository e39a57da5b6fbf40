//! Foreign-key resolution. A miss is a value, not an error: `find_*`
//! returns `None` and the label helpers return a literal fallback so
//! rendering code never has to branch on a dangling reference.

use std::collections::HashSet;

use entity::{Client, Deal, Lead, Property, Task, TaskLink, User};

pub const UNKNOWN_LEAD: &str = "Unknown Lead";
pub const UNKNOWN_PROPERTY: &str = "Unknown Property";
pub const UNKNOWN_AGENT: &str = "Unknown Agent";

pub fn find_user<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    if id.is_empty() {
        return None;
    }
    users.iter().find(|user| user.id == id)
}

pub fn find_lead<'a>(leads: &'a [Lead], id: &str) -> Option<&'a Lead> {
    if id.is_empty() {
        return None;
    }
    leads.iter().find(|lead| lead.id == id)
}

pub fn find_property<'a>(properties: &'a [Property], id: &str) -> Option<&'a Property> {
    if id.is_empty() {
        return None;
    }
    properties.iter().find(|property| property.id == id)
}

pub fn find_deal<'a>(deals: &'a [Deal], id: &str) -> Option<&'a Deal> {
    if id.is_empty() {
        return None;
    }
    deals.iter().find(|deal| deal.id == id)
}

pub fn find_client<'a>(clients: &'a [Client], id: &str) -> Option<&'a Client> {
    if id.is_empty() {
        return None;
    }
    clients.iter().find(|client| client.id == id)
}

pub fn lead_name(leads: &[Lead], id: &str) -> String {
    find_lead(leads, id)
        .map(|lead| lead.name.clone())
        .unwrap_or_else(|| UNKNOWN_LEAD.to_string())
}

pub fn property_title(properties: &[Property], id: &str) -> String {
    find_property(properties, id)
        .map(|property| property.title.clone())
        .unwrap_or_else(|| UNKNOWN_PROPERTY.to_string())
}

pub fn agent_name(users: &[User], id: &str) -> String {
    find_user(users, id)
        .map(|user| user.name.clone())
        .unwrap_or_else(|| UNKNOWN_AGENT.to_string())
}

/// Saved listings for a client, in the order the client saved them.
/// Duplicate ids collapse to their first occurrence; dangling ids drop out.
pub fn saved_properties<'a>(client: &Client, properties: &'a [Property]) -> Vec<&'a Property> {
    let mut seen = HashSet::new();
    client
        .saved_property_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| find_property(properties, id))
        .collect()
}

/// The entity a task's tagged link points at.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskTarget<'a> {
    Lead(&'a Lead),
    Deal(&'a Deal),
    Property(&'a Property),
}

pub fn task_target<'a>(
    task: &Task,
    leads: &'a [Lead],
    deals: &'a [Deal],
    properties: &'a [Property],
) -> Option<TaskTarget<'a>> {
    match &task.link {
        TaskLink::Lead(id) => find_lead(leads, id).map(TaskTarget::Lead),
        TaskLink::Deal(id) => find_deal(deals, id).map(TaskTarget::Deal),
        TaskLink::Property(id) => find_property(properties, id).map(TaskTarget::Property),
    }
}

/// Human label for a task's target, with the per-kind fallback when the
/// reference dangles. Deals are labeled through their lead.
pub fn task_target_label(
    task: &Task,
    leads: &[Lead],
    deals: &[Deal],
    properties: &[Property],
) -> String {
    match task_target(task, leads, deals, properties) {
        Some(TaskTarget::Lead(lead)) => lead.name.clone(),
        Some(TaskTarget::Deal(deal)) => lead_name(leads, &deal.lead_id),
        Some(TaskTarget::Property(property)) => property.title.clone(),
        None => match &task.link {
            TaskLink::Lead(_) => UNKNOWN_LEAD.to_string(),
            TaskLink::Deal(_) => "Unknown Deal".to_string(),
            TaskLink::Property(_) => UNKNOWN_PROPERTY.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityStore;

    #[test]
    fn missing_ids_resolve_to_none_for_every_kind() {
        let store = EntityStore::demo();
        assert!(find_user(&store.users, "nope").is_none());
        assert!(find_lead(&store.leads, "nope").is_none());
        assert!(find_property(&store.properties, "nope").is_none());
        assert!(find_deal(&store.deals, "nope").is_none());
        assert!(find_lead(&store.leads, "").is_none());
        assert!(find_lead(&[], "lead-1").is_none());
    }

    #[test]
    fn label_helpers_fall_back_to_unknown() {
        let store = EntityStore::demo();
        assert_eq!(lead_name(&store.leads, "ghost"), "Unknown Lead");
        assert_eq!(property_title(&store.properties, "ghost"), "Unknown Property");
        assert_eq!(agent_name(&store.users, "ghost"), "Unknown Agent");
        assert_ne!(lead_name(&store.leads, &store.leads[0].id), "Unknown Lead");
    }

    #[test]
    fn saved_properties_drop_dangling_ids() {
        let store = EntityStore::demo();
        let mut client = store.clients[0].clone();
        client.saved_property_ids = vec!["p1".into(), "p404".into()];
        let resolved = saved_properties(&client, &store.properties);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "p1");
    }

    #[test]
    fn saved_properties_dedupe_in_input_order() {
        let store = EntityStore::demo();
        let mut client = store.clients[0].clone();
        client.saved_property_ids = vec!["p2".into(), "p1".into(), "p2".into()];
        let resolved = saved_properties(&client, &store.properties);
        let ids: Vec<&str> = resolved.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[test]
    fn task_targets_resolve_through_the_tagged_link() {
        let store = EntityStore::demo();
        let task = store
            .tasks
            .iter()
            .find(|t| matches!(t.link, entity::TaskLink::Property(_)))
            .expect("demo seed has a property task");
        match task_target(task, &store.leads, &store.deals, &store.properties) {
            Some(TaskTarget::Property(property)) => assert_eq!(property.id, task.link.id()),
            other => panic!("expected property target, got {other:?}"),
        }
    }
}
