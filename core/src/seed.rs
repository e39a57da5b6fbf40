//! Fixture data for the demo store: a handful of agents, leads, listings,
//! clients, deals, and tasks shaped like a small agency's book of business.
//! Two references dangle on purpose (a saved listing and a deal property)
//! so the degraded-lookup paths stay exercised.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use entity::{
    Client, Deal, DealStage, Lead, LeadKind, LeadSource, LeadStatus, Preferences, Property,
    PropertyKind, Task, TaskKind, TaskLink, TaskStatus, User, UserRole,
};

use crate::store::EntityStore;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}

impl EntityStore {
    pub fn demo() -> Self {
        let seeded_at = at(2025, 6, 15, 12, 0);
        EntityStore::new(
            demo_leads(),
            demo_properties(),
            demo_clients(),
            demo_deals(),
            demo_tasks(),
            demo_users(),
            demo_agent_targets(),
            seeded_at,
        )
    }
}

fn demo_users() -> Vec<User> {
    let user = |id: &str, name: &str, role: UserRole, email: &str| User {
        id: id.to_string(),
        name: name.to_string(),
        role,
        email: email.to_string(),
    };
    vec![
        user("user-admin", "Alex Morgan", UserRole::Admin, "alex@estateflow.example"),
        user("user-sarah", "Sarah Wilson", UserRole::Agent, "sarah@estateflow.example"),
        user("user-mike", "Mike Chen", UserRole::Agent, "mike@estateflow.example"),
        user("user-priya", "Priya Nair", UserRole::Owner, "priya@estateflow.example"),
    ]
}

fn demo_agent_targets() -> HashMap<String, i64> {
    HashMap::from([
        ("user-sarah".to_string(), 2_000_000),
        ("user-mike".to_string(), 1_500_000),
    ])
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    email: &str,
    source: LeadSource,
    kind: LeadKind,
    score: u8,
    status: LeadStatus,
    budget: (i64, i64),
    locations: &[&str],
    assigned_to: &str,
    created: DateTime<Utc>,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+1 555 0100".to_string(),
        source,
        kind,
        tags: Vec::new(),
        score,
        status,
        budget_min: budget.0,
        budget_max: budget.1,
        locations: locations.iter().map(|s| s.to_string()).collect(),
        assigned_to: assigned_to.to_string(),
        last_contacted_at: created,
        created_at: created,
    }
}

fn demo_leads() -> Vec<Lead> {
    vec![
        lead(
            "lead-1",
            "John Smith",
            "john.smith@inboxmail.example",
            LeadSource::Website,
            LeadKind::Buyer,
            85,
            LeadStatus::Qualified,
            (800_000, 1_200_000),
            &["Downtown", "Midtown"],
            "user-sarah",
            at(2025, 5, 2, 9, 30),
        ),
        lead(
            "lead-2",
            "Maria Rodriguez",
            "maria.r@inboxmail.example",
            LeadSource::WhatsApp,
            LeadKind::Buyer,
            92,
            LeadStatus::Negotiation,
            (2_000_000, 3_000_000),
            &["Waterfront"],
            "user-mike",
            at(2025, 4, 18, 15, 0),
        ),
        lead(
            "lead-3",
            "David Kim",
            "david.kim@inboxmail.example",
            LeadSource::Portal,
            LeadKind::Tenant,
            58,
            LeadStatus::New,
            (400_000, 600_000),
            &["Midtown"],
            "user-sarah",
            at(2025, 6, 10, 11, 15),
        ),
        lead(
            "lead-4",
            "Aisha Khan",
            "aisha.khan@inboxmail.example",
            LeadSource::Referral,
            LeadKind::Seller,
            74,
            LeadStatus::VisitScheduled,
            (1_500_000, 2_500_000),
            &["Uptown"],
            "user-sarah",
            at(2025, 5, 21, 10, 0),
        ),
        lead(
            "lead-5",
            "Robert Miller",
            "robert.miller@inboxmail.example",
            LeadSource::Website,
            LeadKind::Buyer,
            66,
            LeadStatus::Closed,
            (900_000, 1_100_000),
            &["Downtown"],
            "user-sarah",
            at(2025, 3, 4, 14, 45),
        ),
        lead(
            "lead-6",
            "Elena Petrova",
            "elena.petrova@inboxmail.example",
            LeadSource::Manual,
            LeadKind::Landlord,
            45,
            LeadStatus::Lost,
            (500_000, 900_000),
            &["Uptown"],
            "user-mike",
            at(2025, 2, 27, 16, 30),
        ),
        lead(
            "lead-7",
            "Tom Becker",
            "tom.becker@inboxmail.example",
            LeadSource::Portal,
            LeadKind::Buyer,
            71,
            LeadStatus::New,
            (600_000, 800_000),
            &["Midtown"],
            "user-mike",
            at(2025, 6, 12, 8, 50),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn property(
    id: &str,
    title: &str,
    kind: PropertyKind,
    location: &str,
    price: i64,
    area_sqft: i64,
    beds: u8,
    baths: u8,
    created: DateTime<Utc>,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        location: location.to_string(),
        price,
        area_sqft,
        beds,
        baths,
        amenities: vec!["Parking".to_string()],
        lat: 40.71,
        lng: -74.0,
        owner_name: "Estate Holdings".to_string(),
        owner_phone: "+1 555 0199".to_string(),
        images: vec![format!("https://images.estateflow.example/{id}.jpg")],
        description: format!("{title} in {location}."),
        created_at: created,
    }
}

fn demo_properties() -> Vec<Property> {
    vec![
        property(
            "p1",
            "Skyline Two-Bedroom",
            PropertyKind::Apartment,
            "Downtown",
            950_000,
            1_150,
            2,
            2,
            at(2025, 1, 10, 9, 0),
        ),
        property(
            "p2",
            "Palm Grove Villa",
            PropertyKind::Villa,
            "Uptown",
            2_400_000,
            4_200,
            5,
            4,
            at(2025, 2, 3, 9, 0),
        ),
        property(
            "p3",
            "Harborview Penthouse",
            PropertyKind::Apartment,
            "Waterfront",
            2_800_000,
            2_900,
            4,
            3,
            at(2025, 2, 20, 9, 0),
        ),
        property(
            "p4",
            "Midtown Garden Flat",
            PropertyKind::Apartment,
            "Midtown",
            1_200_000,
            1_400,
            3,
            2,
            at(2025, 3, 14, 9, 0),
        ),
        property(
            "p5",
            "Cedar Lane Plot",
            PropertyKind::Plot,
            "Midtown",
            650_000,
            6_000,
            0,
            0,
            at(2025, 4, 1, 9, 0),
        ),
        property(
            "p6",
            "Downtown Retail Corner",
            PropertyKind::Commercial,
            "Downtown",
            1_750_000,
            2_300,
            0,
            1,
            at(2025, 4, 22, 9, 0),
        ),
    ]
}

fn client(
    id: &str,
    name: &str,
    email: &str,
    preferences: Preferences,
    saved: &[&str],
    loyalty_points: i64,
    created: DateTime<Utc>,
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+1 555 0150".to_string(),
        preferences,
        saved_property_ids: saved.iter().map(|s| s.to_string()).collect(),
        loyalty_points,
        created_at: created,
    }
}

fn demo_clients() -> Vec<Client> {
    vec![
        client(
            "client-1",
            "Jennifer Walsh",
            "jennifer.walsh@inboxmail.example",
            Preferences {
                property_kinds: vec![PropertyKind::Apartment],
                locations: vec!["Downtown".to_string(), "Midtown".to_string()],
                budget_min: 900_000,
                budget_max: 1_300_000,
                amenities: vec!["Parking".to_string(), "Gym".to_string()],
            },
            // "p404" was withdrawn; resolution drops it.
            &["p1", "p4", "p404"],
            1_250,
            at(2025, 3, 9, 10, 0),
        ),
        client(
            "client-2",
            "Omar Haddad",
            "omar.haddad@inboxmail.example",
            Preferences {
                property_kinds: vec![PropertyKind::Villa, PropertyKind::Apartment],
                locations: vec!["Uptown".to_string(), "Waterfront".to_string()],
                budget_min: 2_000_000,
                budget_max: 3_000_000,
                amenities: vec!["Pool".to_string()],
            },
            &["p2", "p3"],
            800,
            at(2025, 4, 2, 10, 0),
        ),
        client(
            "client-3",
            "Grace Liu",
            "grace.liu@inboxmail.example",
            Preferences {
                property_kinds: vec![PropertyKind::Plot],
                locations: vec!["Midtown".to_string()],
                budget_min: 500_000,
                budget_max: 700_000,
                amenities: Vec::new(),
            },
            &["p5", "p5"],
            400,
            at(2025, 5, 5, 10, 0),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: &str,
    lead_id: &str,
    property_id: &str,
    stage: DealStage,
    value: i64,
    agent_id: &str,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
) -> Deal {
    Deal {
        id: id.to_string(),
        lead_id: lead_id.to_string(),
        property_id: property_id.to_string(),
        stage,
        value,
        agent_id: agent_id.to_string(),
        created_at: created,
        updated_at: updated,
    }
}

fn demo_deals() -> Vec<Deal> {
    vec![
        deal(
            "deal-1",
            "lead-1",
            "p1",
            DealStage::Qualified,
            950_000,
            "user-sarah",
            at(2025, 5, 6, 9, 0),
            at(2025, 6, 2, 9, 0),
        ),
        deal(
            "deal-2",
            "lead-2",
            "p3",
            DealStage::Negotiation,
            2_750_000,
            "user-mike",
            at(2025, 4, 25, 9, 0),
            at(2025, 6, 11, 9, 0),
        ),
        deal(
            "deal-3",
            "lead-4",
            "p2",
            DealStage::Visit,
            2_400_000,
            "user-sarah",
            at(2025, 5, 23, 9, 0),
            at(2025, 6, 8, 9, 0),
        ),
        deal(
            "deal-4",
            "lead-5",
            "p1",
            DealStage::Closed,
            1_020_000,
            "user-sarah",
            at(2025, 3, 12, 9, 0),
            at(2025, 6, 5, 9, 0),
        ),
        deal(
            "deal-5",
            "lead-3",
            "p5",
            DealStage::Inquiry,
            640_000,
            "user-sarah",
            at(2025, 6, 11, 9, 0),
            at(2025, 6, 11, 9, 0),
        ),
        deal(
            "deal-6",
            "lead-7",
            "p4",
            DealStage::Inquiry,
            1_180_000,
            "user-mike",
            at(2025, 6, 13, 9, 0),
            at(2025, 6, 13, 9, 0),
        ),
        deal(
            "deal-7",
            "lead-1",
            "p6",
            DealStage::Legal,
            1_700_000,
            "user-sarah",
            at(2025, 4, 9, 9, 0),
            at(2025, 6, 10, 9, 0),
        ),
        // The listing behind this one was withdrawn after closing.
        deal(
            "deal-8",
            "lead-6",
            "p404",
            DealStage::Closed,
            780_000,
            "user-mike",
            at(2025, 2, 28, 9, 0),
            at(2025, 6, 9, 9, 0),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    due_at: DateTime<Utc>,
    link: TaskLink,
    kind: TaskKind,
    assignee_id: &str,
    status: TaskStatus,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        due_at,
        link,
        kind,
        assignee_id: assignee_id.to_string(),
        status,
        created_at: at(2025, 6, 1, 8, 0),
    }
}

fn demo_tasks() -> Vec<Task> {
    vec![
        task(
            "task-1",
            "Viewing at Skyline Two-Bedroom",
            "Second viewing, bring the floor plans.",
            at(2025, 6, 15, 10, 0),
            TaskLink::Property("p1".to_string()),
            TaskKind::Visit,
            "user-sarah",
            TaskStatus::Open,
        ),
        task(
            "task-2",
            "Final negotiation with Maria Rodriguez",
            "Close on the Harborview counter-offer.",
            at(2025, 6, 15, 14, 0),
            TaskLink::Lead("lead-2".to_string()),
            TaskKind::Meeting,
            "user-mike",
            TaskStatus::Open,
        ),
        task(
            "task-3",
            "Send brochure to John Smith",
            "Include the Midtown comparables.",
            at(2025, 6, 16, 9, 0),
            TaskLink::Lead("lead-1".to_string()),
            TaskKind::FollowUp,
            "user-sarah",
            TaskStatus::Open,
        ),
        task(
            "task-4",
            "Contract review for Harborview deal",
            "Legal wants the amended clause 7.",
            at(2025, 6, 17, 11, 0),
            TaskLink::Deal("deal-2".to_string()),
            TaskKind::Meeting,
            "user-mike",
            TaskStatus::Open,
        ),
        task(
            "task-5",
            "Archive withdrawn plot paperwork",
            "",
            at(2025, 6, 10, 9, 0),
            TaskLink::Property("p5".to_string()),
            TaskKind::FollowUp,
            "user-sarah",
            TaskStatus::Done,
        ),
        task(
            "task-6",
            "Walkthrough with relocation client",
            "Lead record was merged away; reassign before the visit.",
            at(2025, 6, 18, 13, 0),
            TaskLink::Lead("lead-404".to_string()),
            TaskKind::Visit,
            "user-sarah",
            TaskStatus::Open,
        ),
    ]
}
