use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: LeadSource,
    pub kind: LeadKind,
    pub tags: Vec<String>,
    pub score: u8,
    pub status: LeadStatus,
    pub budget_min: i64,
    pub budget_max: i64,
    pub locations: Vec<String>,
    pub assigned_to: String,
    pub last_contacted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    WhatsApp,
    Portal,
    Referral,
    Manual,
}

impl LeadSource {
    pub const ALL: [LeadSource; 5] = [
        LeadSource::Website,
        LeadSource::WhatsApp,
        LeadSource::Portal,
        LeadSource::Referral,
        LeadSource::Manual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Website => "WEBSITE",
            LeadSource::WhatsApp => "WHATSAPP",
            LeadSource::Portal => "PORTAL",
            LeadSource::Referral => "REFERRAL",
            LeadSource::Manual => "MANUAL",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LeadKind {
    Buyer,
    Seller,
    Tenant,
    Landlord,
}

impl LeadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadKind::Buyer => "BUYER",
            LeadKind::Seller => "SELLER",
            LeadKind::Tenant => "TENANT",
            LeadKind::Landlord => "LANDLORD",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Qualified,
    VisitScheduled,
    Negotiation,
    Closed,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::Qualified => "QUALIFIED",
            LeadStatus::VisitScheduled => "VISIT_SCHEDULED",
            LeadStatus::Negotiation => "NEGOTIATION",
            LeadStatus::Closed => "CLOSED",
            LeadStatus::Lost => "LOST",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::VisitScheduled => "Visit Scheduled",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Closed => "Closed",
            LeadStatus::Lost => "Lost",
        }
    }

    /// Position along the qualification path, `None` for lost leads.
    /// A lead at rank N has passed through every rank below it.
    pub fn rank(&self) -> Option<u8> {
        match self {
            LeadStatus::New => Some(0),
            LeadStatus::Qualified => Some(1),
            LeadStatus::VisitScheduled => Some(2),
            LeadStatus::Negotiation => Some(3),
            LeadStatus::Closed => Some(4),
            LeadStatus::Lost => None,
        }
    }
}
