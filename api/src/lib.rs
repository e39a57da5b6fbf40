//! GraphQL surface for the EstateFlow CRM core: read queries over entity
//! snapshots plus the small set of in-memory mutations and mock outbound
//! actions.

pub mod actions;
pub mod schema;
