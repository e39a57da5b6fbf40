use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Enum, Error, ErrorExtensions, ID, Object, Schema, SimpleObject,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use crm_core::{EntityStore, StoreError, aggregate, calendar, filter, lookup};
use entity::{client, deal, lead, property, task, user};
use platform_api::ApiError;
use tokio::sync::RwLock;
use tracing::info_span;

use crate::actions::SharedActions;

pub struct AppSchema(pub Schema<QueryRoot, MutationRoot, EmptySubscription>);

/// Everything the resolvers need: the seeded store, the outbound-action
/// port, and the fallback revenue target for agents without one.
#[derive(Clone)]
pub struct CrmData {
    pub store: Arc<RwLock<EntityStore>>,
    pub actions: SharedActions,
    pub default_agent_target: i64,
}

pub fn build_schema(data: CrmData) -> AppSchema {
    let schema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(data)
        .finish();
    AppSchema(schema)
}

pub struct QueryRoot;
pub struct MutationRoot;

const DEFAULT_UPCOMING: i32 = 5;
const MAX_UPCOMING: i32 = 50;

#[Object]
impl QueryRoot {
    async fn crm(&self) -> CrmQuery {
        CrmQuery
    }
}

#[Object]
impl MutationRoot {
    async fn crm(&self) -> CrmMutation {
        CrmMutation
    }
}

#[derive(Default)]
pub struct CrmQuery;

#[derive(Default)]
pub struct CrmMutation;

#[Object]
impl CrmQuery {
    async fn leads(
        &self,
        ctx: &Context<'_>,
        q: Option<String>,
    ) -> async_graphql::Result<Vec<LeadNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let query = sanitize_optional_filter(q).unwrap_or_default();
        Ok(filter::search_leads(&store.leads, &query)
            .iter()
            .map(|lead| LeadNode::from_snapshot(lead, &store.users))
            .collect())
    }

    async fn lead(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<LeadNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(lookup::find_lead(&store.leads, id.as_str())
            .map(|lead| LeadNode::from_snapshot(lead, &store.users)))
    }

    async fn properties(
        &self,
        ctx: &Context<'_>,
        q: Option<String>,
    ) -> async_graphql::Result<Vec<PropertyNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let query = sanitize_optional_filter(q).unwrap_or_default();
        Ok(filter::search_properties(&store.properties, &query)
            .iter()
            .map(PropertyNode::from)
            .collect())
    }

    async fn property(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<PropertyNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(lookup::find_property(&store.properties, id.as_str()).map(PropertyNode::from))
    }

    async fn clients(
        &self,
        ctx: &Context<'_>,
        q: Option<String>,
    ) -> async_graphql::Result<Vec<ClientNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let query = sanitize_optional_filter(q).unwrap_or_default();
        Ok(filter::search_clients(&store.clients, &query)
            .iter()
            .map(|client| ClientNode::from_snapshot(client, &store.properties))
            .collect())
    }

    async fn client(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<ClientNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(lookup::find_client(&store.clients, id.as_str())
            .map(|client| ClientNode::from_snapshot(client, &store.properties)))
    }

    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<UserNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(store.users.iter().map(UserNode::from).collect())
    }

    async fn deals(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<DealNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(store
            .deals
            .iter()
            .map(|deal| DealNode::from_snapshot(deal, &store))
            .collect())
    }

    #[graphql(name = "pipelineStages")]
    async fn pipeline_stages(&self) -> Vec<PipelineStage> {
        deal::DealStage::ALL.iter().map(PipelineStage::from).collect()
    }

    #[graphql(name = "pipelineBoard")]
    async fn pipeline_board(&self, ctx: &Context<'_>) -> async_graphql::Result<PipelineBoard> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let span = info_span!("crm.pipelineBoard", deals = store.deals.len());
        let _guard = span.enter();
        let totals = aggregate::stage_totals(&store.deals);
        let columns: Vec<PipelineColumn> = totals
            .iter()
            .map(|row| PipelineColumn {
                stage: PipelineStage::from(&row.stage),
                count: row.count as i32,
                total_value: row.total_value,
                deals: store
                    .deals
                    .iter()
                    .filter(|deal| deal.stage == row.stage)
                    .map(|deal| DealNode::from_snapshot(deal, &store))
                    .collect(),
            })
            .collect();
        Ok(PipelineBoard {
            total_count: columns.iter().map(|column| column.count).sum(),
            total_value: aggregate::pipeline_value(&store.deals),
            average_deal_value: aggregate::average_deal_value(&store.deals),
            columns,
        })
    }

    #[graphql(name = "salesFunnel")]
    async fn sales_funnel(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<FunnelStage>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(aggregate::lead_funnel(&store.leads, &store.deals)
            .into_iter()
            .map(FunnelStage::from)
            .collect())
    }

    #[graphql(name = "locationStats")]
    async fn location_stats(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<LocationStat>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(aggregate::location_stats(&store.properties, &store.deals)
            .into_iter()
            .map(LocationStat::from)
            .collect())
    }

    #[graphql(name = "agentPerformance")]
    async fn agent_performance(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<AgentPerformanceNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(aggregate::agent_performance(
            &store.users,
            &store.deals,
            &store.agent_targets,
            data.default_agent_target,
        )
        .into_iter()
        .map(AgentPerformanceNode::from)
        .collect())
    }

    #[graphql(name = "leadSources")]
    async fn lead_sources(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<LeadSourceCount>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(aggregate::lead_sources(&store.leads)
            .into_iter()
            .map(LeadSourceCount::from)
            .collect())
    }

    #[graphql(name = "loyaltySummary")]
    async fn loyalty_summary(&self, ctx: &Context<'_>) -> async_graphql::Result<LoyaltySummary> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        Ok(LoyaltySummary {
            total_points: aggregate::loyalty_total(&store.clients),
            clients: store
                .clients
                .iter()
                .map(|client| LoyaltyRow {
                    client_id: ID::from(client.id.clone()),
                    name: client.name.clone(),
                    points: client.loyalty_points,
                })
                .collect(),
        })
    }

    /// Re-derives the snapshot instead of reading the seeded cache, so the
    /// numbers always reflect the current collections.
    #[graphql(name = "dashboardMetrics")]
    async fn dashboard_metrics(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "asOf")] as_of: Option<NaiveDate>,
    ) -> async_graphql::Result<DashboardMetricsNode> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let now = match as_of {
            Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
            None => Utc::now(),
        };
        Ok(DashboardMetricsNode::from(aggregate::dashboard_metrics(
            &store.leads,
            &store.deals,
            now,
        )))
    }

    async fn tasks(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "onDate")] on_date: Option<NaiveDate>,
    ) -> async_graphql::Result<Vec<TaskNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let tasks: Vec<&task::Task> = match on_date {
            Some(date) => calendar::tasks_on(&store.tasks, date),
            None => store.tasks.iter().collect(),
        };
        Ok(tasks
            .into_iter()
            .map(|task| TaskNode::from_snapshot(task, &store))
            .collect())
    }

    #[graphql(name = "upcomingTasks")]
    async fn upcoming_tasks(
        &self,
        ctx: &Context<'_>,
        after: Option<DateTime<Utc>>,
        first: Option<i32>,
    ) -> async_graphql::Result<Vec<TaskNode>> {
        let requested = first.unwrap_or(DEFAULT_UPCOMING);
        if requested < 0 {
            return Err(validation_error("first must be non-negative"));
        }
        if requested > MAX_UPCOMING {
            return Err(validation_error(format!(
                "first cannot exceed {MAX_UPCOMING}"
            )));
        }
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let now = after.unwrap_or_else(Utc::now);
        Ok(
            calendar::upcoming_tasks(&store.tasks, now, requested as usize)
                .into_iter()
                .map(|task| TaskNode::from_snapshot(task, &store))
                .collect(),
        )
    }

    /// Listings matching a client's stated preferences.
    #[graphql(name = "matchingProperties")]
    async fn matching_properties(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "clientId")] client_id: ID,
    ) -> async_graphql::Result<Vec<PropertyNode>> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let client = lookup::find_client(&store.clients, client_id.as_str())
            .ok_or_else(|| ApiError::NotFound.extend())?;
        Ok(filter::matching_properties(client, &store.properties)
            .iter()
            .map(PropertyNode::from)
            .collect())
    }
}

#[Object]
impl CrmMutation {
    #[graphql(name = "moveDealStage")]
    async fn move_deal_stage(
        &self,
        ctx: &Context<'_>,
        id: ID,
        stage: DealStage,
    ) -> async_graphql::Result<DealNode> {
        let data = crm_data(ctx)?;
        let mut store = data.store.write().await;
        let moved = store
            .move_deal_stage(id.as_str(), stage.into(), Utc::now())
            .map_err(store_error)?;
        Ok(DealNode::from_snapshot(&moved, &store))
    }

    #[graphql(name = "completeTask")]
    async fn complete_task(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<TaskNode> {
        let data = crm_data(ctx)?;
        let mut store = data.store.write().await;
        let task = store.complete_task(id.as_str()).map_err(store_error)?;
        Ok(TaskNode::from_snapshot(&task, &store))
    }

    #[graphql(name = "addLoyaltyPoints")]
    async fn add_loyalty_points(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "clientId")] client_id: ID,
        points: i64,
    ) -> async_graphql::Result<ClientNode> {
        let data = crm_data(ctx)?;
        let mut store = data.store.write().await;
        let client = store
            .add_loyalty_points(client_id.as_str(), points)
            .map_err(store_error)?;
        Ok(ClientNode::from_snapshot(&client, &store.properties))
    }

    #[graphql(name = "sendEmail")]
    async fn send_email(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "leadId")] lead_id: ID,
        subject: String,
    ) -> async_graphql::Result<ActionReceiptNode> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let lead = lookup::find_lead(&store.leads, lead_id.as_str())
            .ok_or_else(|| ApiError::NotFound.extend())?;
        Ok(data.actions.send_email(&lead.email, &subject).into())
    }

    #[graphql(name = "logCall")]
    async fn log_call(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "leadId")] lead_id: ID,
    ) -> async_graphql::Result<ActionReceiptNode> {
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let lead = lookup::find_lead(&store.leads, lead_id.as_str())
            .ok_or_else(|| ApiError::NotFound.extend())?;
        Ok(data.actions.log_call(&lead.name, &lead.phone).into())
    }

    #[graphql(name = "collectPayment")]
    async fn collect_payment(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "dealId")] deal_id: ID,
        amount: i64,
    ) -> async_graphql::Result<ActionReceiptNode> {
        if amount <= 0 {
            return Err(validation_error("amount must be positive"));
        }
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let deal = lookup::find_deal(&store.deals, deal_id.as_str())
            .ok_or_else(|| ApiError::NotFound.extend())?;
        let payer = lookup::lead_name(&store.leads, &deal.lead_id);
        Ok(data.actions.collect_payment(&payer, amount).into())
    }

    #[graphql(name = "generateDocument")]
    async fn generate_document(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "templateName")] template_name: String,
        #[graphql(name = "dealId")] deal_id: ID,
    ) -> async_graphql::Result<ActionReceiptNode> {
        let template = template_name.trim();
        if template.is_empty() {
            return Err(validation_error("templateName is required"));
        }
        let data = crm_data(ctx)?;
        let store = data.store.read().await;
        let deal = lookup::find_deal(&store.deals, deal_id.as_str())
            .ok_or_else(|| ApiError::NotFound.extend())?;
        let party = lookup::lead_name(&store.leads, &deal.lead_id);
        Ok(data.actions.generate_document(template, &party).into())
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DealStage {
    #[graphql(name = "INQUIRY")]
    Inquiry,
    #[graphql(name = "QUALIFIED")]
    Qualified,
    #[graphql(name = "VISIT")]
    Visit,
    #[graphql(name = "NEGOTIATION")]
    Negotiation,
    #[graphql(name = "LEGAL")]
    Legal,
    #[graphql(name = "CLOSED")]
    Closed,
}

impl From<DealStage> for deal::DealStage {
    fn from(value: DealStage) -> Self {
        match value {
            DealStage::Inquiry => deal::DealStage::Inquiry,
            DealStage::Qualified => deal::DealStage::Qualified,
            DealStage::Visit => deal::DealStage::Visit,
            DealStage::Negotiation => deal::DealStage::Negotiation,
            DealStage::Legal => deal::DealStage::Legal,
            DealStage::Closed => deal::DealStage::Closed,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum TaskStatus {
    #[graphql(name = "OPEN")]
    Open,
    #[graphql(name = "DONE")]
    Done,
}

impl From<task::TaskStatus> for TaskStatus {
    fn from(value: task::TaskStatus) -> Self {
        match value {
            task::TaskStatus::Open => TaskStatus::Open,
            task::TaskStatus::Done => TaskStatus::Done,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum TaskKind {
    #[graphql(name = "VISIT")]
    Visit,
    #[graphql(name = "MEETING")]
    Meeting,
    #[graphql(name = "FOLLOW_UP")]
    FollowUp,
}

impl From<task::TaskKind> for TaskKind {
    fn from(value: task::TaskKind) -> Self {
        match value {
            task::TaskKind::Visit => TaskKind::Visit,
            task::TaskKind::Meeting => TaskKind::Meeting,
            task::TaskKind::FollowUp => TaskKind::FollowUp,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum TaskLinkKind {
    #[graphql(name = "LEAD")]
    Lead,
    #[graphql(name = "DEAL")]
    Deal,
    #[graphql(name = "PROPERTY")]
    Property,
}

impl From<&task::TaskLink> for TaskLinkKind {
    fn from(value: &task::TaskLink) -> Self {
        match value {
            task::TaskLink::Lead(_) => TaskLinkKind::Lead,
            task::TaskLink::Deal(_) => TaskLinkKind::Deal,
            task::TaskLink::Property(_) => TaskLinkKind::Property,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct LeadNode {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub kind: String,
    pub tags: Vec<String>,
    pub score: i32,
    pub status: String,
    #[graphql(name = "statusDisplay")]
    pub status_display: String,
    #[graphql(name = "budgetMin")]
    pub budget_min: i64,
    #[graphql(name = "budgetMax")]
    pub budget_max: i64,
    pub locations: Vec<String>,
    #[graphql(name = "assignedTo")]
    pub assigned_to: ID,
    #[graphql(name = "assignedToName")]
    pub assigned_to_name: String,
    #[graphql(name = "lastContactedAt")]
    pub last_contacted_at: DateTime<Utc>,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl LeadNode {
    fn from_snapshot(lead: &lead::Lead, users: &[user::User]) -> Self {
        Self {
            id: ID::from(lead.id.clone()),
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            source: lead.source.as_str().to_string(),
            kind: lead.kind.as_str().to_string(),
            tags: lead.tags.clone(),
            score: lead.score as i32,
            status: lead.status.as_str().to_string(),
            status_display: lead.status.display_name().to_string(),
            budget_min: lead.budget_min,
            budget_max: lead.budget_max,
            locations: lead.locations.clone(),
            assigned_to: ID::from(lead.assigned_to.clone()),
            assigned_to_name: lookup::agent_name(users, &lead.assigned_to),
            last_contacted_at: lead.last_contacted_at,
            created_at: lead.created_at,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct PropertyNode {
    pub id: ID,
    pub title: String,
    pub kind: String,
    pub location: String,
    pub price: i64,
    #[graphql(name = "areaSqft")]
    pub area_sqft: i64,
    pub beds: i32,
    pub baths: i32,
    pub amenities: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    #[graphql(name = "ownerName")]
    pub owner_name: String,
    #[graphql(name = "ownerPhone")]
    pub owner_phone: String,
    pub images: Vec<String>,
    pub description: String,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<&property::Property> for PropertyNode {
    fn from(property: &property::Property) -> Self {
        Self {
            id: ID::from(property.id.clone()),
            title: property.title.clone(),
            kind: property.kind.as_str().to_string(),
            location: property.location.clone(),
            price: property.price,
            area_sqft: property.area_sqft,
            beds: property.beds as i32,
            baths: property.baths as i32,
            amenities: property.amenities.clone(),
            lat: property.lat,
            lng: property.lng,
            owner_name: property.owner_name.clone(),
            owner_phone: property.owner_phone.clone(),
            images: property.images.clone(),
            description: property.description.clone(),
            created_at: property.created_at,
        }
    }
}

impl From<property::Property> for PropertyNode {
    fn from(property: property::Property) -> Self {
        PropertyNode::from(&property)
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct PreferencesNode {
    #[graphql(name = "propertyKinds")]
    pub property_kinds: Vec<String>,
    pub locations: Vec<String>,
    #[graphql(name = "budgetMin")]
    pub budget_min: i64,
    #[graphql(name = "budgetMax")]
    pub budget_max: i64,
    pub amenities: Vec<String>,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct ClientNode {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferences: PreferencesNode,
    /// Saved listings with dangling references already dropped.
    #[graphql(name = "savedProperties")]
    pub saved_properties: Vec<PropertyNode>,
    #[graphql(name = "loyaltyPoints")]
    pub loyalty_points: i64,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ClientNode {
    fn from_snapshot(client: &client::Client, properties: &[property::Property]) -> Self {
        Self {
            id: ID::from(client.id.clone()),
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            preferences: PreferencesNode {
                property_kinds: client
                    .preferences
                    .property_kinds
                    .iter()
                    .map(|kind| kind.as_str().to_string())
                    .collect(),
                locations: client.preferences.locations.clone(),
                budget_min: client.preferences.budget_min,
                budget_max: client.preferences.budget_max,
                amenities: client.preferences.amenities.clone(),
            },
            saved_properties: lookup::saved_properties(client, properties)
                .into_iter()
                .map(PropertyNode::from)
                .collect(),
            loyalty_points: client.loyalty_points,
            created_at: client.created_at,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct UserNode {
    pub id: ID,
    pub name: String,
    pub role: String,
    pub email: String,
}

impl From<&user::User> for UserNode {
    fn from(user: &user::User) -> Self {
        Self {
            id: ID::from(user.id.clone()),
            name: user.name.clone(),
            role: user.role.as_str().to_string(),
            email: user.email.clone(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct DealNode {
    pub id: ID,
    #[graphql(name = "leadId")]
    pub lead_id: ID,
    #[graphql(name = "leadName")]
    pub lead_name: String,
    #[graphql(name = "propertyId")]
    pub property_id: ID,
    #[graphql(name = "propertyTitle")]
    pub property_title: String,
    #[graphql(name = "stageKey")]
    pub stage_key: String,
    pub value: i64,
    #[graphql(name = "agentId")]
    pub agent_id: ID,
    #[graphql(name = "agentName")]
    pub agent_name: String,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[graphql(name = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl DealNode {
    fn from_snapshot(deal: &deal::Deal, store: &EntityStore) -> Self {
        Self {
            id: ID::from(deal.id.clone()),
            lead_id: ID::from(deal.lead_id.clone()),
            lead_name: lookup::lead_name(&store.leads, &deal.lead_id),
            property_id: ID::from(deal.property_id.clone()),
            property_title: lookup::property_title(&store.properties, &deal.property_id),
            stage_key: deal.stage.key().to_string(),
            value: deal.value,
            agent_id: ID::from(deal.agent_id.clone()),
            agent_name: lookup::agent_name(&store.users, &deal.agent_id),
            created_at: deal.created_at,
            updated_at: deal.updated_at,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct TaskNode {
    pub id: ID,
    pub title: String,
    pub description: String,
    #[graphql(name = "dueAt")]
    pub due_at: DateTime<Utc>,
    pub kind: TaskKind,
    #[graphql(name = "relatedKind")]
    pub related_kind: TaskLinkKind,
    #[graphql(name = "relatedId")]
    pub related_id: ID,
    /// Resolved label of the linked entity, or the per-kind fallback.
    #[graphql(name = "relatedLabel")]
    pub related_label: String,
    #[graphql(name = "assigneeId")]
    pub assignee_id: ID,
    #[graphql(name = "assigneeName")]
    pub assignee_name: String,
    pub status: TaskStatus,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl TaskNode {
    fn from_snapshot(task: &task::Task, store: &EntityStore) -> Self {
        Self {
            id: ID::from(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            due_at: task.due_at,
            kind: task.kind.into(),
            related_kind: TaskLinkKind::from(&task.link),
            related_id: ID::from(task.link.id().to_string()),
            related_label: lookup::task_target_label(
                task,
                &store.leads,
                &store.deals,
                &store.properties,
            ),
            assignee_id: ID::from(task.assignee_id.clone()),
            assignee_name: lookup::agent_name(&store.users, &task.assignee_id),
            status: task.status.into(),
            created_at: task.created_at,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct PipelineStage {
    pub key: String,
    #[graphql(name = "displayName")]
    pub display_name: String,
    #[graphql(name = "sortOrder")]
    pub sort_order: i32,
}

impl From<&deal::DealStage> for PipelineStage {
    fn from(stage: &deal::DealStage) -> Self {
        Self {
            key: stage.key().to_string(),
            display_name: stage.display_name().to_string(),
            sort_order: stage.sort_order() as i32,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct PipelineColumn {
    pub stage: PipelineStage,
    pub count: i32,
    #[graphql(name = "totalValue")]
    pub total_value: i64,
    pub deals: Vec<DealNode>,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct PipelineBoard {
    pub columns: Vec<PipelineColumn>,
    #[graphql(name = "totalCount")]
    pub total_count: i32,
    #[graphql(name = "totalValue")]
    pub total_value: i64,
    #[graphql(name = "averageDealValue")]
    pub average_deal_value: i64,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct FunnelStage {
    pub label: String,
    pub count: i32,
    pub percentage: i32,
}

impl From<aggregate::FunnelStage> for FunnelStage {
    fn from(row: aggregate::FunnelStage) -> Self {
        Self {
            label: row.label,
            count: row.count as i32,
            percentage: row.percentage as i32,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct LocationStat {
    pub location: String,
    pub count: i32,
    #[graphql(name = "avgPrice")]
    pub avg_price: i64,
    #[graphql(name = "dealsCompleted")]
    pub deals_completed: i32,
}

impl From<aggregate::LocationStat> for LocationStat {
    fn from(row: aggregate::LocationStat) -> Self {
        Self {
            location: row.location,
            count: row.count as i32,
            avg_price: row.avg_price,
            deals_completed: row.deals_completed as i32,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct AgentPerformanceNode {
    #[graphql(name = "agentId")]
    pub agent_id: ID,
    pub name: String,
    #[graphql(name = "dealsCompleted")]
    pub deals_completed: i32,
    pub revenue: i64,
    pub target: i64,
    /// Percent of target; over-target agents report more than 100.
    pub progress: f64,
}

impl From<aggregate::AgentPerformance> for AgentPerformanceNode {
    fn from(row: aggregate::AgentPerformance) -> Self {
        Self {
            agent_id: ID::from(row.agent_id),
            name: row.name,
            deals_completed: row.deals_completed as i32,
            revenue: row.revenue,
            target: row.target,
            progress: row.progress,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct LeadSourceCount {
    pub source: String,
    pub count: i32,
    pub percentage: i32,
}

impl From<aggregate::SourceCount> for LeadSourceCount {
    fn from(row: aggregate::SourceCount) -> Self {
        Self {
            source: row.source.as_str().to_string(),
            count: row.count as i32,
            percentage: row.percentage as i32,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct LoyaltyRow {
    #[graphql(name = "clientId")]
    pub client_id: ID,
    pub name: String,
    pub points: i64,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct LoyaltySummary {
    #[graphql(name = "totalPoints")]
    pub total_points: i64,
    pub clients: Vec<LoyaltyRow>,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct DashboardMetricsNode {
    #[graphql(name = "newLeads")]
    pub new_leads: i64,
    #[graphql(name = "dealsInNegotiation")]
    pub deals_in_negotiation: i64,
    #[graphql(name = "closedDealsThisMonth")]
    pub closed_deals_this_month: i64,
    #[graphql(name = "totalRevenue")]
    pub total_revenue: i64,
    #[graphql(name = "conversionRate")]
    pub conversion_rate: f64,
    #[graphql(name = "averageDealValue")]
    pub average_deal_value: i64,
}

impl From<entity::DashboardMetrics> for DashboardMetricsNode {
    fn from(metrics: entity::DashboardMetrics) -> Self {
        Self {
            new_leads: metrics.new_leads,
            deals_in_negotiation: metrics.deals_in_negotiation,
            closed_deals_this_month: metrics.closed_deals_this_month,
            total_revenue: metrics.total_revenue,
            conversion_rate: metrics.conversion_rate,
            average_deal_value: metrics.average_deal_value,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct ActionReceiptNode {
    pub reference: ID,
    pub message: String,
}

impl From<crate::actions::ActionReceipt> for ActionReceiptNode {
    fn from(receipt: crate::actions::ActionReceipt) -> Self {
        Self {
            reference: ID::from(receipt.reference.to_string()),
            message: receipt.message,
        }
    }
}

fn crm_data(ctx: &Context<'_>) -> async_graphql::Result<CrmData> {
    ctx.data::<CrmData>()
        .map(Clone::clone)
        .map_err(|_| ApiError::internal(anyhow::anyhow!("CRM data not configured")).extend())
}

fn store_error(err: StoreError) -> Error {
    match err {
        StoreError::NotFound(_) => ApiError::NotFound.extend(),
        StoreError::InvalidInput(message) => ApiError::InvalidInput(message).extend(),
    }
}

fn validation_error(message: impl Into<String>) -> Error {
    ApiError::InvalidInput(message.into()).extend()
}

fn sanitize_optional_filter(value: Option<String>) -> Option<String> {
    value.and_then(|input| {
        let trimmed = input.trim().to_string();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    })
}
