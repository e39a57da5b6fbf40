#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_graphql::{EmptySubscription, Response, Schema, Value};
use crm_core::EntityStore;
use estate_api::actions::{ActionReceipt, LoggingActions, OutboundActions, SharedActions};
use estate_api::schema::{AppSchema, CrmData, MutationRoot, QueryRoot, build_schema};
use tokio::sync::RwLock;

pub type SchemaType = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const DEFAULT_TARGET: i64 = 1_000_000;

pub fn schema() -> SchemaType {
    schema_with_actions(Arc::new(LoggingActions))
}

pub fn schema_with_actions(actions: SharedActions) -> SchemaType {
    let AppSchema(schema) = build_schema(CrmData {
        store: Arc::new(RwLock::new(EntityStore::demo())),
        actions,
        default_agent_target: DEFAULT_TARGET,
    });
    schema
}

pub fn error_code(resp: &Response) -> Option<String> {
    resp.errors
        .first()
        .and_then(|err| err.extensions.as_ref())
        .and_then(|ext| ext.get("code"))
        .and_then(|value| match value {
            Value::String(code) => Some(code.clone()),
            _ => None,
        })
}

/// Port double that remembers every dispatch, for asserting the mock
/// actions went through the injected boundary.
#[derive(Default)]
pub struct RecordingActions {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingActions {
    fn record(&self, entry: String) {
        self.calls.lock().expect("recorder lock").push(entry);
    }
}

impl OutboundActions for RecordingActions {
    fn send_email(&self, recipient: &str, subject: &str) -> ActionReceipt {
        self.record(format!("email:{recipient}:{subject}"));
        ActionReceipt::confirmed(format!("Email sent to {recipient}"))
    }

    fn log_call(&self, contact: &str, phone: &str) -> ActionReceipt {
        self.record(format!("call:{contact}:{phone}"));
        ActionReceipt::confirmed(format!("Call with {contact} logged"))
    }

    fn collect_payment(&self, payer: &str, amount: i64) -> ActionReceipt {
        self.record(format!("payment:{payer}:{amount}"));
        ActionReceipt::confirmed(format!("Payment link for {amount} sent to {payer}"))
    }

    fn generate_document(&self, template: &str, party: &str) -> ActionReceipt {
        self.record(format!("document:{template}:{party}"));
        ActionReceipt::confirmed(format!("{template} generated for {party}"))
    }
}
