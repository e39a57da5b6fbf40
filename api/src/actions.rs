//! Outbound side effects behind a port. The CRM core never touches this:
//! mutations resolve their entities first, then hand plain strings to the
//! port. The default implementation confirms in the log and nothing leaves
//! the process; tests inject a recording double.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct ActionReceipt {
    pub reference: Uuid,
    pub message: String,
}

impl ActionReceipt {
    pub fn confirmed(message: impl Into<String>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            message: message.into(),
        }
    }
}

pub trait OutboundActions: Send + Sync {
    fn send_email(&self, recipient: &str, subject: &str) -> ActionReceipt;
    fn log_call(&self, contact: &str, phone: &str) -> ActionReceipt;
    fn collect_payment(&self, payer: &str, amount: i64) -> ActionReceipt;
    fn generate_document(&self, template: &str, party: &str) -> ActionReceipt;
}

pub type SharedActions = Arc<dyn OutboundActions>;

/// Default port: announce the action and confirm.
#[derive(Default)]
pub struct LoggingActions;

impl OutboundActions for LoggingActions {
    fn send_email(&self, recipient: &str, subject: &str) -> ActionReceipt {
        info!(recipient, subject, "email dispatched (mock)");
        ActionReceipt::confirmed(format!("Email sent to {recipient}"))
    }

    fn log_call(&self, contact: &str, phone: &str) -> ActionReceipt {
        info!(contact, phone, "call logged (mock)");
        ActionReceipt::confirmed(format!("Call with {contact} logged"))
    }

    fn collect_payment(&self, payer: &str, amount: i64) -> ActionReceipt {
        info!(payer, amount, "payment link issued (mock)");
        ActionReceipt::confirmed(format!("Payment link for {amount} sent to {payer}"))
    }

    fn generate_document(&self, template: &str, party: &str) -> ActionReceipt {
        info!(template, party, "document generated (mock)");
        ActionReceipt::confirmed(format!("{template} generated for {party}"))
    }
}
