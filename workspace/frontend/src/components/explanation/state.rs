use std::rc::Rc;
use yew::prelude::*;

/// Shown whenever an explanation request fails, whatever the cause.
pub const FAILURE_TEXT: &str = "Failed to get explanation";

/// Local state of the explanation panel.
///
/// Every request is issued with a ticket. Only the response carrying the
/// most recently issued ticket may change the text; anything older is
/// discarded, so overlapping clicks always end on the last one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplanationState {
    pub text: String,
    latest: u64,
    settled: u64,
}

pub enum ExplanationAction {
    /// A request with this ticket was sent
    Requested(u64),
    /// The request with this ticket finished
    Resolved {
        ticket: u64,
        outcome: Result<String, String>,
    },
}

impl ExplanationState {
    /// True while the latest request has not come back yet
    pub fn is_pending(&self) -> bool {
        self.settled < self.latest
    }

    fn apply(&mut self, action: ExplanationAction) {
        match action {
            ExplanationAction::Requested(ticket) => {
                self.latest = self.latest.max(ticket);
            }
            ExplanationAction::Resolved { ticket, outcome } => {
                if ticket != self.latest {
                    log::debug!(
                        "Discarding explanation for request #{} (latest is #{})",
                        ticket,
                        self.latest
                    );
                    return;
                }
                self.settled = ticket;
                self.text = match outcome {
                    Ok(explanation) => explanation,
                    Err(_) => FAILURE_TEXT.to_string(),
                };
            }
        }
    }
}

impl Reducible for ExplanationState {
    type Action = ExplanationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
