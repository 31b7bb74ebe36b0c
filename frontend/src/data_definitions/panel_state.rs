//! Per-panel request state with stale-response suppression.

use std::future::Future;

use common::{
    request_sequence::RequestSequencer,
    responses::IntersectResponse,
};
use dioxus::{logger::tracing, prelude::*};

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// The request never produced a response (network, timeout, server failure).
    TransportFailed(String),
}

/// The intersect response together with the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectOutcome {
    pub query: String,
    pub response: IntersectResponse,
}

pub struct SequencedRequest<T: 'static> {
    pub state: Signal<PanelState<T>>,
    sequencer: Signal<RequestSequencer>,
}

impl<T: 'static> Clone for SequencedRequest<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SequencedRequest<T> {}

impl<T: Clone + 'static> SequencedRequest<T> {
    /// Clears the panel and starts `request`; its result is applied only if no
    /// newer request was started on this panel meanwhile.
    pub fn run(mut self, request: impl Future<Output = Result<T, ServerFnError>> + 'static) {
        let ticket = self.sequencer.write().issue();
        self.state.set(PanelState::Loading);
        spawn(async move {
            let result = request.await;
            if !self.sequencer.peek().is_latest(ticket) {
                tracing::info!("discarding stale response #{}", ticket.number());
                return;
            }
            match result {
                Ok(value) => self.state.set(PanelState::Loaded(value)),
                Err(e) => {
                    tracing::error!("request #{} failed: {:#?}", ticket.number(), e);
                    self.state.set(PanelState::TransportFailed(e.to_string()));
                }
            }
        });
    }
}

pub fn use_sequenced_request<T: 'static>() -> SequencedRequest<T> {
    let state = use_signal(|| PanelState::Idle);
    let sequencer = use_signal(RequestSequencer::new);
    SequencedRequest { state, sequencer }
}
