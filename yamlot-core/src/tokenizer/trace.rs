use crate::tokenizer::State;
use tracing::trace;
use yamlot_common::TokenKind;

/// One scanner step: the state it started in, the character consumed
/// (`None` at end of input), the state it moved to and the token it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    pub state: State,
    pub ch: Option<char>,
    pub next: State,
    pub emitted: Option<TokenKind>,
}

/// Receiver of scanner steps. Never influences the produced tokens.
pub trait TraceSink {
    fn record(&mut self, event: &TraceEvent);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn record(&mut self, _event: &TraceEvent) {}
}

/// Forwards every step to `tracing` at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, event: &TraceEvent) {
        trace!(
            target: "yamlot::scanner",
            state = ?event.state,
            ch = ?event.ch,
            next = ?event.next,
            emitted = ?event.emitted,
            "step"
        );
    }
}

impl<F: FnMut(&TraceEvent)> TraceSink for F {
    fn record(&mut self, event: &TraceEvent) {
        self(event);
    }
}
