//! Request lifecycle state shared by the three views.
//!
//! Every view follows the same re-entrant machine: `Idle → Loading →
//! (Success | Error)`, where triggering the action again from a terminal
//! phase returns to `Loading`. In-flight requests are never cancelled;
//! instead each triggered action takes a monotonically increasing token,
//! and a resolving response is applied only while its token is still the
//! latest issued. Latest user intent wins; superseded responses are
//! discarded.

/// Lifecycle phase of a view's current action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// No action has been triggered yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request rendered successfully.
    Success,
    /// The latest request surfaced an error.
    Error,
}

/// Token identifying one triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic issuer of request tokens for one view.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    /// Issues the next token, superseding all previously issued ones.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Reports whether the token is still the latest issued.
    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}

/// Result of applying a resolved response to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response was the latest and its regions were written.
    Applied,
    /// A newer action superseded the response; nothing was written.
    Superseded,
}

#[cfg(test)]
mod tests {
    use super::RequestSequence;

    #[test]
    fn newest_token_is_current() {
        let mut sequence = RequestSequence::default();
        let first = sequence.begin();
        assert!(sequence.is_current(first));
    }

    #[test]
    fn older_tokens_are_superseded() {
        let mut sequence = RequestSequence::default();
        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
