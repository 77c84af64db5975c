/// Session state: the single writer for history, current result and
/// request lifecycle.
use std::rc::Rc;

use yew::Reducible;

use crate::history::{History, HistoryEntry};
use crate::shorten::ShortenError;

/// Lifecycle of the shorten request that owns the display.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failure(String),
}

/// Everything the page session owns. Mutated only through [`SessionAction`],
/// so every transition is in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub history: History,
    pub phase: Phase,
    /// Most recently confirmed short URL, if any.
    pub current: Option<String>,
    /// Sequence number of the latest submission. Completions carrying an
    /// older number lost the display to a newer submission and are dropped.
    latest_seq: u64,
}

pub enum SessionAction {
    /// A new long URL was submitted; `seq` was issued at submission time.
    Submitted { seq: u64 },
    /// The request for `seq` finished.
    Completed {
        seq: u64,
        long_url: String,
        result: Result<String, ShortenError>,
    },
    /// The user deleted a history entry.
    Deleted { id: String },
}

impl Session {
    pub fn new() -> Self {
        Session {
            history: History::new(),
            phase: Phase::Idle,
            current: None,
            latest_seq: 0,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Submitted { seq } => {
                next.latest_seq = seq;
                next.phase = Phase::Submitting;
            }
            SessionAction::Completed { seq, .. } if seq != next.latest_seq => {
                // Stale: a newer submission owns the display. Nothing is
                // applied, not even a successful shorten.
                return self;
            }
            SessionAction::Completed {
                long_url, result, ..
            } => match result {
                Ok(short_url) => {
                    next.history
                        .prepend(HistoryEntry::new(long_url, short_url.clone()));
                    next.current = Some(short_url);
                    next.phase = Phase::Success;
                }
                // History and the current result stay as they were.
                Err(e) => next.phase = Phase::Failure(e.to_string()),
            },
            SessionAction::Deleted { id } => {
                next.history.remove(&id);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(session: Session, action: SessionAction) -> Session {
        (*Rc::new(session).reduce(action)).clone()
    }

    fn submit_and_succeed(session: Session, seq: u64, long_url: &str, short_url: &str) -> Session {
        let session = apply(session, SessionAction::Submitted { seq });
        apply(
            session,
            SessionAction::Completed {
                seq,
                long_url: long_url.to_string(),
                result: Ok(short_url.to_string()),
            },
        )
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = Session::new();
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.history.is_empty());
        assert_eq!(session.current, None);
    }

    #[test]
    fn test_submit_enters_submitting() {
        let session = apply(Session::new(), SessionAction::Submitted { seq: 1 });
        assert_eq!(session.phase, Phase::Submitting);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_success_sets_current_and_prepends_history() {
        let session = submit_and_succeed(
            Session::new(),
            1,
            "example.com",
            "https://tiny.example/abc",
        );

        assert_eq!(session.phase, Phase::Success);
        assert_eq!(session.current.as_deref(), Some("https://tiny.example/abc"));
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.entries()[0].long_url, "example.com");
        assert_eq!(
            session.history.entries()[0].short_url,
            "https://tiny.example/abc"
        );
    }

    #[test]
    fn test_each_success_grows_history_by_one() {
        let session = submit_and_succeed(Session::new(), 1, "a.com", "https://t.co/a");
        let session = submit_and_succeed(session, 2, "b.com", "https://t.co/b");

        assert_eq!(session.history.len(), 2);
        // most recent first
        assert_eq!(session.history.entries()[0].long_url, "b.com");
    }

    #[test]
    fn test_failure_keeps_history_and_current() {
        let session = submit_and_succeed(Session::new(), 1, "good.com", "https://t.co/g");

        let session = apply(session, SessionAction::Submitted { seq: 2 });
        let session = apply(
            session,
            SessionAction::Completed {
                seq: 2,
                long_url: "bad-url".to_string(),
                result: Err(ShortenError::Service(400)),
            },
        );

        assert!(matches!(session.phase, Phase::Failure(_)));
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.current.as_deref(), Some("https://t.co/g"));
    }

    #[test]
    fn test_failure_on_empty_session() {
        let session = apply(Session::new(), SessionAction::Submitted { seq: 1 });
        let session = apply(
            session,
            SessionAction::Completed {
                seq: 1,
                long_url: "bad-url".to_string(),
                result: Err(ShortenError::Network("failed to fetch".to_string())),
            },
        );

        assert!(session.history.is_empty());
        assert_eq!(session.current, None);
        match &session.phase {
            Phase::Failure(msg) => assert!(msg.contains("failed to fetch")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_resubmission_replaces_error_display() {
        let session = apply(Session::new(), SessionAction::Submitted { seq: 1 });
        let session = apply(
            session,
            SessionAction::Completed {
                seq: 1,
                long_url: "bad-url".to_string(),
                result: Err(ShortenError::Service(400)),
            },
        );
        let session = apply(session, SessionAction::Submitted { seq: 2 });

        assert_eq!(session.phase, Phase::Submitting);
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let session = apply(Session::new(), SessionAction::Submitted { seq: 1 });
        let session = apply(session, SessionAction::Submitted { seq: 2 });

        // seq 1 finishes after seq 2 was issued: dropped entirely
        let session = apply(
            session,
            SessionAction::Completed {
                seq: 1,
                long_url: "old.com".to_string(),
                result: Ok("https://t.co/old".to_string()),
            },
        );
        assert_eq!(session.phase, Phase::Submitting);
        assert!(session.history.is_empty());
        assert_eq!(session.current, None);

        // the latest submission still lands
        let session = apply(
            session,
            SessionAction::Completed {
                seq: 2,
                long_url: "new.com".to_string(),
                result: Ok("https://t.co/new".to_string()),
            },
        );
        assert_eq!(session.phase, Phase::Success);
        assert_eq!(session.current.as_deref(), Some("https://t.co/new"));
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.entries()[0].long_url, "new.com");
    }

    #[test]
    fn test_stale_failure_does_not_clobber_newer_result() {
        let session = apply(Session::new(), SessionAction::Submitted { seq: 1 });
        let session = apply(session, SessionAction::Submitted { seq: 2 });
        let session = apply(
            session,
            SessionAction::Completed {
                seq: 2,
                long_url: "new.com".to_string(),
                result: Ok("https://t.co/new".to_string()),
            },
        );

        let session = apply(
            session,
            SessionAction::Completed {
                seq: 1,
                long_url: "old.com".to_string(),
                result: Err(ShortenError::Service(500)),
            },
        );

        assert_eq!(session.phase, Phase::Success);
        assert_eq!(session.current.as_deref(), Some("https://t.co/new"));
    }

    #[test]
    fn test_delete_removes_only_that_entry() {
        let session = submit_and_succeed(Session::new(), 1, "a.com", "https://t.co/a");
        let session = submit_and_succeed(session, 2, "b.com", "https://t.co/b");
        let id = session.history.entries()[1].id.clone(); // a.com

        let session = apply(session, SessionAction::Deleted { id });

        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.entries()[0].long_url, "b.com");
        // deletion leaves phase and current alone
        assert_eq!(session.phase, Phase::Success);
        assert_eq!(session.current.as_deref(), Some("https://t.co/b"));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let session = submit_and_succeed(Session::new(), 1, "a.com", "https://t.co/a");
        let session = apply(
            session,
            SessionAction::Deleted {
                id: "nonexistent".to_string(),
            },
        );
        assert_eq!(session.history.len(), 1);
    }
}
