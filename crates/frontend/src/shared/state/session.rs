//! Session state - a pure, event-driven model of the client session.
//!
//! Every piece of UI state that survives a render lives here: the model
//! list, the document registry, the preview selection, the chat subset
//! and the transcript. Views never mutate state directly; they send a
//! [`SessionEvent`] through `AppGlobalContext::dispatch`, and [`apply`]
//! folds it into the state. Keeping the transitions free of `leptos`
//! and `web-sys` lets them run under plain `cargo test`.

use std::collections::BTreeSet;

use contracts::domain::a001_document::{Document, DocumentId};
use contracts::domain::a002_llm_chat::{ChatRequest, ChatTurn};

/// Lifecycle of the preview pane content, tagged with the document the
/// content belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// No document selected yet.
    Empty,
    /// A fetch for `doc_id` is in flight.
    Loading { doc_id: DocumentId },
    /// Extracted text for `doc_id`.
    Ready { doc_id: DocumentId, text: String },
    /// The fetch for `doc_id` failed.
    Failed { doc_id: DocumentId, error: String },
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A transient banner message. `seq` grows monotonically so that a
/// delayed auto-dismiss timer can tell whether the notice it armed for
/// is still the one on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub seq: u64,
}

impl Notice {
    /// Errors stay until dismissed; info and warnings time out.
    pub fn auto_dismisses(&self) -> bool {
        !matches!(self.kind, NoticeKind::Error)
    }
}

/// Why a chat submission was refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatGuard {
    /// The trimmed question is empty. Silent no-op.
    EmptyQuestion,
    /// No model selected (the model list may still be loading).
    NoModel,
    /// The chat subset is empty.
    NoDocuments,
    /// A previous question has not resolved yet.
    AlreadyPending,
}

impl ChatGuard {
    /// Warning text for the notice bar, if this guard warrants one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ChatGuard::EmptyQuestion | ChatGuard::AlreadyPending => None,
            ChatGuard::NoModel => Some("Select a model first."),
            ChatGuard::NoDocuments => Some("Select at least one document for chat."),
        }
    }
}

/// Everything that happens to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The model list arrived; the first entry becomes the selection.
    ModelsLoaded { models: Vec<String> },
    /// The user picked a model. Ignored unless it is in the list.
    ModelSelected { model: String },

    /// A fresh document listing arrived. Selections referring to
    /// documents that did not survive are pruned; if nothing is
    /// selected for preview afterwards, the first document is.
    DocumentsRefreshed { documents: Vec<Document> },
    /// The user clicked a document card.
    PreviewSelected { doc_id: DocumentId },
    /// Preview text arrived for `doc_id`. Dropped when the selection
    /// has moved on since the fetch started.
    PreviewLoaded { doc_id: DocumentId, text: String },
    /// The preview fetch for `doc_id` failed. Same staleness rule.
    PreviewFailed { doc_id: DocumentId, error: String },

    /// The user toggled a document in or out of the chat subset.
    ChatDocToggled { doc_id: DocumentId },
    /// A validated question goes on the transcript and opens the
    /// pending exchange.
    ChatSubmitted { question: String },
    /// The backend answered the pending question.
    ChatAnswered { answer: String },
    /// The pending question failed; the user turn stays on the
    /// transcript.
    ChatFailed { error: String },

    NoticePosted { kind: NoticeKind, text: String },
    NoticeDismissed,
    /// An auto-dismiss timer fired for the notice with this `seq`.
    NoticeExpired { seq: u64 },
}

/// The whole client session. One instance lives behind a signal in
/// `AppGlobalContext`; tests drive it directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub models: Vec<String>,
    pub selected_model: Option<String>,
    pub documents: Vec<Document>,
    pub preview_selection: Option<DocumentId>,
    pub preview: PreviewState,
    pub chat_selection: BTreeSet<DocumentId>,
    pub transcript: Vec<ChatTurn>,
    pub chat_pending: bool,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self, doc_id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| &d.doc_id == doc_id)
    }

    /// The document currently shown in the preview pane.
    pub fn selected_document(&self) -> Option<&Document> {
        self.preview_selection.as_ref().and_then(|id| self.document(id))
    }

    pub fn is_chat_selected(&self, doc_id: &DocumentId) -> bool {
        self.chat_selection.contains(doc_id)
    }

    fn contains_document(&self, doc_id: &DocumentId) -> bool {
        self.documents.iter().any(|d| &d.doc_id == doc_id)
    }

    /// Validates a draft question against the current state and builds
    /// the request for it. Callers send the request only on `Ok`; on
    /// `Err` the guard says whether a warning is due. No state changes
    /// here.
    pub fn chat_request(&self, question: &str) -> Result<ChatRequest, ChatGuard> {
        if self.chat_pending {
            return Err(ChatGuard::AlreadyPending);
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatGuard::EmptyQuestion);
        }
        let Some(model) = self.selected_model.clone() else {
            return Err(ChatGuard::NoModel);
        };
        if self.chat_selection.is_empty() {
            return Err(ChatGuard::NoDocuments);
        }
        Ok(ChatRequest {
            question: question.to_string(),
            model,
            doc_ids: self.chat_selection.iter().cloned().collect(),
        })
    }

    /// Folds one event into the state.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ModelsLoaded { models } => {
                self.selected_model = models.first().cloned();
                self.models = models;
            }
            SessionEvent::ModelSelected { model } => {
                if self.models.contains(&model) {
                    self.selected_model = Some(model);
                }
            }

            SessionEvent::DocumentsRefreshed { documents } => {
                self.documents = documents;
                let known: BTreeSet<DocumentId> =
                    self.documents.iter().map(|d| d.doc_id.clone()).collect();
                self.chat_selection.retain(|id| known.contains(id));
                if self
                    .preview_selection
                    .as_ref()
                    .is_some_and(|id| !known.contains(id))
                {
                    self.preview_selection = None;
                    self.preview = PreviewState::Empty;
                }
                if self.preview_selection.is_none() {
                    if let Some(first) = self.documents.first() {
                        let doc_id = first.doc_id.clone();
                        self.preview_selection = Some(doc_id.clone());
                        self.preview = PreviewState::Loading { doc_id };
                    }
                }
            }
            SessionEvent::PreviewSelected { doc_id } => {
                if self.preview_selection.as_ref() == Some(&doc_id)
                    || !self.contains_document(&doc_id)
                {
                    return;
                }
                self.preview_selection = Some(doc_id.clone());
                self.preview = PreviewState::Loading { doc_id };
            }
            SessionEvent::PreviewLoaded { doc_id, text } => {
                // response for an earlier selection
                if self.preview_selection.as_ref() != Some(&doc_id) {
                    return;
                }
                self.preview = PreviewState::Ready { doc_id, text };
            }
            SessionEvent::PreviewFailed { doc_id, error } => {
                if self.preview_selection.as_ref() != Some(&doc_id) {
                    return;
                }
                self.preview = PreviewState::Failed { doc_id, error };
            }

            SessionEvent::ChatDocToggled { doc_id } => {
                if !self.contains_document(&doc_id) {
                    return;
                }
                if !self.chat_selection.remove(&doc_id) {
                    self.chat_selection.insert(doc_id);
                }
            }
            SessionEvent::ChatSubmitted { question } => {
                let question = question.trim();
                if question.is_empty() || self.chat_pending {
                    return;
                }
                self.transcript.push(ChatTurn::user(question));
                self.chat_pending = true;
            }
            SessionEvent::ChatAnswered { answer } => {
                if !self.chat_pending {
                    return;
                }
                self.transcript.push(ChatTurn::assistant(answer));
                self.chat_pending = false;
            }
            SessionEvent::ChatFailed { error } => {
                if !self.chat_pending {
                    return;
                }
                self.chat_pending = false;
                self.post_notice(NoticeKind::Error, error);
            }

            SessionEvent::NoticePosted { kind, text } => self.post_notice(kind, text),
            SessionEvent::NoticeDismissed => self.notice = None,
            SessionEvent::NoticeExpired { seq } => {
                if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
                    self.notice = None;
                }
            }
        }
    }

    fn post_notice(&mut self, kind: NoticeKind, text: String) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            kind,
            text,
            seq: self.notice_seq,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_document::FileType;
    use contracts::domain::a002_llm_chat::ChatRole;

    fn doc(id: &str, name: &str) -> Document {
        Document {
            doc_id: DocumentId::new(id),
            filename: name.to_string(),
            filetype: FileType::Pdf,
        }
    }

    fn id(s: &str) -> DocumentId {
        DocumentId::new(s)
    }

    fn refreshed(state: &mut SessionState, docs: Vec<Document>) {
        state.apply(SessionEvent::DocumentsRefreshed { documents: docs });
    }

    #[test]
    fn refresh_auto_selects_first_document() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf"), doc("b", "b.txt")]);

        assert_eq!(state.preview_selection, Some(id("a")));
        assert_eq!(state.preview, PreviewState::Loading { doc_id: id("a") });
        assert_eq!(state.selected_document().unwrap().filename, "a.pdf");
    }

    #[test]
    fn refresh_keeps_surviving_selection_and_preview() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf"), doc("b", "b.txt")]);
        state.apply(SessionEvent::PreviewSelected { doc_id: id("b") });
        state.apply(SessionEvent::PreviewLoaded {
            doc_id: id("b"),
            text: "bravo".into(),
        });

        refreshed(
            &mut state,
            vec![doc("a", "a.pdf"), doc("b", "b.txt"), doc("c", "c.md")],
        );

        assert_eq!(state.preview_selection, Some(id("b")));
        assert_eq!(
            state.preview,
            PreviewState::Ready {
                doc_id: id("b"),
                text: "bravo".into()
            }
        );
    }

    #[test]
    fn refresh_prunes_missing_ids() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf"), doc("b", "b.txt")]);
        state.apply(SessionEvent::PreviewSelected { doc_id: id("b") });
        state.apply(SessionEvent::ChatDocToggled { doc_id: id("a") });
        state.apply(SessionEvent::ChatDocToggled { doc_id: id("b") });

        refreshed(&mut state, vec![doc("a", "a.pdf")]);

        // the vanished selection falls back to the first document
        assert_eq!(state.preview_selection, Some(id("a")));
        assert_eq!(state.preview, PreviewState::Loading { doc_id: id("a") });
        assert_eq!(
            state.chat_selection.iter().cloned().collect::<Vec<_>>(),
            vec![id("a")]
        );
    }

    #[test]
    fn reselecting_same_document_is_noop() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf")]);
        state.apply(SessionEvent::PreviewLoaded {
            doc_id: id("a"),
            text: "alpha".into(),
        });

        state.apply(SessionEvent::PreviewSelected { doc_id: id("a") });

        // no second load cycle for the same document
        assert_eq!(
            state.preview,
            PreviewState::Ready {
                doc_id: id("a"),
                text: "alpha".into()
            }
        );
    }

    #[test]
    fn unknown_preview_selection_is_ignored() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf")]);

        state.apply(SessionEvent::PreviewSelected { doc_id: id("ghost") });

        assert_eq!(state.preview_selection, Some(id("a")));
    }

    #[test]
    fn preview_response_for_superseded_selection_is_dropped() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf"), doc("b", "b.txt")]);
        state.apply(SessionEvent::PreviewSelected { doc_id: id("b") });

        // the response for "a" lands after the user moved to "b"
        state.apply(SessionEvent::PreviewLoaded {
            doc_id: id("a"),
            text: "alpha".into(),
        });
        assert_eq!(state.preview, PreviewState::Loading { doc_id: id("b") });

        state.apply(SessionEvent::PreviewLoaded {
            doc_id: id("b"),
            text: "bravo".into(),
        });
        assert_eq!(
            state.preview,
            PreviewState::Ready {
                doc_id: id("b"),
                text: "bravo".into()
            }
        );
    }

    #[test]
    fn preview_failure_for_superseded_selection_is_dropped() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf"), doc("b", "b.txt")]);
        state.apply(SessionEvent::PreviewSelected { doc_id: id("b") });

        state.apply(SessionEvent::PreviewFailed {
            doc_id: id("a"),
            error: "boom".into(),
        });
        assert_eq!(state.preview, PreviewState::Loading { doc_id: id("b") });

        state.apply(SessionEvent::PreviewFailed {
            doc_id: id("b"),
            error: "boom".into(),
        });
        assert_eq!(
            state.preview,
            PreviewState::Failed {
                doc_id: id("b"),
                error: "boom".into()
            }
        );
    }

    #[test]
    fn empty_question_is_rejected_without_side_effects() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::ModelsLoaded {
            models: vec!["gpt-x".into()],
        });
        refreshed(&mut state, vec![doc("a", "a.pdf")]);
        state.apply(SessionEvent::ChatDocToggled { doc_id: id("a") });

        assert_eq!(state.chat_request("   "), Err(ChatGuard::EmptyQuestion));
        assert_eq!(ChatGuard::EmptyQuestion.message(), None);

        state.apply(SessionEvent::ChatSubmitted {
            question: "   ".into(),
        });
        assert!(state.transcript.is_empty());
        assert!(!state.chat_pending);
    }

    #[test]
    fn chat_requires_model_and_documents() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf")]);

        assert_eq!(state.chat_request("hi"), Err(ChatGuard::NoModel));
        assert_eq!(
            ChatGuard::NoModel.message(),
            Some("Select a model first.")
        );

        state.apply(SessionEvent::ModelsLoaded {
            models: vec!["gpt-x".into()],
        });
        assert_eq!(state.chat_request("hi"), Err(ChatGuard::NoDocuments));
        assert_eq!(
            ChatGuard::NoDocuments.message(),
            Some("Select at least one document for chat.")
        );
    }

    #[test]
    fn question_and_answer_append_in_order() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::ModelsLoaded {
            models: vec!["gpt-x".into()],
        });
        refreshed(&mut state, vec![doc("a", "a.pdf")]);
        state.apply(SessionEvent::ChatDocToggled { doc_id: id("a") });

        let request = state.chat_request("  What is the total?  ").unwrap();
        assert_eq!(request.question, "What is the total?");
        assert_eq!(request.model, "gpt-x");
        assert_eq!(request.doc_ids, vec![id("a")]);

        state.apply(SessionEvent::ChatSubmitted {
            question: request.question.clone(),
        });
        assert!(state.chat_pending);
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].role, ChatRole::User);
        assert_eq!(state.transcript[0].text, "What is the total?");

        state.apply(SessionEvent::ChatAnswered {
            answer: "42".into(),
        });
        assert!(!state.chat_pending);
        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript[1].role, ChatRole::Assistant);
        assert_eq!(state.transcript[1].text, "42");
    }

    #[test]
    fn failed_chat_keeps_the_user_turn() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::ModelsLoaded {
            models: vec!["gpt-x".into()],
        });
        refreshed(&mut state, vec![doc("a", "a.pdf")]);
        state.apply(SessionEvent::ChatDocToggled { doc_id: id("a") });
        state.apply(SessionEvent::ChatSubmitted {
            question: "hi".into(),
        });

        state.apply(SessionEvent::ChatFailed {
            error: "model offline".into(),
        });

        assert!(!state.chat_pending);
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].role, ChatRole::User);
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "model offline");
        assert!(!notice.auto_dismisses());
    }

    #[test]
    fn second_submission_while_pending_is_ignored() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::ModelsLoaded {
            models: vec!["gpt-x".into()],
        });
        refreshed(&mut state, vec![doc("a", "a.pdf")]);
        state.apply(SessionEvent::ChatDocToggled { doc_id: id("a") });
        state.apply(SessionEvent::ChatSubmitted {
            question: "first".into(),
        });

        assert_eq!(state.chat_request("second"), Err(ChatGuard::AlreadyPending));
        state.apply(SessionEvent::ChatSubmitted {
            question: "second".into(),
        });
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].text, "first");
    }

    #[test]
    fn model_choice_must_come_from_the_list() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::ModelsLoaded {
            models: vec!["gpt-x".into(), "ollama:llama3.1".into()],
        });
        assert_eq!(state.selected_model.as_deref(), Some("gpt-x"));

        state.apply(SessionEvent::ModelSelected {
            model: "bogus".into(),
        });
        assert_eq!(state.selected_model.as_deref(), Some("gpt-x"));

        state.apply(SessionEvent::ModelSelected {
            model: "ollama:llama3.1".into(),
        });
        assert_eq!(state.selected_model.as_deref(), Some("ollama:llama3.1"));
    }

    #[test]
    fn chat_toggle_tracks_known_documents_only() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf")]);

        state.apply(SessionEvent::ChatDocToggled { doc_id: id("ghost") });
        assert!(state.chat_selection.is_empty());

        state.apply(SessionEvent::ChatDocToggled { doc_id: id("a") });
        assert!(state.is_chat_selected(&id("a")));

        state.apply(SessionEvent::ChatDocToggled { doc_id: id("a") });
        assert!(!state.is_chat_selected(&id("a")));
    }

    #[test]
    fn notice_expiry_checks_sequence() {
        let mut state = SessionState::new();
        state.apply(SessionEvent::NoticePosted {
            kind: NoticeKind::Info,
            text: "uploaded".into(),
        });
        let first_seq = state.notice.as_ref().unwrap().seq;

        state.apply(SessionEvent::NoticePosted {
            kind: NoticeKind::Error,
            text: "broke".into(),
        });

        // the timer armed for the info notice must not clear the error
        state.apply(SessionEvent::NoticeExpired { seq: first_seq });
        assert_eq!(state.notice.as_ref().unwrap().text, "broke");

        let second_seq = state.notice.as_ref().unwrap().seq;
        state.apply(SessionEvent::NoticeExpired { seq: second_seq });
        assert!(state.notice.is_none());

        state.apply(SessionEvent::NoticePosted {
            kind: NoticeKind::Warning,
            text: "careful".into(),
        });
        state.apply(SessionEvent::NoticeDismissed);
        assert!(state.notice.is_none());
    }

    #[test]
    fn upload_then_preview_flow() {
        let mut state = SessionState::new();
        refreshed(&mut state, vec![doc("a", "a.pdf"), doc("b", "b.txt")]);
        assert_eq!(state.preview_selection, Some(id("a")));

        state.apply(SessionEvent::PreviewLoaded {
            doc_id: id("a"),
            text: "alpha".into(),
        });
        assert_eq!(
            state.preview,
            PreviewState::Ready {
                doc_id: id("a"),
                text: "alpha".into()
            }
        );

        state.apply(SessionEvent::PreviewSelected { doc_id: id("b") });
        assert_eq!(state.preview, PreviewState::Loading { doc_id: id("b") });

        state.apply(SessionEvent::PreviewLoaded {
            doc_id: id("b"),
            text: "bravo".into(),
        });
        assert_eq!(
            state.preview,
            PreviewState::Ready {
                doc_id: id("b"),
                text: "bravo".into()
            }
        );
    }
}
