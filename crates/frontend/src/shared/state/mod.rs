pub mod session;

pub use session::{
    ChatGuard, Notice, NoticeKind, PreviewState, SessionEvent, SessionState,
};
