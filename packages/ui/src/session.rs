//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the single [`AppState`] for the visit and hands out
//! copies of [`Session`], a thin handle that routes every mutation through
//! [`AppState::dispatch`] and turns returned notices into toasts.

use api::{ApiError, MockBackend};
use dioxus::prelude::*;
use store::{Action, AppState, Notice, PendingKey, ScholarMatchConfig};

use crate::notices::{push_notice, NoticeLog};

/// Copyable handle to the session state and its toast log.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    pub state: Signal<AppState>,
    pub notices: Signal<NoticeLog>,
}

impl Session {
    pub fn dispatch(mut self, action: Action) {
        let notice = self.state.write().dispatch(action);
        if let Some(notice) = notice {
            push_notice(&mut self.notices, notice);
        }
    }

    pub fn notify(mut self, notice: Notice) {
        push_notice(&mut self.notices, notice);
    }

    /// Surface a failed boundary call.
    pub fn fail(self, err: &ApiError) {
        self.notify(Notice::error(err.title(), err.to_string()));
    }

    /// Claim `key` for a round-trip. `false` means one is already in flight.
    pub fn begin(mut self, key: PendingKey) -> bool {
        self.state.write().try_begin(key)
    }

    pub fn finish(mut self, key: &PendingKey) {
        self.state.write().finish(key);
    }

    pub fn is_pending(&self, key: &PendingKey) -> bool {
        self.state.read().is_pending(key)
    }
}

/// Get the session handle installed by [`SessionProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

pub fn use_backend() -> MockBackend {
    use_context::<MockBackend>()
}

pub fn use_config() -> ScholarMatchConfig {
    use_context::<ScholarMatchConfig>()
}

/// Wrap the app with this to provide the session, backend, and config contexts.
#[component]
pub fn SessionProvider(config: ScholarMatchConfig, children: Element) -> Element {
    let state = use_signal(AppState::new);
    let notices = use_signal(NoticeLog::default);

    use_context_provider(|| notices);
    use_context_provider(|| Session { state, notices });
    let backend_config = config.clone();
    use_context_provider(move || MockBackend::new(backend_config));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
