//! Toast notices raised by the controller and by failed boundary calls.

use dioxus::prelude::*;
use store::{Notice, NoticeLevel};

/// How long a toast stays on screen.
pub const TOAST_MS: u64 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub timestamp: String,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeLog {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NoticeLog {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            timestamp: current_time(),
            notice,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub fn use_notices() -> Signal<NoticeLog> {
    use_context::<Signal<NoticeLog>>()
}

pub fn push_notice(log: &mut Signal<NoticeLog>, notice: Notice) {
    match notice.level {
        NoticeLevel::Error | NoticeLevel::Warning => {
            tracing::warn!(title = %notice.title, "{}", notice.description)
        }
        _ => tracing::debug!(title = %notice.title, "notice"),
    }
    log.write().push(notice);
}

fn current_time() -> String {
    store::clock::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_never_reused() {
        let mut log = NoticeLog::default();
        let a = log.push(Notice::info("a", ""));
        let b = log.push(Notice::info("b", ""));
        log.dismiss(a);
        let c = log.push(Notice::info("c", ""));
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(log.toasts.len(), 2);
    }
}
