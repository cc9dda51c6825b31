//! Observes a store's change trigger from native tests.

use leptos::reactive::computed::ArcMemo;
use leptos::reactive::traits::{GetUntracked, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Memo subscribed to a trigger; it re-runs on the first read after a
/// notification.
pub struct ChangeCounter {
    memo: ArcMemo<usize>,
    seen: Cell<usize>,
}

impl ChangeCounter {
    pub fn new(trigger: &ArcTrigger) -> Self {
        let trigger = trigger.clone();
        let runs = Arc::new(AtomicUsize::new(0));
        let memo = ArcMemo::new(move |_| {
            trigger.track();
            runs.fetch_add(1, Ordering::SeqCst) + 1
        });
        let seen = Cell::new(memo.get_untracked());
        Self { memo, seen }
    }

    /// True when the trigger fired since the previous call
    pub fn changed(&self) -> bool {
        let runs = self.memo.get_untracked();
        runs != self.seen.replace(runs)
    }
}
