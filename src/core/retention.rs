use chrono::{NaiveDateTime, TimeDelta};

use crate::{history::History, prelude::*};

/// Keep the entries strictly newer than `now - window`, preserving the order.
pub fn prune(history: History, now: NaiveDateTime, window: TimeDelta) -> History {
    let Some(cutoff) = now.checked_sub_signed(window) else {
        return history;
    };
    let n_before = history.len();
    let pruned = History::from(
        history.into_iter().filter(|entry| entry.timestamp > cutoff).collect::<Vec<_>>(),
    );
    debug!(n_pruned = n_before - pruned.len(), n_retained = pruned.len(), %cutoff, "pruned");
    pruned
}
