//! Staggered, concurrency-capped dispatch.
//!
//! # Scheduling
//! ```text
//! recipient i  → initiated no earlier than start + interval × i
//! in flight    → at most max_in_flight at once
//! completion   → any order; results returned in recipient order
//! ```
//!
//! # Design Decisions
//! - Everything runs on the caller's task (no spawn), so the context is
//!   borrowed rather than shared through `Arc`
//! - Deadlines are absolute: a slot freed late does not push later
//!   recipients further back than their own deadline
//! - A failure never cancels other recipients

use std::future::Future;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tokio::time::{sleep_until, Instant};

use crate::config::Settings;

/// Timing and concurrency for a dispatch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Spacing between initiations.
    pub interval: Duration,
    /// Maximum units of work in flight.
    pub max_in_flight: usize,
}

impl DispatchConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            interval: Duration::from_millis(settings.dispatch_interval_ms),
            max_in_flight: settings.max_in_flight,
        }
    }

    /// Offset from run start at which recipient `index` may begin.
    pub fn delay_for(&self, index: usize) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Run `action` once per item, staggered and capped.
///
/// Returns `(index, output)` pairs sorted by index.
pub async fn dispatch<'a, T, F, Fut, O>(
    items: &'a [T],
    config: &DispatchConfig,
    action: F,
) -> Vec<(usize, O)>
where
    F: Fn(usize, &'a T) -> Fut,
    Fut: Future<Output = O>,
{
    let start = Instant::now();
    let action = &action;

    let mut results: Vec<(usize, O)> = stream::iter(items.iter().enumerate())
        .map(|(index, item)| {
            let deadline = start + config.delay_for(index);
            async move {
                sleep_until(deadline).await;
                tracing::debug!(index, "Dispatching");
                (index, action(index, item).await)
            }
        })
        .buffer_unordered(config.max_in_flight.max(1))
        .collect()
        .await;

    results.sort_by_key(|(index, _)| *index);
    results
}
