use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::{future, stream, StreamExt};

use crate::error::AppResult;

/// Runs `task` once per unit with at most `concurrency` units in flight
///
/// A failing unit is logged and skipped. When `cap` is set, no new unit is
/// launched once the items collected so far reach it; units already running
/// still complete. Results are concatenated in launch order, so completion
/// order never shows up in the output.
pub async fn fan_out<U, T, F, Fut>(
    units: Vec<U>,
    concurrency: usize,
    cap: Option<usize>,
    task: F,
) -> Vec<T>
where
    U: Display,
    F: Fn(U) -> Fut,
    Fut: Future<Output = AppResult<Vec<T>>>,
{
    let cap = cap.unwrap_or(usize::MAX);
    let collected = AtomicUsize::new(0);
    let collected = &collected;
    let task = &task;

    // The iterator is pulled lazily, one unit per free worker slot.
    let launchable = units
        .into_iter()
        .enumerate()
        .take_while(move |_| collected.load(Ordering::SeqCst) < cap);

    let mut finished: Vec<(usize, Vec<T>)> = stream::iter(launchable)
        .map(|(index, unit)| async move {
            let label = unit.to_string();
            match task(unit).await {
                Ok(items) => {
                    collected.fetch_add(items.len(), Ordering::SeqCst);
                    Some((index, items))
                }
                Err(e) => {
                    tracing::warn!(unit = %label, error = %e, "Fan-out unit failed, skipping");
                    None
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .filter_map(future::ready)
        .collect()
        .await;

    finished.sort_by_key(|(index, _)| *index);
    finished.into_iter().flat_map(|(_, items)| items).collect()
}
