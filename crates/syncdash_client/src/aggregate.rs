use dash_logging::dash_warn;
use syncdash_core::Snapshot;

use crate::StatusApi;

/// Runs one poll cycle against the API and assembles the cycle's snapshot.
///
/// The status, queue, and logs fetches fan out concurrently. Any failure
/// among the three classifies the whole cycle offline: the snapshot comes
/// back with `alive == false` and the collection fetch is not attempted.
/// The collection fetch runs afterwards, best-effort: its failure is logged
/// and leaves `collection` unset without demoting liveness.
///
/// Never panics and never lets an error escape the cycle boundary.
pub async fn poll(api: &dyn StatusApi) -> Snapshot {
    let (status, queue, logs) = tokio::join!(
        api.fetch_status(),
        api.fetch_queue(),
        api.fetch_logs()
    );

    let (status, queue, logs) = match (status, queue, logs) {
        (Ok(status), Ok(queue), Ok(logs)) => (status, queue, logs),
        (status, queue, logs) => {
            let cycle = dash_logging::get_poll_cycle();
            for (resource, err) in [
                ("status", status.err()),
                ("queue", queue.err()),
                ("logs", logs.err()),
            ] {
                if let Some(err) = err {
                    dash_warn!("cycle {cycle}: {resource} fetch failed: {err}");
                }
            }
            return Snapshot::offline();
        }
    };

    let collection = match api.fetch_collection().await {
        Ok(response) => Some(response.into_view()),
        Err(err) => {
            dash_warn!(
                "cycle {}: collection fetch failed (non-fatal): {err}",
                dash_logging::get_poll_cycle()
            );
            None
        }
    };

    Snapshot {
        alive: true,
        units: status.systemd,
        queue_counts: queue.counts,
        current_job: queue.current_job,
        logs: logs.logs,
        collection,
    }
}
