use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Local;
use dash_logging::{dash_debug, dash_warn};
use syncdash_client::{poll, StatusApi};
use syncdash_core::{render_snapshot, ViewSwitcher};
use tokio::task::JoinHandle;

use crate::board::SurfaceBoard;
use crate::paint;

/// UI state shared between the poll driver and the input loop.
pub struct SharedUi {
    pub board: SurfaceBoard,
    pub switcher: ViewSwitcher,
}

/// Starts the poll loop: one cycle immediately, then one per period,
/// forever.
///
/// Each tick spawns its cycle as an independent task and does not await it,
/// so a slow or hung cycle never delays the next tick; overlapping cycles
/// are possible and each completes on its own. Cycle failures surface as an
/// offline snapshot and never stop the timer.
pub fn spawn_poll_loop(
    api: Arc<dyn StatusApi>,
    shared: Arc<Mutex<SharedUi>>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut cycle: u64 = 0;
        // The first interval tick fires immediately.
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            cycle += 1;
            let api = api.clone();
            let shared = shared.clone();
            tokio::spawn(async move {
                run_cycle(cycle, api.as_ref(), &shared).await;
            });
        }
    })
}

/// One fetch-aggregate-render cycle.
pub async fn run_cycle(cycle: u64, api: &dyn StatusApi, shared: &Mutex<SharedUi>) {
    dash_logging::set_poll_cycle(cycle);
    let snapshot = poll(api).await;
    dash_debug!("cycle {cycle}: alive={}", snapshot.alive);

    let now = Local::now().format("%H:%M:%S").to_string();
    let ops = render_snapshot(&snapshot, &now);

    let ui = &mut *shared.lock().expect("lock ui state");
    ui.board.apply(&ops);
    if let Err(err) = paint::repaint(&ui.board, &ui.switcher) {
        dash_warn!("cycle {cycle}: repaint failed: {err}");
    }
}
