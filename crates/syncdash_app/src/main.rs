mod board;
mod config;
mod driver;
mod input;
mod logging;
mod paint;

use std::sync::{Arc, Mutex};

use anyhow::Context;
use dash_logging::{dash_info, dash_warn};
use syncdash_client::{ClientSettings, HttpStatusApi, StatusApi};
use syncdash_core::ViewSwitcher;

use board::SurfaceBoard;
use config::AppConfig;
use driver::SharedUi;
use input::UiEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::initialize();
    let config = AppConfig::from_env();
    dash_info!(
        "starting syncdash against {} every {:?}",
        config.base_url,
        config.poll_period
    );

    let settings = ClientSettings {
        base_url: config.base_url.clone(),
        ..ClientSettings::default()
    };
    let api: Arc<dyn StatusApi> =
        Arc::new(HttpStatusApi::new(settings).context("building API client")?);

    let shared = Arc::new(Mutex::new(SharedUi {
        board: SurfaceBoard::with_all_surfaces(),
        switcher: ViewSwitcher::default(),
    }));

    paint::enter_terminal().context("preparing terminal")?;

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    input::spawn_input_thread(tx);
    let poll_handle = driver::spawn_poll_loop(api, shared.clone(), config.poll_period);

    while let Some(event) = rx.recv().await {
        match event {
            UiEvent::ShowView(name) => {
                let ui = &mut *shared.lock().expect("lock ui state");
                ui.switcher.show(name);
                if let Err(err) = paint::repaint(&ui.board, &ui.switcher) {
                    dash_warn!("repaint after view switch failed: {err}");
                }
            }
            UiEvent::Quit => break,
        }
    }

    poll_handle.abort();
    paint::leave_terminal().context("restoring terminal")?;
    dash_info!("syncdash stopped");
    Ok(())
}
