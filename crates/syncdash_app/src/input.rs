use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use dash_logging::dash_warn;
use tokio::sync::mpsc::UnboundedSender;
use syncdash_core::{VIEW_COLLECTION, VIEW_DASHBOARD, VIEW_LOGS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ShowView(&'static str),
    Quit,
}

/// Spawns a blocking reader thread that forwards key presses as UI events.
///
/// The thread exits when the receiving side is dropped or on quit.
pub fn spawn_input_thread(tx: UnboundedSender<UiEvent>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let ui_event = match key.code {
                    KeyCode::Char('1') => Some(UiEvent::ShowView(VIEW_DASHBOARD)),
                    KeyCode::Char('2') => Some(UiEvent::ShowView(VIEW_COLLECTION)),
                    KeyCode::Char('3') => Some(UiEvent::ShowView(VIEW_LOGS)),
                    KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
                    _ => None,
                };
                if let Some(ui_event) = ui_event {
                    if tx.send(ui_event).is_err() || ui_event == UiEvent::Quit {
                        break;
                    }
                }
            }
            Ok(_) => {}
            Err(err) => {
                dash_warn!("input read failed: {err}");
                break;
            }
        }
    });
}
