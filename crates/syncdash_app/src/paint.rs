//! Terminal painter: projects the surface board's current content onto the
//! screen via crossterm. Only the active panel is drawn.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use syncdash_core::{Surface, Tone, ViewSwitcher, VIEW_COLLECTION, VIEW_LOGS};

use crate::board::SurfaceBoard;

/// Lines of the mini log surface shown on the dashboard panel. The surface
/// holds the full text; the cap is purely presentation.
const MINI_LOG_LINES: usize = 10;

pub fn enter_terminal() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    queue!(out, EnterAlternateScreen, Hide)?;
    out.flush()
}

pub fn leave_terminal() -> io::Result<()> {
    let mut out = io::stdout();
    queue!(out, LeaveAlternateScreen, Show)?;
    out.flush()?;
    terminal::disable_raw_mode()
}

pub fn repaint(board: &SurfaceBoard, switcher: &ViewSwitcher) -> io::Result<()> {
    let mut out = io::stdout();
    paint(&mut out, board, switcher)?;
    out.flush()
}

fn paint(out: &mut impl Write, board: &SurfaceBoard, switcher: &ViewSwitcher) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    paint_text_cell(out, board, Surface::HeaderStatus)?;
    line(out, "")?;

    match switcher.active() {
        VIEW_COLLECTION => {
            paint_collection(out, board, Surface::CollectionBody, Surface::CollectionWarning)?;
        }
        VIEW_LOGS => paint_logs(out, board, Surface::FullLogs, None)?,
        _ => paint_dashboard(out, board)?,
    }

    line(out, "")?;
    line(out, "[1] dashboard  [2] collection  [3] logs  [q] quit")
}

fn paint_dashboard(out: &mut impl Write, board: &SurfaceBoard) -> io::Result<()> {
    section(out, "SERVICE UNITS")?;
    paint_rows(out, board, Surface::UnitList)?;
    line(out, "")?;

    section(out, "QUEUE")?;
    let slots = [
        ("pending", Surface::CountPending),
        ("in progress", Surface::CountInProgress),
        ("failed", Surface::CountFailed),
        ("done", Surface::CountDone),
    ];
    let summary = slots
        .iter()
        .map(|(label, surface)| {
            let value = board.text(*surface).map(|(text, _)| text).unwrap_or("-");
            format!("{label}: {value}")
        })
        .collect::<Vec<_>>()
        .join("   ");
    line(out, &summary)?;
    line(out, "")?;

    section(out, "CURRENT JOB")?;
    paint_text_cell(out, board, Surface::JobDetails)?;
    line(out, "")?;

    section(out, "RECENT ACTIVITY")?;
    paint_logs(out, board, Surface::MiniLogs, Some(MINI_LOG_LINES))?;
    line(out, "")?;

    section(out, "COLLECTION")?;
    paint_collection(
        out,
        board,
        Surface::DashboardCollectionBody,
        Surface::DashboardCollectionWarning,
    )
}

fn paint_collection(
    out: &mut impl Write,
    board: &SurfaceBoard,
    body: Surface,
    warning: Surface,
) -> io::Result<()> {
    if board.is_visible(warning) {
        toned_line(out, "Collection inventory is unavailable.", Tone::Alert)?;
    }
    paint_rows(out, board, body)
}

fn paint_rows(out: &mut impl Write, board: &SurfaceBoard, surface: Surface) -> io::Result<()> {
    if let Some(rows) = board.rows(surface) {
        for row in rows {
            toned_line(out, &row.cells.join("  "), row.tone)?;
        }
    }
    Ok(())
}

fn paint_text_cell(out: &mut impl Write, board: &SurfaceBoard, surface: Surface) -> io::Result<()> {
    if let Some((text, tone)) = board.text(surface) {
        for part in text.lines() {
            toned_line(out, part, tone)?;
        }
    }
    Ok(())
}

fn paint_logs(
    out: &mut impl Write,
    board: &SurfaceBoard,
    surface: Surface,
    tail: Option<usize>,
) -> io::Result<()> {
    if let Some((text, tone)) = board.text(surface) {
        let lines: Vec<&str> = text.lines().collect();
        let start = tail.map_or(0, |cap| lines.len().saturating_sub(cap));
        for part in &lines[start..] {
            toned_line(out, part, tone)?;
        }
    }
    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    toned_line(out, title, Tone::Muted)
}

fn line(out: &mut impl Write, text: &str) -> io::Result<()> {
    // Raw mode: explicit carriage return.
    queue!(out, Print(text), Print("\r\n"))
}

fn toned_line(out: &mut impl Write, text: &str, tone: Tone) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(color_for(tone)),
        Print(text),
        ResetColor,
        Print("\r\n")
    )
}

fn color_for(tone: Tone) -> Color {
    match tone {
        Tone::Normal => Color::Reset,
        Tone::Alert => Color::Red,
        Tone::Active => Color::Green,
        Tone::Failed => Color::Red,
        Tone::Inactive => Color::DarkGrey,
        Tone::Downloaded => Color::Green,
        Tone::Pending => Color::Yellow,
        Tone::InProgress => Color::Blue,
        Tone::Muted => Color::DarkGrey,
    }
}
