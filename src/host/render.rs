//! Frame rendering for the terminal host.
//!
//! The timeline is drawn from the styles the engine wrote to the surface,
//! not from the media position directly, so what is on screen is exactly
//! what the indicators were last set to.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::host::surface::TerminalSurface;
use crate::scrub::{ControllerSnapshot, ScrubState};

const FILLED: char = '━';
const EMPTY: char = '─';
const THUMB: char = '⏺';

/// Format a duration in seconds as MM:SS.
///
/// Fractional seconds are truncated; negative values format as zero.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Build the timeline cells from the filled count and thumb cell.
///
/// # Arguments
/// * `width` - Timeline width in cells
/// * `filled` - Number of leading cells covered by progress
/// * `thumb` - Thumb cell relative to the timeline start, if placed
pub fn build_timeline_chars(width: usize, filled: usize, thumb: Option<usize>) -> Vec<char> {
    let mut cells: Vec<char> = (0..width)
        .map(|i| if i < filled { FILLED } else { EMPTY })
        .collect();
    if let Some(thumb) = thumb.filter(|&t| t < width) {
        cells[thumb] = THUMB;
    }
    cells
}

/// Status bar text for a snapshot.
///
/// Shows "loading" until the controller has initialized, and the covered
/// percentage of the timeline once it can be computed.
pub fn status_text(snapshot: &ControllerSnapshot) -> String {
    let playback = match (snapshot.ready, snapshot.playing) {
        (false, _) => "loading",
        (true, true) => "playing",
        (true, false) => "paused",
    };
    let progress = snapshot
        .fraction
        .map(|fraction| format!(" {:.0}%", fraction * 100.0))
        .unwrap_or_default();
    let scrub = match snapshot.state {
        ScrubState::Idle => "",
        ScrubState::Hovering => " | previewing",
        ScrubState::Dragging => " | scrubbing",
    };
    let sound = if snapshot.muted { " | muted" } else { "" };
    format!(
        " {}{}{}{} | {:.2}x | space: play | m: mute | ←/→: seek | q: quit",
        playback,
        progress,
        sound,
        scrub,
        snapshot.rate.value()
    )
}

/// Draw one frame.
pub fn draw(
    frame: &mut Frame,
    surface: &TerminalSurface,
    snapshot: &ControllerSnapshot,
    title: &str,
) {
    let area = frame.area();
    let video = surface.video_rect().intersection(area);
    render_video(frame, video, snapshot, title);

    if let Some(timeline) = surface.timeline_rect() {
        render_timeline(frame, surface, timeline, snapshot);
    }
    if let Some(row) = surface.status_row() {
        let status_area = Rect::new(0, row, area.width, 1).intersection(area);
        let status_style = Style::default().fg(Color::DarkGray);
        let status = Paragraph::new(status_text(snapshot)).style(status_style);
        frame.render_widget(status, status_area);
    }
    if let (Some(rect), Some(placement)) = (surface.preview_rect(), snapshot.preview) {
        render_preview(frame, rect.intersection(area), placement.time_secs);
    }
}

fn render_video(frame: &mut Frame, area: Rect, snapshot: &ControllerSnapshot, title: &str) {
    if area.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let icon = if snapshot.playing { "▶" } else { "⏸" };
    let line = Line::from(vec![
        Span::styled(icon, Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(
            format_duration(snapshot.current_secs),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let top = inner.y + inner.height / 2;
    let centered = Rect::new(inner.x, top, inner.width, 1).intersection(inner);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), centered);
}

fn render_timeline(
    frame: &mut Frame,
    surface: &TerminalSurface,
    timeline: Rect,
    snapshot: &ControllerSnapshot,
) {
    let filled = surface.filled_cells();
    let thumb = surface
        .thumb_column()
        .map(|column| (column - timeline.x) as usize);
    let cells = build_timeline_chars(timeline.width as usize, filled, thumb);

    let filled_style = Style::default().fg(Color::Green);
    let empty_style = Style::default().fg(Color::DarkGray);
    let thumb_style = Style::default().fg(Color::White);

    let spans: Vec<Span> = cells
        .iter()
        .map(|&c| {
            let style = match c {
                THUMB => thumb_style,
                FILLED => filled_style,
                _ => empty_style,
            };
            Span::styled(c.to_string(), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), timeline);

    let area = frame.area();
    let right = timeline.x + timeline.width;
    let time_width = area.width.saturating_sub(right);
    let time_area = Rect::new(right, timeline.y, time_width, 1).intersection(area);
    let total = snapshot
        .duration_secs
        .map_or_else(|| "--:--".to_string(), format_duration);
    let time = format!(" {}/{}", format_duration(snapshot.current_secs), total);
    let label = Paragraph::new(time).style(Style::default().fg(Color::Gray));
    frame.render_widget(label, time_area);
}

fn render_preview(frame: &mut Frame, area: Rect, time_secs: f64) {
    if area.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let top = inner.y + inner.height / 2;
    let label = Rect::new(inner.x, top, inner.width, 1).intersection(inner);
    let text = Paragraph::new(format_duration(time_secs))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, label);
}
