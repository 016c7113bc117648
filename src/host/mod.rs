//! Terminal host for the scrub engine.
//!
//! Provides the capabilities the engine consumes, backed by a terminal:
//!
//! - `clock`: wall-clock media source
//! - `surface`: cell-based layout and style table
//! - `input`: mouse routing and keyboard shortcuts
//! - `render`: ratatui frame drawing
//!
//! [`run`] owns the terminal for the duration of a session and drives the
//! controller from crossterm events and tracker deadlines.

pub mod clock;
pub mod error;
pub mod input;
pub mod render;
pub mod surface;

pub use clock::{pick_source, ClockMedia, SUPPORTED_MIME_TYPES};
pub use error::HostError;
pub use input::{handle_key_event, InputResult, InputRouter};
pub use surface::TerminalSurface;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{debug, info, warn};

use crate::scrub::{Controller, ControllerSettings, ListenerScope, Media, MediaEvent};

/// Longest wait for input when no tick is due sooner.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Play `media` in the terminal until the user quits.
///
/// # Errors
/// `HostError::Terminal` if the terminal cannot be set up or drawn to.
pub fn run(media: ClockMedia, settings: ControllerSettings, title: &str) -> Result<(), HostError> {
    let mut terminal = ratatui::try_init()?;
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }

    let result = event_loop(&mut terminal, media, settings, title);

    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        warn!("failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    media: ClockMedia,
    settings: ControllerSettings,
    title: &str,
) -> Result<(), HostError> {
    let size = terminal.size()?;
    let mut surface = TerminalSurface::new(size.width, size.height);
    let mut router = InputRouter::new();
    let mut controller = Controller::new(media, settings);

    controller.on_media_event(MediaEvent::ReadyToPlay, &mut surface, &mut router);
    info!(cols = size.width, rows = size.height, "player started");

    let mut needs_render = true;
    loop {
        if needs_render {
            let snapshot = controller.snapshot();
            terminal.draw(|frame| render::draw(frame, &surface, &snapshot, title))?;
            needs_render = false;
        }

        let timeout = controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, &mut controller, &mut surface) == InputResult::Quit {
                        break;
                    }
                    needs_render = true;
                }
                Event::Mouse(mouse) => {
                    for pointer in router.route(mouse, &surface) {
                        controller.on_pointer(pointer, &mut surface);
                        needs_render = true;
                    }
                }
                Event::Resize(cols, rows) => {
                    surface.resize(cols, rows);
                    if router.is_subscribed(ListenerScope::WindowResize) {
                        controller.on_resize(&mut surface);
                    }
                    debug!(cols, rows, "terminal resized");
                    needs_render = true;
                }
                _ => {}
            }
        }

        if controller.media().is_playing() && controller.media().has_ended() {
            controller.toggle_play(Some(false));
            controller.seek_to_end(&mut surface);
            debug!("playback reached the end");
            needs_render = true;
        }

        if controller.poll(Instant::now(), &mut surface).is_some() {
            needs_render = true;
        }
    }

    info!("player stopped");
    Ok(())
}
