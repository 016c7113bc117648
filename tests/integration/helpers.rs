//! Shared setup for integration tests

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use scrubber::host::{ClockMedia, InputRouter, TerminalSurface};
use scrubber::scrub::{Controller, ControllerSettings, MediaEvent};
use scrubber::Config;

/// Row of the timeline on an 80x24 terminal.
pub const TIMELINE_ROW: u16 = 22;

/// 66 seconds on an 80x24 terminal: the 66-cell timeline maps one cell to
/// one second, starting at column 1.
pub const DURATION_MS: f64 = 66_000.0;

pub struct Player {
    pub controller: Controller<ClockMedia>,
    pub surface: TerminalSurface,
    pub router: InputRouter,
}

impl Player {
    /// A ready, paused player on an 80x24 terminal.
    pub fn ready() -> Self {
        Self::ready_with(settings())
    }

    pub fn ready_with(settings: ControllerSettings) -> Self {
        let mut surface = TerminalSurface::new(80, 24);
        let mut router = InputRouter::new();
        let mut controller = Controller::new(ClockMedia::new(DURATION_MS), settings);
        controller.on_media_event(MediaEvent::ReadyToPlay, &mut surface, &mut router);
        Self {
            controller,
            surface,
            router,
        }
    }

    /// Deliver a media notification the way the host does.
    pub fn media_event(&mut self, event: MediaEvent) {
        self.controller
            .on_media_event(event, &mut self.surface, &mut self.router);
    }

    /// Route a mouse event the way the event loop does.
    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        for pointer in self.router.route(event, &self.surface) {
            self.controller.on_pointer(pointer, &mut self.surface);
        }
    }

    pub fn hover(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Moved, column, row);
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    pub fn drag(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
    }

    pub fn release(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }
}

/// Terminal-sized settings without autoplay.
pub fn settings() -> ControllerSettings {
    ControllerSettings {
        autoplay: false,
        ..Config::default().controller_settings()
    }
}
