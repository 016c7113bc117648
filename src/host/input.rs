//! Terminal input: pointer routing and keyboard shortcuts.
//!
//! Crossterm reports raw mouse events with a cell position. [`InputRouter`]
//! turns them into pointer events for the scrub engine, delivering each one
//! to the subscriptions of the scope it belongs to. Terminals have no
//! "pointer left" event, so the router synthesizes one when the pointer
//! moves off the timeline row.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use crate::host::surface::TerminalSurface;
use crate::scrub::{
    Controller, InputRegistry, ListenerScope, Media, PointerEvent, PointerPhase, PointerTarget,
    SubscriptionId,
};

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Host-side input registry and pointer dispatcher.
#[derive(Debug, Default)]
pub struct InputRouter {
    next_id: u64,
    subscriptions: Vec<(SubscriptionId, ListenerScope)>,
    over_timeline: bool,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions for a scope.
    pub fn subscribers(&self, scope: ListenerScope) -> usize {
        self.subscriptions
            .iter()
            .filter(|(_, s)| *s == scope)
            .count()
    }

    pub fn is_subscribed(&self, scope: ListenerScope) -> bool {
        self.subscribers(scope) > 0
    }

    /// Translate a crossterm mouse event into pointer events.
    ///
    /// Returns one event per subscription that should receive it, in
    /// delivery order. Only the left button takes part in scrubbing.
    pub fn route(&mut self, mouse: MouseEvent, surface: &TerminalSurface) -> Vec<PointerEvent> {
        let phase = match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
            MouseEventKind::Down(MouseButton::Left) => PointerPhase::Down,
            MouseEventKind::Up(MouseButton::Left) => PointerPhase::Up,
            _ => return Vec::new(),
        };
        let target = surface.hit_test(mouse.column, mouse.row);
        let x = mouse.column as f64;
        let on_timeline = target != PointerTarget::Document;

        let mut events = Vec::new();
        if self.over_timeline && !on_timeline {
            let leave = PointerEvent::leave(x);
            self.deliver(ListenerScope::TimelinePointer, leave, &mut events);
        }
        self.over_timeline = on_timeline;

        let event = PointerEvent::new(phase, target, x);
        let scope = match phase {
            PointerPhase::Up => ListenerScope::DocumentPointer,
            PointerPhase::Down if !on_timeline => return events,
            _ if on_timeline => ListenerScope::TimelinePointer,
            _ => ListenerScope::DocumentPointer,
        };
        self.deliver(scope, event, &mut events);
        events
    }

    fn deliver(&self, scope: ListenerScope, event: PointerEvent, out: &mut Vec<PointerEvent>) {
        let count = self.subscribers(scope);
        trace!(?scope, ?event, count, "route pointer event");
        out.extend(std::iter::repeat(event).take(count));
    }
}

impl InputRegistry for InputRouter {
    fn subscribe(&mut self, scope: ListenerScope) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.push((id, scope));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|(existing, _)| *existing != id);
    }
}

/// Handle a keyboard event.
///
/// | Key            | Action                          |
/// |----------------|---------------------------------|
/// | Space          | play/pause                      |
/// | m              | mute/unmute                     |
/// | , . Left Right | seek by the configured step     |
/// | Home End       | seek to start/end               |
/// | + -            | playback rate                   |
/// | Esc            | cancel a scrub, else quit       |
/// | q, Ctrl+C      | quit                            |
pub fn handle_key_event<M: Media>(
    key: KeyEvent,
    controller: &mut Controller<M>,
    surface: &mut TerminalSurface,
) -> InputResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }
    let step = controller.settings().seek_step_secs;

    match key.code {
        KeyCode::Char('q') => return InputResult::Quit,
        KeyCode::Esc => {
            if !controller.cancel_scrub(surface) {
                return InputResult::Quit;
            }
        }

        KeyCode::Char(' ') => {
            controller.toggle_play(None);
        }
        KeyCode::Char('m') => {
            controller.toggle_mute();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            controller.speed_up();
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            controller.speed_down();
        }

        KeyCode::Char('<') | KeyCode::Char(',') | KeyCode::Left => {
            controller.seek_by(-step, surface);
        }
        KeyCode::Char('>') | KeyCode::Char('.') | KeyCode::Right => {
            controller.seek_by(step, surface);
        }
        KeyCode::Home => {
            controller.seek_to_start(surface);
        }
        KeyCode::End => {
            controller.seek_to_end(surface);
        }
        _ => {}
    }
    InputResult::Continue
}
