//! The scrub state machine.
//!
//! `ScrubSession` is pure: it consumes pointer events plus a read-only view of
//! the world and returns the commands to execute. It never touches media or
//! surfaces itself, and it is the only producer of playback commands during
//! pointer interaction.
//!
//! | State          | Event                    | Next     |
//! |----------------|--------------------------|----------|
//! | Idle/Hovering  | move over timeline       | Hovering |
//! | Hovering       | leave timeline           | Idle     |
//! | Idle/Hovering  | down on timeline/thumb   | Dragging |
//! | Dragging       | move anywhere            | Dragging |
//! | Dragging       | up anywhere              | Idle     |
//! | Dragging       | leave timeline           | Dragging |

use tracing::debug;

use super::geometry::TimelineGeometry;
use super::mapper::{offset_from_time, time_from_offset};

/// Interaction state. Exactly one per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubState {
    #[default]
    Idle,
    /// Pointer over the timeline, preview following it
    Hovering,
    /// Pointer held down, playback retargeted live
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

/// The most specific element a pointer event landed on.
///
/// Hosts deliver each physical event once, to its most specific target.
/// Pointer-down on the thumb therefore never also reaches the timeline's
/// handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The draggable position indicator
    Thumb,
    /// The timeline strip
    Timeline,
    /// Anywhere else in the document
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub target: PointerTarget,
    /// Pointer x in screen coordinates
    pub x: f64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, target: PointerTarget, x: f64) -> Self {
        Self { phase, target, x }
    }

    pub fn down(target: PointerTarget, x: f64) -> Self {
        Self::new(PointerPhase::Down, target, x)
    }

    pub fn moved(target: PointerTarget, x: f64) -> Self {
        Self::new(PointerPhase::Move, target, x)
    }

    pub fn up(target: PointerTarget, x: f64) -> Self {
        Self::new(PointerPhase::Up, target, x)
    }

    pub fn leave(x: f64) -> Self {
        Self::new(PointerPhase::Leave, PointerTarget::Timeline, x)
    }

    fn is_on_timeline(&self) -> bool {
        matches!(self.target, PointerTarget::Timeline | PointerTarget::Thumb)
    }
}

/// Side effects requested by a transition, executed in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubCommand {
    /// Position the preview under this pointer x and show it
    ShowPreview { x: f64 },
    HidePreview,
    /// Seek the primary media
    Seek { time_secs: f64 },
    /// Write the filled-progress width and thumb offset
    UpdateIndicators { fraction: f64 },
    /// Pause the primary media for the drag
    Pause,
    /// Resume the primary media after the drag
    Resume,
    /// Silence the progress tracker at its source
    SuspendTracker,
    ResumeTracker,
}

/// Read-only snapshot of the world a transition needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubContext {
    pub geometry: Option<TimelineGeometry>,
    pub duration_ms: f64,
    pub playing: bool,
    pub current_time_secs: f64,
}

impl ScrubContext {
    fn time_at(&self, x: f64) -> Option<f64> {
        time_from_offset(self.geometry.as_ref()?, self.duration_ms, x)
    }

    fn fraction_of(&self, time_secs: f64) -> Option<f64> {
        offset_from_time(self.geometry.as_ref()?, self.duration_ms, time_secs)
    }
}

/// Arbitrates between hover-preview and drag-to-seek.
#[derive(Debug, Default)]
pub struct ScrubSession {
    state: ScrubState,
    /// Last candidate time while dragging; applied on release
    pending_commit: Option<f64>,
    /// Whether playback should resume when the drag ends
    resume_after_drag: bool,
}

impl ScrubSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScrubState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == ScrubState::Dragging
    }

    pub fn pending_commit(&self) -> Option<f64> {
        self.pending_commit
    }

    /// Play intent captured when the current drag began.
    pub fn resume_intent(&self) -> bool {
        self.resume_after_drag
    }

    /// Change what happens to playback when the current drag ends.
    ///
    /// Ignored outside of a drag.
    pub fn set_resume_intent(&mut self, resume: bool) {
        if self.is_dragging() {
            self.resume_after_drag = resume;
        }
    }

    /// Process one pointer event.
    pub fn handle(&mut self, event: PointerEvent, ctx: &ScrubContext) -> Vec<ScrubCommand> {
        match (self.state, event.phase) {
            (ScrubState::Dragging, PointerPhase::Move | PointerPhase::Down) => {
                self.drag_to(event.x, ctx)
            }
            (ScrubState::Dragging, PointerPhase::Up) => self.commit(),
            // Leaving the strip mid-drag is fine; the document still tracks the pointer
            (ScrubState::Dragging, PointerPhase::Leave) => Vec::new(),

            (_, PointerPhase::Down) if event.is_on_timeline() => self.begin_drag(event, ctx),
            (_, PointerPhase::Move) if event.is_on_timeline() => {
                self.transition(ScrubState::Hovering);
                vec![ScrubCommand::ShowPreview { x: event.x }]
            }
            (ScrubState::Hovering, PointerPhase::Leave) => {
                self.transition(ScrubState::Idle);
                vec![ScrubCommand::HidePreview]
            }
            _ => Vec::new(),
        }
    }

    /// Abandon the interaction without committing.
    ///
    /// A drag restores the captured play intent but keeps the live-scrubbed
    /// position; the pending commit is discarded.
    pub fn cancel(&mut self) -> Vec<ScrubCommand> {
        match self.state {
            ScrubState::Idle => Vec::new(),
            ScrubState::Hovering => {
                self.transition(ScrubState::Idle);
                vec![ScrubCommand::HidePreview]
            }
            ScrubState::Dragging => {
                let mut commands = vec![ScrubCommand::HidePreview, ScrubCommand::ResumeTracker];
                if self.resume_after_drag {
                    commands.push(ScrubCommand::Resume);
                }
                self.finish_drag();
                debug!("drag cancelled");
                commands
            }
        }
    }

    fn begin_drag(&mut self, event: PointerEvent, ctx: &ScrubContext) -> Vec<ScrubCommand> {
        // Grabbing the thumb keeps the current position; clicking the strip jumps
        let time_secs = match event.target {
            PointerTarget::Thumb => {
                let current = ctx.current_time_secs;
                ctx.fraction_of(current).map(|_| current)
            }
            _ => ctx.time_at(event.x),
        };
        let Some(time_secs) = time_secs else {
            return Vec::new();
        };

        self.resume_after_drag = ctx.playing;
        self.pending_commit = Some(time_secs);
        self.transition(ScrubState::Dragging);

        let mut commands = vec![ScrubCommand::SuspendTracker];
        if ctx.playing {
            commands.push(ScrubCommand::Pause);
        }
        if event.target != PointerTarget::Thumb {
            commands.push(ScrubCommand::Seek { time_secs });
        }
        if let Some(fraction) = ctx.fraction_of(time_secs) {
            commands.push(ScrubCommand::UpdateIndicators { fraction });
        }
        commands.push(ScrubCommand::HidePreview);
        commands
    }

    fn drag_to(&mut self, x: f64, ctx: &ScrubContext) -> Vec<ScrubCommand> {
        let Some(time_secs) = ctx.time_at(x) else {
            return Vec::new();
        };
        self.pending_commit = Some(time_secs);

        let mut commands = vec![
            ScrubCommand::ShowPreview { x },
            ScrubCommand::Seek { time_secs },
        ];
        if let Some(fraction) = ctx.fraction_of(time_secs) {
            commands.push(ScrubCommand::UpdateIndicators { fraction });
        }
        commands
    }

    fn commit(&mut self) -> Vec<ScrubCommand> {
        let mut commands = vec![ScrubCommand::HidePreview];
        if let Some(time_secs) = self.pending_commit {
            commands.push(ScrubCommand::Seek { time_secs });
        }
        commands.push(ScrubCommand::ResumeTracker);
        if self.resume_after_drag {
            commands.push(ScrubCommand::Resume);
        }
        debug!(time = ?self.pending_commit, resume = self.resume_after_drag, "drag committed");
        self.finish_drag();
        commands
    }

    fn finish_drag(&mut self) {
        self.pending_commit = None;
        self.resume_after_drag = false;
        self.transition(ScrubState::Idle);
    }

    fn transition(&mut self, next: ScrubState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "scrub state");
            self.state = next;
        }
    }
}
