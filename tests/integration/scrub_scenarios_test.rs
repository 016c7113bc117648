//! End-to-end scrub scenarios through the terminal host pieces

use std::time::{Duration, Instant};

use scrubber::scrub::{ListenerScope, Media, MediaEvent, ScrubState};

use super::helpers::{settings, Player, TIMELINE_ROW};

#[test]
fn hover_previews_without_seeking() {
    let mut player = Player::ready();

    player.hover(34, TIMELINE_ROW);

    let snapshot = player.controller.snapshot();
    assert_eq!(snapshot.state, ScrubState::Hovering);
    let placement = snapshot.preview.expect("preview visible");
    assert_eq!(placement.time_secs, 33.0);
    assert_eq!(placement.left, 21.0); // 33 - 24 / 2
    assert_eq!(player.controller.media().current_time_secs(), 0.0);
    let preview = player.controller.preview().media().unwrap();
    assert_eq!(preview.current_time_secs(), 33.0);
    assert!(player.surface.preview_rect().is_some());
}

#[test]
fn leaving_the_timeline_hides_the_preview() {
    let mut player = Player::ready();
    player.hover(34, TIMELINE_ROW);

    player.hover(34, 5);

    assert_eq!(player.controller.session().state(), ScrubState::Idle);
    assert!(player.controller.snapshot().preview.is_none());
    assert!(player.surface.preview_rect().is_none());
}

#[test]
fn drag_outside_and_release_commits_clamped_position() {
    let mut player = Player::ready();
    player.controller.toggle_play(Some(true));

    player.press(34, TIMELINE_ROW);
    assert_eq!(player.controller.session().state(), ScrubState::Dragging);
    assert!(!player.controller.media().is_playing());
    assert_eq!(player.controller.media().current_time_secs(), 33.0);

    player.drag(50, TIMELINE_ROW);
    assert_eq!(player.controller.media().current_time_secs(), 49.0);

    // Off the timeline row: the drag continues at document level
    player.drag(60, 5);
    assert_eq!(player.controller.session().state(), ScrubState::Dragging);
    assert_eq!(player.controller.media().current_time_secs(), 59.0);

    // Past the right edge clamps to the duration
    player.drag(79, 5);
    assert_eq!(player.controller.media().current_time_secs(), 66.0);

    player.drag(60, 5);
    player.release(60, 5);

    let snapshot = player.controller.snapshot();
    assert_eq!(snapshot.state, ScrubState::Idle);
    assert!(snapshot.playing);
    assert!(snapshot.tracker_running);
    let resumed_at = player.controller.media().current_time_secs();
    assert!((59.0..60.0).contains(&resumed_at), "{resumed_at}");
}

#[test]
fn paused_release_outside_commits_exact_position() {
    let mut player = Player::ready();

    player.press(34, TIMELINE_ROW);
    player.drag(60, 5);
    player.release(60, 5);

    assert_eq!(player.controller.session().state(), ScrubState::Idle);
    assert!(!player.controller.media().is_playing());
    assert_eq!(player.controller.media().current_time_secs(), 59.0);
}

#[test]
fn release_past_the_end_commits_the_duration() {
    let mut player = Player::ready();

    player.press(34, TIMELINE_ROW);
    player.drag(79, 5);
    player.release(79, 5);

    assert_eq!(player.controller.media().current_time_secs(), 66.0);
    assert_eq!(player.surface.thumb_column(), Some(66));
}

#[test]
fn paused_media_stays_paused_after_drag() {
    let mut player = Player::ready();

    player.press(20, TIMELINE_ROW);
    player.release(20, TIMELINE_ROW);

    assert!(!player.controller.media().is_playing());
    assert_eq!(player.controller.media().current_time_secs(), 19.0);
}

#[test]
fn indicators_follow_the_drag_and_ignore_ticks() {
    let mut player = Player::ready();
    player.controller.toggle_play(Some(true));

    player.press(34, TIMELINE_ROW);
    assert_eq!(player.surface.filled_cells(), 33);

    // Play reported and requested mid-drag must not revive the tracker
    player.media_event(MediaEvent::Play);
    player.controller.toggle_play(Some(true));
    for step in 1..20 {
        let at = Instant::now() + Duration::from_millis(50 * step);
        assert!(player.controller.poll(at, &mut player.surface).is_none());
    }
    assert_eq!(player.surface.thumb_column(), Some(34));

    player.release(34, TIMELINE_ROW);
    let later = Instant::now() + Duration::from_secs(1);
    assert!(player.controller.poll(later, &mut player.surface).is_some());
}

#[test]
fn grabbing_the_thumb_keeps_position() {
    let mut player = Player::ready();
    player.controller.seek_to_fraction(0.5, &mut player.surface);
    assert_eq!(player.surface.thumb_column(), Some(34));

    player.press(34, TIMELINE_ROW);

    assert_eq!(player.controller.session().state(), ScrubState::Dragging);
    assert_eq!(player.controller.media().current_time_secs(), 33.0);

    player.drag(40, TIMELINE_ROW);
    player.release(40, TIMELINE_ROW);
    assert_eq!(player.controller.media().current_time_secs(), 39.0);
}

#[test]
fn resize_while_hovering_keeps_preview_inside_timeline() {
    let mut player = Player::ready();
    player.hover(34, TIMELINE_ROW);

    player.surface.resize(40, 12);
    player.controller.on_resize(&mut player.surface);

    // New timeline: columns 1..=26 on row 10
    player.hover(26, 10);

    let snapshot = player.controller.snapshot();
    let placement = snapshot.preview.expect("preview visible");
    assert!(placement.left <= 26.0 - 24.0);
    let preview = player.controller.preview().geometry().unwrap();
    assert_eq!(preview.vertical_offset, 3.0);
    assert_eq!(player.controller.media().current_time_secs(), 0.0);
}

#[test]
fn repeated_readiness_keeps_one_listener_per_scope() {
    let mut player = Player::ready();

    for _ in 0..3 {
        player.media_event(MediaEvent::ReadyToPlay);
    }

    for scope in ListenerScope::ALL {
        assert_eq!(player.router.subscribers(scope), 1);
    }
}

#[test]
fn autoplay_starts_on_ready() {
    let player = Player::ready_with(scrubber::scrub::ControllerSettings {
        autoplay: true,
        ..settings()
    });

    let snapshot = player.controller.snapshot();
    assert!(snapshot.playing);
    assert!(snapshot.tracker_running);
    assert!(snapshot.muted);
}

#[test]
fn escape_mid_drag_restores_playback() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use scrubber::host::{handle_key_event, InputResult};

    let mut player = Player::ready();
    player.controller.toggle_play(Some(true));
    player.press(34, TIMELINE_ROW);

    let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    let result = handle_key_event(esc, &mut player.controller, &mut player.surface);

    assert_eq!(result, InputResult::Continue);
    assert_eq!(player.controller.session().state(), ScrubState::Idle);
    assert!(player.controller.media().is_playing());
}
