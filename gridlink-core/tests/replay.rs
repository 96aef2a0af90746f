mod common;

use std::io::Write;

use common::*;
use gridlink_core::config::{Config, CursorTarget};
use gridlink_core::interaction_log::{read_button_events, InteractionLog};
use gridlink_core::model::ParameterBank;
use gridlink_types::{ButtonEvent, ViewId};

#[test]
fn test_logged_session_replays_to_same_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.jsonl");

    let mut recorded = make_surface();
    recorded.set_interaction_log(InteractionLog::open_at(&path));
    recorded.model_mut().track_bank.select_absolute(0);
    tap(&mut recorded, RIGHT, 0);
    tap(&mut recorded, VIEW_SELECT, 20);
    tap(&mut recorded, SOLO, 40);
    tap(&mut recorded, DOWN, 60);
    recorded.handle_button(SHIFT, 127, 80);
    tap(&mut recorded, DOWN, 90);
    recorded.handle_button(SHIFT, 0, 110);
    recorded.set_interaction_log(None);
    assert_eq!(recorded.model().track_bank.scene_offset(), 8);

    let events = read_button_events(&path).unwrap();
    assert_eq!(events.len(), 12);
    assert_eq!((events[0].t_ms, events[0].button), (0, RIGHT));
    assert_eq!(events[0].event, ButtonEvent::Down);
    assert_eq!((events[1].t_ms, events[1].event), (10, ButtonEvent::Up));

    let mut replayed = make_surface();
    replayed.model_mut().track_bank.select_absolute(0);
    replayed.replay(&events);

    assert_eq!(
        replayed.model().track_bank.selected_absolute(),
        recorded.model().track_bank.selected_absolute()
    );
    assert_eq!(
        replayed.model().track_bank.scene_offset(),
        recorded.model().track_bank.scene_offset()
    );
    assert_eq!(replayed.views().active_view_id(), Some(ViewId::new(1)));
    assert_eq!(
        replayed.modes().active_mode_id(),
        recorded.modes().active_mode_id()
    );
}

#[test]
fn test_replay_runs_delayed_selection_across_bank_edges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.jsonl");

    let mut recorded = make_surface();
    recorded.set_interaction_log(InteractionLog::open_at(&path));
    recorded.model_mut().track_bank.select_absolute(7);
    tap(&mut recorded, RIGHT, 0);
    recorded.tick(100);
    assert_eq!(recorded.model().track_bank.selected_absolute(), Some(8));
    // Left from the first track of a page lands on the previous page's last.
    tap(&mut recorded, LEFT, 200);
    recorded.tick(300);
    tap(&mut recorded, RIGHT, 400);
    recorded.set_interaction_log(None);
    assert_eq!(recorded.model().track_bank.selected_absolute(), Some(7));
    assert_eq!(recorded.scheduler().pending(), 1);
    recorded.tick(500);
    assert_eq!(recorded.model().track_bank.selected_absolute(), Some(8));

    let events = read_button_events(&path).unwrap();
    let mut replayed = make_surface();
    replayed.model_mut().track_bank.select_absolute(7);
    replayed.replay(&events);

    assert_eq!(replayed.scheduler().pending(), 0);
    assert_eq!(replayed.model().track_bank.track_offset(), 8);
    assert_eq!(replayed.model().track_bank.selected_absolute(), Some(8));
}

#[test]
fn test_log_records_view_and_mode_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.jsonl");

    let mut control = make_surface();
    control.set_interaction_log(InteractionLog::open_at(&path));
    tap(&mut control, VIEW_SELECT, 0);
    tap(&mut control, MUTE, 20);
    control.set_interaction_log(None);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.lines().next().unwrap().contains("session_start"));
    assert!(contents.contains(r#""event":"view","id":1,"name":"Play""#));
    assert!(contents.contains(r#""event":"mode","id":2"#));
}

#[test]
fn test_user_config_switches_arrows_to_parameter_pages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "[surface]").unwrap();
    writeln!(f, r#"cursor = "parameters""#).unwrap();
    writeln!(f, "right = 20").unwrap();
    drop(f);

    let config = Config::load_from(&path);
    assert_eq!(config.cursor_target(), CursorTarget::Parameters);
    // Keys the user file leaves out keep their defaults.
    assert_eq!(config.bank_width(), 8);

    let mut control = make_surface_with(&config);
    control.model_mut().track_bank.select_absolute(0);
    tap(&mut control, gridlink_types::ButtonId::new(20), 0);
    assert_eq!(control.model().parameter_pages.selected_page(), 1);
    assert_eq!(control.model().track_bank.selected_absolute(), Some(0));
    assert!(control.model().parameter_pages.has_previous_page());
}

#[test]
fn test_user_views_cycle_from_view_select() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[[views]]\nid = 7\nname = \"Mix\"\n\n[[views]]\nid = 8\nname = \"Keys\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path);
    let mut control = make_surface_with(&config);
    assert_eq!(control.views().active_view_id(), Some(ViewId::new(7)));

    let mut seen = Vec::new();
    for i in 0..3 {
        tap(&mut control, VIEW_SELECT, i * 20);
        seen.push(control.views().active_view_id());
    }
    assert_eq!(
        seen,
        vec![
            Some(ViewId::new(8)),
            Some(ViewId::new(7)),
            Some(ViewId::new(8))
        ]
    );
}
