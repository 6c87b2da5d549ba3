use chrono::{NaiveDate, NaiveDateTime};
use retroface_app::HeadlessSession;
use retroface_config::{FilePreferences, Preferences, ThemePicker};
use retroface_paint::PaintCommand;
use std::path::PathBuf;

fn asset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn scratch_prefs(name: &str) -> FilePreferences {
    let path = std::env::temp_dir()
        .join(format!("retroface-app-{}", std::process::id()))
        .join(name);
    FilePreferences::new(path)
}

fn start_of(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2016, 5, 28)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn bundled_catalog_starts_on_marine() {
    let prefs = scratch_prefs("default.toml");
    let session = HeadlessSession::new(asset_dir(), &prefs, start_of(9, 5, 0)).expect("session");

    assert_eq!(session.engine().theme_index(), 0);
    assert_eq!(session.engine().catalog().select(0).unwrap().name, "Marine");
}

#[test]
fn frames_tick_across_second_boundaries() {
    let prefs = scratch_prefs("tick.toml");
    let mut session =
        HeadlessSession::new(asset_dir(), &prefs, start_of(9, 5, 59)).expect("session");
    session.start(320, 320);

    let first = session.step().expect("frame");
    let second = session.step().expect("frame");

    let time_of = |frame: &[PaintCommand]| match &frame[5] {
        PaintCommand::DrawText { text, .. } => text.clone(),
        other => panic!("expected time text, got {other:?}"),
    };
    assert_eq!(time_of(&first), "9:05");
    assert_eq!(time_of(&second), "9:06");
}

#[test]
fn committed_preference_survives_reassembly() {
    let prefs = scratch_prefs("commit.toml");
    let session = HeadlessSession::new(asset_dir(), &prefs, start_of(9, 0, 0)).expect("session");

    let picker = ThemePicker::new(session.engine().catalog());
    picker.commit(2, &prefs).expect("commit");
    drop(session);

    let rebuilt = HeadlessSession::new(asset_dir(), &prefs, start_of(9, 0, 0)).expect("session");
    assert_eq!(rebuilt.engine().theme_index(), 2);
    assert_eq!(
        rebuilt.engine().catalog().select(2).unwrap().name,
        "Terminal"
    );
}

#[test]
fn stale_preference_falls_back_to_first_theme() {
    let prefs = scratch_prefs("stale.toml");
    prefs.store(&Preferences { theme_index: 99 }).expect("store");

    let session = HeadlessSession::new(asset_dir(), &prefs, start_of(9, 0, 0)).expect("session");
    assert_eq!(session.engine().theme_index(), 0);
}

#[test]
fn ambient_session_renders_black_only() {
    let prefs = scratch_prefs("ambient.toml");
    let mut session =
        HeadlessSession::new(asset_dir(), &prefs, start_of(9, 5, 0)).expect("session");
    session.start(320, 320);
    session.engine_mut().on_ambient_mode_changed(true);

    let frame = session.step().expect("frame");
    assert_eq!(frame.len(), 1);
    assert!(matches!(frame[0], PaintCommand::Clear { .. }));
}
