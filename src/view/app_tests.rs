//! Tests for the terminal demo.

use super::*;
use crate::config::load_config_file;
use crate::host::LabelSource;
use crate::model::Justification;
use crate::view_state::IndexRange;
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;

fn options(count: usize, scale: f64) -> DemoOptions {
    DemoOptions {
        count,
        scale,
        ..DemoOptions::default()
    }
}

fn create_test_app(options: DemoOptions) -> DemoApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    DemoApp::with_terminal(terminal, options)
}

fn press(app: &mut DemoApp<TestBackend>, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers,
    }
}

fn row_text(app: &DemoApp<TestBackend>, y: u16) -> String {
    let buf = app.terminal().backend().buffer();
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

#[test]
fn demo_error_from_io_error() {
    let err: DemoError = io::Error::other("test error").into();
    assert!(matches!(err, DemoError::Io(_)));
}

#[test]
fn quit_keys_return_true() {
    let mut app = create_test_app(options(10, 2.0));
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(press(&mut app, KeyCode::Esc));
    assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!press(&mut app, KeyCode::Char('z')));
}

#[test]
fn key_release_is_ignored() {
    let mut app = create_test_app(options(10, 2.0));
    let release = KeyEvent::new_with_kind(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert!(!app.handle_key(release));
}

#[test]
fn synthetic_labels_skip_empty_fields() {
    let labels = synthetic_labels(10, "gene");
    assert_eq!(labels.label_count(), 10);
    assert_eq!(
        labels.summary_of(0),
        Ok(Some("gene0, kinase, cluster 0".to_string()))
    );
    assert_eq!(
        labels.summary_of(1),
        Ok(Some("gene1, binding protein".to_string()))
    );
}

#[test]
fn draw_labels_every_row_when_items_fit() {
    let mut app = create_test_app(options(10, 2.0));
    app.draw().unwrap();

    let frame = app.last_frame().expect("frame drawn");
    assert_eq!(frame.mode, LayoutMode::Fitted);
    assert!(row_text(&app, 1).starts_with("gene0, kinase"), "{:?}", row_text(&app, 1));
    assert!(row_text(&app, 3).starts_with("gene1, bindin"), "{:?}", row_text(&app, 3));
    assert!(row_text(&app, 11).contains("fitted"));
}

#[test]
fn draw_shows_hint_when_items_are_dense() {
    let mut app = create_test_app(options(200, 0.5));
    app.draw().unwrap();

    let frame = app.last_frame().expect("frame drawn");
    assert_eq!(frame.mode, LayoutMode::Hint);
    assert_eq!(frame.visible, None);
    assert_eq!(app.map().visible_labels(), None);
}

#[test]
fn hovering_dense_rows_opens_the_label_port() {
    let mut app = create_test_app(options(200, 0.5));
    app.draw().unwrap();

    app.handle_mouse(
        mouse(MouseEventKind::Moved, 30, 5, KeyModifiers::NONE),
        Instant::now(),
    );
    assert_eq!(app.map().hover_index(), Some(10));
    assert!(app.strip().is_port_active());

    app.draw().unwrap();
    let frame = app.last_frame().expect("frame drawn");
    assert_eq!(frame.mode, LayoutMode::Windowed);
    let visible = frame.visible.expect("labels published");
    assert_eq!(visible.drawn, IndexRange::single(10));
    assert!((0..11).any(|y| row_text(&app, y).starts_with("gene10, kinase")));
}

#[test]
fn leaving_the_linked_views_closes_the_port_after_linger() {
    let mut app = create_test_app(options(200, 0.5));
    app.draw().unwrap();
    let start = Instant::now();

    app.handle_mouse(mouse(MouseEventKind::Moved, 30, 5, KeyModifiers::NONE), start);
    // status line is not a linked view
    app.handle_mouse(mouse(MouseEventKind::Moved, 30, 11, KeyModifiers::NONE), start);
    assert_eq!(app.map().hover_index(), None);
    assert!(app.strip().is_port_active());

    assert!(app.poll_animation(start + Duration::from_secs(1)));
    assert!(!app.strip().is_port_active());
    app.draw().unwrap();
    assert_eq!(app.last_frame().map(|f| f.mode), Some(LayoutMode::Hint));
}

#[test]
fn drag_selects_rows_and_ctrl_toggles() {
    let mut app = create_test_app(options(10, 2.0));
    app.draw().unwrap();
    let now = Instant::now();

    let none = KeyModifiers::NONE;
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 2, none), now);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 6, none), now);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 6, none), now);
    let selected: Vec<usize> = (0..10).filter(|&i| app.selection().is_selected(i)).collect();
    assert_eq!(selected, vec![1, 2, 3]);

    let ctrl = KeyModifiers::CONTROL;
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4, ctrl), now);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4, ctrl), now);
    assert!(!app.selection().is_selected(2));
    assert_eq!(app.selection().len(), 2);

    assert!(!press(&mut app, KeyCode::Char('c')));
    assert!(app.selection().is_empty());
}

#[test]
fn release_outside_cancels_drag() {
    let mut app = create_test_app(options(10, 2.0));
    app.draw().unwrap();
    let now = Instant::now();

    let none = KeyModifiers::NONE;
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 2, none), now);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 11, none), now);
    assert!(app.selection().is_empty());
    assert_eq!(app.selection().drag(), None);
}

#[test]
fn keys_change_strip_settings() {
    let mut app = create_test_app(options(10, 1.0));

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.strip().justification(), Justification::End);
    assert_eq!(app.settings().justification, Justification::End);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.strip().port().enabled);
    assert!(!app.settings().port.flank_mode);

    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.map().scale(), 2.0);
    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.map().scale(), 0.5);
}

#[test]
fn label_scroll_and_strip_width_move_the_window() {
    let mut app = create_test_app(options(10, 2.0));
    app.draw().unwrap();
    let window = app.strip().scroll_window().expect("window after first frame");
    assert_eq!(
        (window.position, window.end_position, window.end_gap),
        (0, 24, 6)
    );

    press(&mut app, KeyCode::Right);
    let window = app.strip().scroll_window().expect("window");
    assert_eq!(window.position, 1);

    press(&mut app, KeyCode::Char('0'));
    assert_eq!(app.strip().scroll_window(), None);
    app.draw().unwrap();

    press(&mut app, KeyCode::Char(']'));
    let window = app.strip().scroll_window().expect("window");
    assert_eq!((window.position, window.end_position), (0, 26));
}

#[test]
fn cycling_fields_resets_and_shortens_labels() {
    let mut app = create_test_app(options(10, 2.0));
    app.draw().unwrap();
    press(&mut app, KeyCode::Right);

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.strip().scroll_window(), None);
    app.draw().unwrap();
    assert!(row_text(&app, 1).starts_with("gene0 "), "{:?}", row_text(&app, 1));
}

#[test]
fn settings_changes_are_written_back() {
    let path = std::env::temp_dir().join(format!(
        "labelstrip_{}_persist/config.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let mut app = create_test_app(DemoOptions {
        persist_to: Some(path.clone()),
        ..options(10, 2.0)
    });

    press(&mut app, KeyCode::Char('t'));

    let saved = load_config_file(&path).unwrap().expect("settings saved");
    assert_eq!(saved.justification, Some(Justification::End));
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn without_colors_status_line_is_reversed() {
    let mut app = create_test_app(DemoOptions {
        colors: ColorConfig::with_enabled(false),
        ..options(10, 2.0)
    });
    app.draw().unwrap();
    let buf = app.terminal().backend().buffer();
    assert!(buf[(0, 11)].modifier.contains(Modifier::REVERSED));
    assert_eq!(buf[(30, 1)].bg, Color::Reset);
}
