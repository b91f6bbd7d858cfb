//! Interactive terminal demo
//!
//! A row label strip sits beside a synthetic heatmap. One terminal cell is
//! one pixel, so the strip draws with a fixed one-point font and an item is
//! labelled once it gets two rows.

use crate::config::{save_config_file, KeyBindings, ResolvedConfig};
use crate::host::memory::{FieldLabels, IndexSelection, LinearAxisMap};
use crate::host::{AxisMap, DragMode, Rgba, SelectionSet};
use crate::model::{FlankLimit, FontAttributes, KeyAction, StripAxis};
use crate::view::strip::{FrameReport, LabelStrip, StripContext};
use crate::view::styles::ColorConfig;
use crate::view::terminal::{CellMetrics, TerminalSurface};
use crate::view_state::{LayoutMode, ViewportDimensions};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Longest wait for input while nothing is animating.
pub const IDLE_POLL: Duration = Duration::from_millis(500);

const MIN_SCALE: f64 = 0.125;
const MAX_SCALE: f64 = 8.0;
const MIN_STRIP_WIDTH: u16 = 6;
const MAX_STRIP_WIDTH: u16 = 80;
const STRIP_WIDTH_STEP: u16 = 2;
const WHEEL_ITEMS: isize = 3;
const BACKGROUND: Rgba = Rgba::WHITE;

const QUALIFIERS: [&str; 5] = [
    "kinase",
    "receptor",
    "binding protein",
    "transcription factor",
    "homolog",
];

/// Field subsets the demo cycles through.
const FIELD_SETS: [&[usize]; 3] = [&[0], &[0, 1], &[0, 1, 2]];

/// Errors that can occur while running the demo
#[derive(Debug, Error)]
pub enum DemoError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Labels `"{seed_word}{i}"` with a qualifier field and, every fifth item, a
/// cluster field, so summaries vary in length.
pub fn synthetic_labels(count: usize, seed_word: &str) -> FieldLabels {
    let rows = (0..count)
        .map(|i| {
            let qualifier = QUALIFIERS[(i * 7) % QUALIFIERS.len()];
            let cluster = if i % 5 == 0 {
                format!("cluster {}", i / 5)
            } else {
                String::new()
            };
            vec![format!("{seed_word}{i}"), qualifier.to_string(), cluster]
        })
        .collect();
    FieldLabels::new(rows, FIELD_SETS[FIELD_SETS.len() - 1].to_vec())
}

/// The terminal draws every glyph one cell tall.
fn cell_font(font: &FontAttributes) -> FontAttributes {
    FontAttributes {
        size: 1,
        min_size: 1,
        max_size: 1,
        fixed: true,
        ..font.clone()
    }
}

/// Demo startup parameters.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Number of synthetic items.
    pub count: usize,
    /// Prefix of every label.
    pub seed_word: String,
    /// Initial rows per item.
    pub scale: f64,
    /// Initial strip width in cells.
    pub strip_width: u16,
    /// Colour output.
    pub colors: ColorConfig,
    /// Resolved strip settings.
    pub settings: ResolvedConfig,
    /// Write settings back here when they change.
    pub persist_to: Option<PathBuf>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            count: 500,
            seed_word: "gene".to_string(),
            scale: 1.0,
            strip_width: 24,
            colors: ColorConfig::with_enabled(true),
            settings: ResolvedConfig::default(),
            persist_to: None,
        }
    }
}

/// Main demo application
pub struct DemoApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    strip: LabelStrip,
    map: LinearAxisMap,
    labels: FieldLabels,
    field_set: usize,
    selection: IndexSelection,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    strip_width: u16,
    settings: ResolvedConfig,
    persist_to: Option<PathBuf>,
    /// Last rendered strip area (for mouse hit testing)
    last_strip_area: Option<Rect>,
    /// Last rendered matrix area (for mouse hit testing)
    last_matrix_area: Option<Rect>,
    last_frame: Option<FrameReport>,
}

impl DemoApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the demo
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(options: DemoOptions) -> Result<Self, DemoError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, options))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Sleeps until input arrives or the hover
    /// animation next needs a frame.
    pub fn run(&mut self) -> Result<(), DemoError> {
        self.draw()?;

        loop {
            let now = Instant::now();
            let timeout = self
                .strip
                .next_deadline()
                .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => continue,
                }
                self.poll_animation(Instant::now());
                self.draw()?;
            } else if self.poll_animation(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> DemoApp<B>
where
    B: Backend,
{
    /// Build the demo around an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, options: DemoOptions) -> Self {
        let DemoOptions {
            count,
            seed_word,
            scale,
            strip_width,
            colors,
            settings,
            persist_to,
        } = options;
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        let strip_width = strip_width.clamp(MIN_STRIP_WIDTH, MAX_STRIP_WIDTH);
        let strip = LabelStrip::new(
            StripAxis::Rows,
            settings.justification,
            settings.port,
            cell_font(&settings.font),
        );
        info!(count, scale, strip_width, "Starting label strip demo");

        Self {
            terminal,
            strip,
            map: LinearAxisMap::new(count, scale, 0),
            labels: synthetic_labels(count, &seed_word),
            field_set: FIELD_SETS.len() - 1,
            selection: IndexSelection::new(),
            key_bindings: KeyBindings::default(),
            colors,
            strip_width,
            settings,
            persist_to,
            last_strip_area: None,
            last_matrix_area: None,
            last_frame: None,
        }
    }

    /// The row label strip.
    pub fn strip(&self) -> &LabelStrip {
        &self.strip
    }

    /// The matrix's row axis.
    pub fn map(&self) -> &LinearAxisMap {
        &self.map
    }

    /// Selected rows.
    pub fn selection(&self) -> &IndexSelection {
        &self.selection
    }

    /// Settings as currently in effect.
    pub fn settings(&self) -> &ResolvedConfig {
        &self.settings
    }

    /// What the last frame drew.
    pub fn last_frame(&self) -> Option<&FrameReport> {
        self.last_frame.as_ref()
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Advance hover animation and linked-view presence. Returns true when
    /// a repaint is due.
    pub fn poll_animation(&mut self, now: Instant) -> bool {
        self.strip.poll_animation(now)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        match action {
            KeyAction::Quit => return true,
            KeyAction::ScrollUp => self.map.scroll_by(-1),
            KeyAction::ScrollDown => self.map.scroll_by(1),
            KeyAction::PageUp => self.map.scroll_by(-self.page()),
            KeyAction::PageDown => self.map.scroll_by(self.page()),
            KeyAction::ScrollToTop => self.map.scroll_to(0),
            KeyAction::ScrollToBottom => self.map.scroll_to(usize::MAX),
            KeyAction::ZoomIn => self.zoom(2.0),
            KeyAction::ZoomOut => self.zoom(0.5),
            KeyAction::LabelScrollBack => {
                self.strip.scroll_by(-1);
            }
            KeyAction::LabelScrollForward => {
                self.strip.scroll_by(1);
            }
            KeyAction::ResetLabelScroll => self.strip.reset_scroll(),
            KeyAction::CyclePortMode => {
                self.settings.port = self.strip.on_mode_toggle();
                self.persist();
            }
            KeyAction::ToggleJustification => {
                self.settings.justification = self.strip.toggle_justification();
                self.persist();
            }
            KeyAction::WidenStrip => {
                self.resize_strip(self.strip_width.saturating_add(STRIP_WIDTH_STEP));
            }
            KeyAction::NarrowStrip => {
                self.resize_strip(self.strip_width.saturating_sub(STRIP_WIDTH_STEP));
            }
            KeyAction::CycleFields => self.cycle_fields(),
            KeyAction::ClearSelection => self.selection.clear(),
        }
        false
    }

    /// Handle a mouse event at `now`.
    ///
    /// The strip and the matrix are both linked views: moving over either
    /// hovers the row under the pointer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let pos = Position::new(mouse.column, mouse.row);
        let in_strip = self.last_strip_area.is_some_and(|area| area.contains(pos));
        let over = [self.last_strip_area, self.last_matrix_area]
            .into_iter()
            .flatten()
            .find(|area| area.contains(pos));

        let Some(area) = over else {
            self.strip.pointer_left_linked_view(now);
            self.strip.set_hover_pixel(&mut self.map, None);
            if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
                self.finish_drag(None);
            }
            return;
        };

        self.strip.pointer_entered_linked_view(now);
        let pixel = i32::from(mouse.row.saturating_sub(area.y));
        let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.strip.set_hover_pixel(&mut self.map, Some(pixel));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.strip.set_hover_pixel(&mut self.map, Some(pixel)) {
                    self.start_drag(index, mouse.modifiers);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let end = self.strip.set_hover_pixel(&mut self.map, Some(pixel));
                self.finish_drag(end);
            }
            MouseEventKind::ScrollDown => self.wheel(1, in_strip && shift),
            MouseEventKind::ScrollUp => self.wheel(-1, in_strip && shift),
            MouseEventKind::ScrollRight => {
                self.strip.scroll_wheel(1);
            }
            MouseEventKind::ScrollLeft => {
                self.strip.scroll_wheel(-1);
            }
            _ => {}
        }
    }

    /// Draw one frame: strip, matrix and status line.
    pub fn draw(&mut self) -> Result<(), DemoError> {
        let Self {
            terminal,
            strip,
            map,
            labels,
            selection,
            colors,
            strip_width,
            last_strip_area,
            last_matrix_area,
            last_frame,
            ..
        } = self;

        terminal.draw(|frame| {
            let [body, status] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
            let [strip_area, matrix_area] =
                Layout::horizontal([Constraint::Length(*strip_width), Constraint::Min(1)])
                    .areas(body);

            map.set_viewport(i32::from(strip_area.height));
            let viewport = ViewportDimensions::new(
                i32::from(strip_area.height),
                i32::from(strip_area.width),
            );
            let report = {
                let mut surface =
                    TerminalSurface::new(frame.buffer_mut(), strip_area, BACKGROUND, *colors);
                let mut ctx = StripContext {
                    map: &mut *map,
                    labels: &*labels,
                    selection: &*selection,
                    metrics: &CellMetrics,
                };
                strip.render(&mut ctx, &mut surface, viewport)
            };

            render_matrix(frame.buffer_mut(), matrix_area, &*map, &*selection, *colors);
            frame.render_widget(
                status_line(&report, strip, &*map, selection.len(), *colors),
                status,
            );

            *last_strip_area = Some(strip_area);
            *last_matrix_area = Some(matrix_area);
            *last_frame = Some(report);
        })?;
        Ok(())
    }

    fn page(&self) -> isize {
        isize::try_from(self.map.items_per_viewport()).unwrap_or(isize::MAX)
    }

    fn zoom(&mut self, factor: f64) {
        let scale = (self.map.scale() * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.map.set_scale(scale);
        debug!(scale, "Zoom changed");
    }

    fn wheel(&mut self, notches: i32, scroll_labels: bool) {
        if scroll_labels {
            self.strip.scroll_wheel(notches);
        } else {
            self.map.scroll_by(notches as isize * WHEEL_ITEMS);
        }
    }

    fn resize_strip(&mut self, width: u16) {
        let width = width.clamp(MIN_STRIP_WIDTH, MAX_STRIP_WIDTH);
        if width != self.strip_width {
            self.strip_width = width;
            self.strip.on_viewport_resized(i32::from(width));
        }
    }

    fn cycle_fields(&mut self) {
        self.field_set = (self.field_set + 1) % FIELD_SETS.len();
        self.labels
            .set_included(FIELD_SETS[self.field_set].to_vec());
        self.strip.on_data_changed();
    }

    fn start_drag(&mut self, index: usize, modifiers: KeyModifiers) {
        let mode = if modifiers.contains(KeyModifiers::CONTROL) {
            DragMode::Toggle
        } else if modifiers.contains(KeyModifiers::ALT) {
            DragMode::Deselect
        } else {
            if !modifiers.contains(KeyModifiers::SHIFT) {
                self.selection.clear();
            }
            DragMode::Select
        };
        self.selection.begin_drag(index, mode);
    }

    fn finish_drag(&mut self, end: Option<usize>) {
        match end {
            Some(end) => self.selection.commit_drag(end),
            None => self.selection.cancel_drag(),
        }
    }

    fn persist(&self) {
        let Some(path) = &self.persist_to else {
            return;
        };
        if let Err(err) = save_config_file(path, &self.settings) {
            warn!(%err, "Failed to save settings");
        }
    }
}

fn heat(row: usize, column: u16) -> Color {
    let v = (row.wrapping_mul(37) + usize::from(column).wrapping_mul(11)) % 192;
    let v = u8::try_from(v).unwrap_or(u8::MAX);
    Color::Rgb(32 + v, 224 - v, 96)
}

/// Paint the synthetic heatmap: one row per pixel, the hovered row struck
/// through and selected rows marked at the left edge.
fn render_matrix(
    buf: &mut Buffer,
    area: Rect,
    map: &dyn AxisMap,
    selection: &dyn SelectionSet,
    colors: ColorConfig,
) {
    if map.total_items() == 0 {
        return;
    }
    let end = map.pixel_of(map.last_visible() + 1);
    for dy in 0..area.height {
        let pixel = i32::from(dy);
        if pixel >= end {
            break;
        }
        let index = map.index_of(pixel);
        let hovered = map.hover_index() == Some(index);
        let selected = selection.is_selected(index);
        for dx in 0..area.width {
            let Some(cell) = buf.cell_mut(Position::new(area.x + dx, area.y + dy)) else {
                continue;
            };
            cell.reset();
            if colors.colors_enabled() {
                cell.set_bg(heat(index, dx));
                cell.set_fg(Color::Black);
            }
            if hovered {
                cell.set_symbol("─");
                if !colors.colors_enabled() {
                    cell.modifier.insert(Modifier::REVERSED);
                }
            } else if selected && dx == 0 {
                cell.set_symbol("▌");
            }
        }
    }
}

fn status_line(
    report: &FrameReport,
    strip: &LabelStrip,
    map: &dyn AxisMap,
    selected: usize,
    colors: ColorConfig,
) -> Paragraph<'static> {
    let mode = match report.mode {
        LayoutMode::Fitted => "fitted",
        LayoutMode::Windowed => "windowed",
        LayoutMode::Hint => "hint",
    };
    let port = strip.port();
    let port_label = if !port.enabled {
        "off".to_string()
    } else {
        match port.effective_flank() {
            FlankLimit::Unlimited => "full".to_string(),
            FlankLimit::Limited(n) => format!("flank {n}"),
        }
    };
    let window = report.window.map_or_else(
        || "-".to_string(),
        |w| format!("{}..{} of {}", w.position, w.end_position, w.content()),
    );
    let text = format!(
        " {mode} | rows {}-{} of {} | scale {:.3} | port {port_label} | {:?} | labels {window} | selected {selected} | q quit",
        map.first_visible(),
        map.last_visible(),
        map.total_items(),
        map.scale(),
        strip.justification(),
    );
    let style = if colors.colors_enabled() {
        Style::default().fg(Color::Black).bg(Color::Gray)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    Paragraph::new(Line::from(text)).style(style)
}

/// Initialize and run the demo.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(options: DemoOptions) -> Result<(), DemoError> {
    let mut app = DemoApp::new(options)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
pub fn restore_terminal() -> Result<(), DemoError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
