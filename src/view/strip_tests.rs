//! Tests for LabelStrip frames, scrolling and hover bookkeeping.

use super::*;
use crate::host::memory::{
    DrawOp, FieldLabels, IndexSelection, LinearAxisMap, MonospaceMetrics, RecordingSurface,
};
use std::time::Duration;

struct Fixture {
    map: LinearAxisMap,
    labels: FieldLabels,
    selection: IndexSelection,
    metrics: MonospaceMetrics,
}

impl Fixture {
    fn new(items: usize, labels: usize, scale: f64, primary: i32) -> Self {
        Self {
            map: LinearAxisMap::new(items, scale, primary),
            labels: FieldLabels::from_names((0..labels).map(|i| format!("label-{i:03}"))),
            selection: IndexSelection::new(),
            metrics: MonospaceMetrics,
        }
    }

    /// 20 items at 20 px: fitted, font adapted to 19 pt.
    fn fitted() -> Self {
        Self::new(20, 20, 20.0, 200)
    }

    /// 500 items at 1 px: too dense to label.
    fn dense() -> Self {
        Self::new(500, 500, 1.0, 100)
    }

    fn render(
        &mut self,
        strip: &mut LabelStrip,
        surface: &mut RecordingSurface,
        viewport: ViewportDimensions,
    ) -> FrameReport {
        let mut ctx = StripContext {
            map: &mut self.map,
            labels: &self.labels,
            selection: &self.selection,
            metrics: &self.metrics,
        };
        strip.render(&mut ctx, surface, viewport)
    }
}

fn rows() -> LabelStrip {
    LabelStrip::new(
        StripAxis::Rows,
        Justification::Start,
        PortSettings::default(),
        FontAttributes::default(),
    )
}

fn window(position: i32, end_position: i32, end_gap: i32) -> ScrollWindow {
    ScrollWindow {
        position,
        end_position,
        end_gap,
    }
}

fn text_transforms(surface: &RecordingSurface) -> Vec<Transform> {
    surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { transform, .. } => Some(*transform),
            _ => None,
        })
        .collect()
}

const WIDE: ViewportDimensions = ViewportDimensions {
    primary: 200,
    secondary: 120,
};

const NARROW: ViewportDimensions = ViewportDimensions {
    primary: 200,
    secondary: 40,
};

const DENSE: ViewportDimensions = ViewportDimensions {
    primary: 100,
    secondary: 80,
};

mod fitted {
    use super::*;

    #[test]
    fn labels_every_visible_item() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();

        let report = fx.render(&mut strip, &mut surface, WIDE);

        assert_eq!(report.mode, LayoutMode::Fitted);
        assert_eq!(report.font_size, 19);
        assert_eq!(report.window, Some(window(0, 120, 0)));
        let expected = VisibleLabels::fitted(IndexRange::new(0, 9));
        assert_eq!(report.visible, Some(expected));
        assert_eq!(fx.map.visible_labels(), Some(expected));

        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts.len(), 10);
        assert_eq!(texts[0].0, "label-000");
        // middle pixel 10, ascent 15
        assert_eq!(texts[0].1, Point::new(0, 17));
        assert!(texts.iter().all(|(_, origin, _)| origin.x == 0));
    }

    #[test]
    fn surface_transform_is_restored() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        surface.set_transform(Transform::translate(5, 5));
        fx.render(&mut strip, &mut surface, WIDE);
        assert_eq!(surface.transform(), Transform::translate(5, 5));
    }

    #[test]
    fn hovered_label_is_bold_and_red() {
        let mut fx = Fixture::fitted();
        fx.map.set_hover_index(Some(3));
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, WIDE);

        for (text, _, style) in surface.texts() {
            if text == "label-003" {
                assert_eq!(style.color, Rgba::RED);
                assert!(style.font.style.is_bold());
            } else {
                assert_eq!(style.color, Rgba::BLACK);
                assert!(!style.font.style.is_bold());
            }
        }
    }

    #[test]
    fn selected_row_is_filled() {
        let mut fx = Fixture::fitted();
        fx.selection.select(2);
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, WIDE);

        let palette = StripPalette::default();
        assert!(surface
            .fills()
            .any(|f| f == (PixelRect::new(0, 40, 120, 20), palette.selection_background)));
    }

    #[test]
    fn deselect_drag_hides_selection_under_it() {
        let mut fx = Fixture::fitted();
        fx.selection.select(2);
        fx.selection.begin_drag(0, DragMode::Deselect);
        fx.map.set_hover_index(Some(4));
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, WIDE);

        let palette = StripPalette::default();
        assert!(!surface
            .fills()
            .any(|(_, color)| color == palette.selection_background));
    }

    #[test]
    fn toggle_drag_highlights_only_unselected() {
        let mut fx = Fixture::fitted();
        fx.selection.select(2);
        fx.selection.begin_drag(0, DragMode::Toggle);
        fx.map.set_hover_index(Some(4));
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, WIDE);

        let palette = StripPalette::default();
        let highlighted: Vec<i32> = surface
            .fills()
            .filter(|(_, c)| *c == palette.selection_background)
            .map(|(r, _)| r.y)
            .collect();
        assert_eq!(highlighted, vec![0, 20, 60, 80]);
    }

    #[test]
    fn hovered_subtree_gets_alternate_background() {
        let mut fx = Fixture::fitted();
        fx.map.set_hover_subtree(Some(IndexRange::new(5, 6)));
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, WIDE);

        let palette = StripPalette::default();
        let rows_filled: Vec<i32> = surface
            .fills()
            .filter(|(_, c)| *c == palette.subtree_background)
            .map(|(r, _)| r.y)
            .collect();
        assert_eq!(rows_filled, vec![100, 120]);
        let (_, _, style) = surface
            .texts()
            .find(|(t, _, _)| *t == "label-005")
            .expect("label drawn");
        assert_eq!(style.color, palette.hover_text);
    }

    #[test]
    fn narrow_strip_marks_overrun() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        let report = fx.render(&mut strip, &mut surface, NARROW);

        // longest 102 + indent 3 overruns a 40 px window
        assert_eq!(report.window, Some(window(0, 40, 65)));
        assert!(surface.lines().count() > 0);
        assert!(surface.lines().all(|(from, _, _)| from.x <= 36));
    }

    #[test]
    fn fewer_labels_than_items() {
        let mut fx = Fixture::new(20, 5, 20.0, 200);
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        let report = fx.render(&mut strip, &mut surface, WIDE);
        assert_eq!(surface.texts().count(), 5);
        assert_eq!(
            report.visible,
            Some(VisibleLabels::fitted(IndexRange::new(0, 9)))
        );
    }

    #[test]
    fn columns_turn_label_space() {
        let mut fx = Fixture::fitted();
        let mut strip = LabelStrip::new(
            StripAxis::Columns,
            Justification::Start,
            PortSettings::default(),
            FontAttributes::default(),
        );
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, WIDE);

        let transforms = text_transforms(&surface);
        assert!(!transforms.is_empty());
        assert!(transforms
            .iter()
            .all(|t| *t == Transform::quarter_turn(120)));
        // Start-justified opposed text begins after the indent
        assert!(surface.texts().all(|(_, origin, _)| origin.x == 3));
    }
}

mod hint {
    use super::*;

    #[test]
    fn dense_items_without_port_show_hint() {
        let mut fx = Fixture::dense();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        let report = fx.render(&mut strip, &mut surface, DENSE);

        assert_eq!(report.mode, LayoutMode::Hint);
        assert_eq!(report.window, None);
        assert_eq!(fx.map.visible_labels(), None);
        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, ZOOM_HINT);
        assert_eq!(texts[0].2.font.size, HINT_FONT_SIZE);
        assert_eq!(text_transforms(&surface), vec![Transform::quarter_turn(100)]);
    }

    #[test]
    fn zooming_out_clears_published_labels() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, WIDE);
        assert!(fx.map.visible_labels().is_some());

        fx.map.set_scale(2.0);
        let report = fx.render(&mut strip, &mut surface, WIDE);
        assert_eq!(report.mode, LayoutMode::Hint);
        assert_eq!(fx.map.visible_labels(), None);
    }

    #[test]
    fn column_hint_is_not_turned() {
        let mut fx = Fixture::dense();
        let mut strip = LabelStrip::new(
            StripAxis::Columns,
            Justification::Start,
            PortSettings::default(),
            FontAttributes::default(),
        );
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, DENSE);
        assert_eq!(text_transforms(&surface), vec![Transform::IDENTITY]);
    }
}

mod windowed {
    use super::*;

    fn active(strip: &mut LabelStrip) {
        strip.pointer_entered_linked_view(Instant::now());
    }

    #[test]
    fn zero_flank_draws_only_hovered_label() {
        let mut fx = Fixture::dense();
        fx.map.set_hover_index(Some(42));
        let mut strip = rows();
        active(&mut strip);
        let mut surface = RecordingSurface::default();
        let report = fx.render(&mut strip, &mut surface, DENSE);

        assert_eq!(report.mode, LayoutMode::Windowed);
        let visible = report.visible.expect("windowed labels");
        assert!(visible.windowed);
        assert_eq!(visible.drawn, IndexRange::new(42, 42));

        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, "label-042");
        assert_eq!(texts[0].2.color, Rgba::RED);
        assert!(texts[0].2.font.style.is_bold());

        let palette = StripPalette::default();
        assert!(!surface.fills().any(|(_, c)| c == palette.port_accent));
    }

    #[test]
    fn full_port_shows_neighbours_and_indicator() {
        let mut fx = Fixture::dense();
        fx.map.set_hover_index(Some(42));
        let mut strip = rows();
        strip.on_mode_toggle();
        assert_eq!(strip.port().effective_flank(), FlankLimit::Unlimited);
        active(&mut strip);
        let mut surface = RecordingSurface::default();
        let report = fx.render(&mut strip, &mut surface, DENSE);

        let visible = report.visible.expect("windowed labels");
        assert!(visible.drawn.contains(42));
        assert!(visible.drawn.len() > 1);
        assert!(visible.capacity.covers(&visible.drawn));

        let palette = StripPalette::default();
        let (_, _, hovered) = surface
            .texts()
            .find(|(t, _, _)| *t == "label-042")
            .expect("hovered label drawn");
        assert_eq!(hovered.color, palette.hover_text);
        assert!(surface.fills().any(|(_, c)| c == palette.port_accent));
    }

    #[test]
    fn missing_hover_falls_back_to_first_visible() {
        let mut fx = Fixture::dense();
        let mut strip = rows();
        active(&mut strip);
        let mut surface = RecordingSurface::default();
        let report = fx.render(&mut strip, &mut surface, DENSE);
        assert_eq!(
            report.visible.map(|v| v.drawn),
            Some(IndexRange::new(0, 0))
        );
    }

    #[test]
    fn disabled_port_never_windows() {
        let mut fx = Fixture::dense();
        let mut strip = rows();
        strip.set_port_settings(PortSettings {
            enabled: false,
            ..PortSettings::default()
        });
        active(&mut strip);
        let mut surface = RecordingSurface::default();
        let report = fx.render(&mut strip, &mut surface, DENSE);
        assert_eq!(report.mode, LayoutMode::Hint);
    }
}

mod scrolling {
    use super::*;

    #[test]
    fn scroll_before_first_frame_is_none() {
        let mut strip = rows();
        assert_eq!(strip.scroll_to(10), None);
        assert_eq!(strip.scroll_wheel(1), None);
    }

    #[test]
    fn wheel_scrolls_six_pixels_per_notch() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, NARROW);
        assert_eq!(strip.scroll_wheel(2), Some(window(12, 52, 53)));
        assert_eq!(strip.scroll_wheel(-5), Some(window(0, 40, 65)));
    }

    #[test]
    fn justification_change_keeps_window() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, NARROW);
        assert_eq!(strip.scroll_to(20), Some(window(20, 60, 45)));

        strip.set_justification(Justification::End);
        assert_eq!(strip.scroll_window(), Some(window(20, 60, 45)));
        let report = fx.render(&mut strip, &mut surface, NARROW);
        assert_eq!(report.window, Some(window(20, 60, 45)));
    }

    #[test]
    fn mode_toggle_resets_window() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, NARROW);
        strip.scroll_to(20);
        strip.on_mode_toggle();
        assert_eq!(strip.scroll_window(), None);
        let report = fx.render(&mut strip, &mut surface, NARROW);
        assert_eq!(report.window, Some(window(0, 40, 65)));
    }

    #[test]
    fn font_face_change_resets_but_size_change_keeps() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, NARROW);
        strip.scroll_to(20);

        let bigger = FontAttributes {
            size: 16,
            ..FontAttributes::default()
        };
        assert_eq!(strip.on_font_changed(bigger.clone()), FontChange::SizeOnly);
        assert!(strip.scroll_window().is_some());

        let other_face = FontAttributes {
            face: "Helvetica".to_string(),
            ..bigger
        };
        assert_eq!(strip.on_font_changed(other_face), FontChange::FaceOrStyle);
        assert_eq!(strip.scroll_window(), None);
    }

    #[test]
    fn data_change_resets_window() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, NARROW);
        strip.on_data_changed();
        assert_eq!(strip.scroll_window(), None);
    }

    #[test]
    fn viewport_resize_rederives_window() {
        let mut fx = Fixture::fitted();
        let mut strip = rows();
        let mut surface = RecordingSurface::default();
        fx.render(&mut strip, &mut surface, NARROW);
        assert_eq!(strip.scroll_to(65), Some(window(65, 105, 0)));
        assert_eq!(strip.on_viewport_resized(60), Some(window(45, 105, 0)));
        // unchanged breadth is a no-op
        assert_eq!(strip.on_viewport_resized(60), Some(window(45, 105, 0)));
    }
}

mod hover {
    use super::*;

    #[test]
    fn pixel_maps_to_index() {
        let mut fx = Fixture::fitted();
        let strip = rows();
        assert_eq!(strip.set_hover_pixel(&mut fx.map, Some(45)), Some(2));
        assert_eq!(fx.map.hover_index(), Some(2));
        assert_eq!(strip.set_hover_pixel(&mut fx.map, Some(-1)), None);
        assert_eq!(fx.map.hover_index(), None);
    }

    #[test]
    fn animation_runs_while_over_linked_view() {
        let t0 = Instant::now();
        let mut strip = rows();
        assert_eq!(strip.next_deadline(), None);

        strip.pointer_entered_linked_view(t0);
        assert!(strip.is_port_active());
        let first_tick = t0 + Duration::from_millis(50);
        assert_eq!(strip.next_deadline(), Some(first_tick));
        assert!(!strip.poll_animation(t0 + Duration::from_millis(10)));
        assert!(strip.poll_animation(first_tick));

        let left_at = t0 + Duration::from_millis(60);
        strip.pointer_left_linked_view(left_at);
        assert!(strip.is_port_active());
        let gone = left_at + Duration::from_millis(250);
        assert!(strip.poll_animation(gone));
        assert!(!strip.is_port_active());
        assert_eq!(strip.next_deadline(), None);
    }
}
