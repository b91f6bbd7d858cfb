//! Label export
//!
//! Exports lay labels out fitted at a fixed font and tile size, full length,
//! without scrolling, hover or animation. The target is sized with
//! [`LabelStrip::export_extent`] and painted with [`LabelStrip::export`].

use crate::host::{
    AxisMap, FontMetrics, LabelSource, PixelRect, Point, SelectionSet, Surface, TextStyle,
    Transform,
};
use crate::model::{Justification, StripAxis};
use crate::view::strip::LabelStrip;
use crate::view_state::{label_text, measure_longest, IndexRange};
use tracing::debug;

/// Which items to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportRegion {
    /// Every item.
    #[default]
    All,
    /// Items currently visible in the map.
    Visible,
    /// From the first to the last selected item.
    Selection,
}

/// Export parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    /// Items to export.
    pub region: ExportRegion,
    /// Point size of the label font.
    pub font_size: u32,
    /// Pixels per item along the primary axis.
    pub tile_size: i32,
    /// Fill selected labels' tiles with the selection colour.
    pub show_selections: bool,
    /// Leave unselected labels' tiles empty.
    pub selected_only: bool,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            region: ExportRegion::All,
            font_size: 14,
            tile_size: 16,
            show_selections: true,
            selected_only: false,
        }
    }
}

/// Collaborators an export reads from.
pub struct ExportContext<'a> {
    /// Index↔pixel mapping, for the visible region.
    pub map: &'a dyn AxisMap,
    /// Label text.
    pub labels: &'a dyn LabelSource,
    /// Selected indices.
    pub selection: &'a dyn SelectionSet,
    /// Text measurement.
    pub metrics: &'a dyn FontMetrics,
}

/// Size and content of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportLayout {
    /// Items exported, one tile each.
    pub range: IndexRange,
    /// Longest exported label in pixels.
    pub longest: i32,
    /// Target width in pixels.
    pub width: i32,
    /// Target height in pixels.
    pub height: i32,
}

/// Item range a region covers. `None` when it is empty.
pub fn export_range(
    region: ExportRegion,
    map: &dyn AxisMap,
    selection: &dyn SelectionSet,
) -> Option<IndexRange> {
    if map.total_items() == 0 {
        return None;
    }
    match region {
        ExportRegion::All => Some(IndexRange::new(map.min_index(), map.max_index())),
        ExportRegion::Visible => Some(IndexRange::new(map.first_visible(), map.last_visible())),
        ExportRegion::Selection => selection.selected_range(),
    }
}

impl LabelStrip {
    /// Lay out an export without painting it.
    pub fn export_extent(
        &self,
        ctx: &ExportContext<'_>,
        request: &ExportRequest,
    ) -> Option<ExportLayout> {
        let range = export_range(request.region, ctx.map, ctx.selection)?;
        let font = self.font().spec().with_size(request.font_size);
        let indices = range
            .indices()
            .filter(|&i| i < ctx.labels.label_count())
            .filter(|&i| !request.selected_only || ctx.selection.is_selected(i));
        let longest = measure_longest(ctx.labels, ctx.metrics, &font, indices)
            .map_or(0, |(_, _, length)| length);
        let tile = request.tile_size.max(1);
        let primary = i32::try_from(range.len())
            .unwrap_or(i32::MAX)
            .saturating_mul(tile);
        let (width, height) = match self.axis() {
            StripAxis::Rows => (longest, primary),
            StripAxis::Columns => (primary, longest),
        };
        Some(ExportLayout {
            range,
            longest,
            width,
            height,
        })
    }

    /// Paint an export at the surface origin. Returns its layout, or `None`
    /// when the region is empty.
    pub fn export(
        &self,
        ctx: &ExportContext<'_>,
        surface: &mut dyn Surface,
        request: &ExportRequest,
    ) -> Option<ExportLayout> {
        let layout = self.export_extent(ctx, request)?;
        let font = self.font().spec().with_size(request.font_size);
        let ascent = ctx.metrics.ascent(&font);
        let tile = request.tile_size.max(1);
        let palette = *self.palette();

        let saved = surface.transform();
        surface.set_transform(match self.axis() {
            StripAxis::Rows => Transform::IDENTITY,
            StripAxis::Columns => Transform::quarter_turn(layout.longest),
        });

        let mut y = 0;
        for index in layout.range.indices() {
            let tile_top = y;
            y += tile;
            if index >= ctx.labels.label_count() {
                continue;
            }
            let selected = ctx.selection.is_selected(index);
            if request.selected_only && !selected {
                continue;
            }
            if selected && request.show_selections {
                surface.fill_rect(
                    PixelRect::new(0, tile_top, layout.longest, tile),
                    palette.selection_background,
                );
            }
            let text = match label_text(ctx.labels, index) {
                Ok(text) => text,
                Err(err) => {
                    debug!(%err, index, "Skipping label in export");
                    continue;
                }
            };
            let x = match self.justification() {
                Justification::Start => 0,
                Justification::End => layout.longest - ctx.metrics.string_width(&text, &font),
            };
            let baseline = tile_top + tile / 2 + ascent / 2;
            let style = TextStyle {
                font: font.clone(),
                color: palette.text,
            };
            surface.draw_text(&text, Point::new(x, baseline), &style);
        }

        surface.set_transform(saved);
        debug!(
            axis = self.axis().name(),
            items = layout.range.len(),
            width = layout.width,
            height = layout.height,
            "Exported labels"
        );
        Some(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{
        DrawOp, FieldLabels, IndexSelection, LinearAxisMap, MonospaceMetrics, RecordingSurface,
    };
    use crate::model::FontAttributes;
    use crate::state::PortSettings;
    use crate::view::styles::StripPalette;

    fn strip(axis: StripAxis, justification: Justification) -> LabelStrip {
        LabelStrip::new(axis, justification, PortSettings::default(), FontAttributes::default())
    }

    fn labels() -> FieldLabels {
        FieldLabels::from_names(["a", "bbbbb", "ccc", "dddddddddd", "ee"])
    }

    fn request(region: ExportRegion) -> ExportRequest {
        ExportRequest {
            region,
            font_size: 10,
            tile_size: 12,
            ..ExportRequest::default()
        }
    }

    #[test]
    fn all_region_sizes_target() {
        let map = LinearAxisMap::new(5, 1.0, 100);
        let labels = labels();
        let selection = IndexSelection::new();
        let ctx = ExportContext {
            map: &map,
            labels: &labels,
            selection: &selection,
            metrics: &MonospaceMetrics,
        };
        let layout = strip(StripAxis::Rows, Justification::Start)
            .export_extent(&ctx, &request(ExportRegion::All))
            .expect("non-empty");
        // 10 chars at 10 pt = 60 px
        assert_eq!(layout.longest, 60);
        assert_eq!((layout.width, layout.height), (60, 60));

        let columns = strip(StripAxis::Columns, Justification::Start)
            .export_extent(&ctx, &request(ExportRegion::All))
            .expect("non-empty");
        assert_eq!((columns.width, columns.height), (60, 60));
        assert_eq!(columns.range, IndexRange::new(0, 4));
    }

    #[test]
    fn selection_region_spans_selected_items() {
        let map = LinearAxisMap::new(5, 1.0, 100);
        let labels = labels();
        let mut selection = IndexSelection::new();
        let ctx_empty = ExportContext {
            map: &map,
            labels: &labels,
            selection: &selection,
            metrics: &MonospaceMetrics,
        };
        let s = strip(StripAxis::Rows, Justification::Start);
        assert_eq!(
            s.export_extent(&ctx_empty, &request(ExportRegion::Selection)),
            None
        );

        selection.select(1);
        selection.select(2);
        let ctx = ExportContext {
            map: &map,
            labels: &labels,
            selection: &selection,
            metrics: &MonospaceMetrics,
        };
        let layout = s
            .export_extent(&ctx, &request(ExportRegion::Selection))
            .expect("selection");
        assert_eq!(layout.range, IndexRange::new(1, 2));
        assert_eq!(layout.longest, 30);
        assert_eq!(layout.height, 24);
    }

    #[test]
    fn end_justified_text_is_right_aligned() {
        let map = LinearAxisMap::new(5, 1.0, 100);
        let labels = labels();
        let selection = IndexSelection::new();
        let ctx = ExportContext {
            map: &map,
            labels: &labels,
            selection: &selection,
            metrics: &MonospaceMetrics,
        };
        let mut surface = RecordingSurface::default();
        strip(StripAxis::Rows, Justification::End).export(
            &ctx,
            &mut surface,
            &request(ExportRegion::All),
        );

        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts.len(), 5);
        assert_eq!(texts[0].0, "a");
        assert_eq!(texts[0].1, Point::new(54, 10));
        assert_eq!(texts[3].1, Point::new(0, 46));
    }

    #[test]
    fn selected_only_skips_tiles_but_keeps_spacing() {
        let map = LinearAxisMap::new(5, 1.0, 100);
        let labels = labels();
        let mut selection = IndexSelection::new();
        selection.select(0);
        selection.select(3);
        let ctx = ExportContext {
            map: &map,
            labels: &labels,
            selection: &selection,
            metrics: &MonospaceMetrics,
        };
        let mut surface = RecordingSurface::default();
        let req = ExportRequest {
            selected_only: true,
            ..request(ExportRegion::All)
        };
        strip(StripAxis::Rows, Justification::Start).export(&ctx, &mut surface, &req);

        let origins: Vec<_> = surface.texts().map(|(_, o, _)| o.y).collect();
        assert_eq!(origins, vec![10, 46]);
        let palette = StripPalette::default();
        let fills: Vec<_> = surface.fills().collect();
        assert_eq!(
            fills,
            vec![
                (PixelRect::new(0, 0, 60, 12), palette.selection_background),
                (PixelRect::new(0, 36, 60, 12), palette.selection_background),
            ]
        );
    }

    #[test]
    fn columns_export_is_turned() {
        let map = LinearAxisMap::new(5, 1.0, 100);
        let labels = labels();
        let selection = IndexSelection::new();
        let ctx = ExportContext {
            map: &map,
            labels: &labels,
            selection: &selection,
            metrics: &MonospaceMetrics,
        };
        let mut surface = RecordingSurface::default();
        strip(StripAxis::Columns, Justification::Start).export(
            &ctx,
            &mut surface,
            &request(ExportRegion::All),
        );
        assert!(surface.ops().iter().all(|op| matches!(
            op,
            DrawOp::Text { transform, .. } if *transform == Transform::quarter_turn(60)
        )));
        assert_eq!(surface.transform(), Transform::IDENTITY);
    }
}
