//! Longest-label cache
//!
//! Measuring every label on every frame is O(N) string measurements. The
//! cache remembers which label was longest and for which font, and picks the
//! cheapest path that still gives a correct answer.

use crate::host::{FontMetrics, LabelSource};
use crate::model::{FontSpec, LookupError};
use crate::view_state::constants::PLACEHOLDER_LABEL;
use tracing::debug;

/// How much work a cache lookup needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheValidity {
    /// Cached length is current.
    Fresh,
    /// Same label, same face and style, new size: measure the cached text
    /// only.
    Remeasure,
    /// Anything else: scan every label.
    Rescan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CachedLongest {
    index: usize,
    text: String,
    length: i32,
    font: FontSpec,
}

/// Memoized length of the longest label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestLabelCache {
    entry: Option<CachedLongest>,
}

impl LongestLabelCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the cached longest label, if any.
    pub fn cached_index(&self) -> Option<usize> {
        self.entry.as_ref().map(|e| e.index)
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Decide how stale the cache is.
    ///
    /// `live_text` is the current text at the cached index (`None` when that
    /// index no longer resolves) and `max_index` the current largest index
    /// (`None` for an empty source).
    pub fn validity(
        &self,
        font: &FontSpec,
        live_text: Option<&str>,
        max_index: Option<usize>,
    ) -> CacheValidity {
        let Some(entry) = &self.entry else {
            return CacheValidity::Rescan;
        };
        let in_range = max_index.is_some_and(|max| entry.index <= max);
        if !in_range || live_text != Some(entry.text.as_str()) {
            return CacheValidity::Rescan;
        }
        if entry.font.face != font.face || entry.font.style != font.style {
            return CacheValidity::Rescan;
        }
        if entry.font.size != font.size {
            return CacheValidity::Remeasure;
        }
        CacheValidity::Fresh
    }

    /// Pixel length of the longest label in `labels` drawn in `font`.
    ///
    /// Absent summaries measure as the placeholder text. An empty source
    /// yields 0 and clears the cache.
    pub fn longest_length(
        &mut self,
        labels: &dyn LabelSource,
        metrics: &dyn FontMetrics,
        font: &FontSpec,
    ) -> i32 {
        let count = labels.label_count();
        if count == 0 {
            self.entry = None;
            return 0;
        }

        let live = self
            .entry
            .as_ref()
            .and_then(|e| label_text(labels, e.index).ok());
        let validity = self.validity(font, live.as_deref(), Some(count - 1));

        if let Some(entry) = self.entry.as_mut() {
            match validity {
                CacheValidity::Fresh => return entry.length,
                CacheValidity::Remeasure => {
                    entry.length = metrics.string_width(&entry.text, font);
                    entry.font = font.clone();
                    debug!(
                        index = entry.index,
                        length = entry.length,
                        size = font.size,
                        "Remeasured longest label"
                    );
                    return entry.length;
                }
                CacheValidity::Rescan => {
                    if live.as_deref() != Some(entry.text.as_str()) {
                        debug!(index = entry.index, "Label data changed, clearing longest label");
                    }
                }
            }
        }
        self.entry = None;
        self.rescan(labels, metrics, font)
    }

    fn rescan(
        &mut self,
        labels: &dyn LabelSource,
        metrics: &dyn FontMetrics,
        font: &FontSpec,
    ) -> i32 {
        let found = measure_longest(labels, metrics, font, 0..labels.label_count());
        self.entry = found.map(|(index, text, length)| CachedLongest {
            index,
            text,
            length,
            font: font.clone(),
        });
        let length = self.entry.as_ref().map_or(0, |e| e.length);
        debug!(
            index = ?self.cached_index(),
            length,
            count = labels.label_count(),
            "Rescanned for longest label"
        );
        length
    }
}

/// The text drawn for item `index`: its summary or the placeholder.
///
/// # Errors
///
/// Propagates lookup failures from the source.
pub fn label_text(labels: &dyn LabelSource, index: usize) -> Result<String, LookupError> {
    Ok(labels
        .summary_of(index)?
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string()))
}

/// Longest label among `indices` as `(index, text, length)`.
///
/// Indices that fail to resolve are skipped. Ties keep the first index.
pub fn measure_longest(
    labels: &dyn LabelSource,
    metrics: &dyn FontMetrics,
    font: &FontSpec,
    indices: impl IntoIterator<Item = usize>,
) -> Option<(usize, String, i32)> {
    let mut best: Option<(usize, String, i32)> = None;
    for index in indices {
        let text = match label_text(labels, index) {
            Ok(text) => text,
            Err(err) => {
                debug!(%err, "Skipping label while measuring");
                continue;
            }
        };
        let length = metrics.string_width(&text, font);
        if best.as_ref().is_none_or(|(_, _, l)| length > *l) {
            best = Some((index, text, length));
        }
    }
    best
}
