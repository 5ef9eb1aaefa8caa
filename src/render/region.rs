//! Caller-designated output regions for rendered fragments.
//!
//! A region is an addressable display location that a view populates. The
//! trait keeps views agnostic of the surrounding page: a CLI binds regions
//! to in-memory buffers, while an embedding host can bind them to whatever
//! its display layer addresses. The typed region records below replace
//! free-form element-identifier parameters, so a missing region is a
//! compile-time concern rather than a run-time lookup failure.

/// An output sink a render step writes HTML fragments into.
pub trait RegionSink {
    /// Replaces the region's contents with the given fragment.
    fn replace(&mut self, fragment: String);

    /// Appends a fragment after the region's current contents.
    fn append(&mut self, fragment: String);

    /// Reports whether the region currently holds no content.
    fn is_empty(&self) -> bool;
}

/// String-backed region used by the CLI and in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferRegion {
    contents: String,
}

impl BufferRegion {
    /// Creates an empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the accumulated fragment.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Consumes the region, returning its fragment.
    #[must_use]
    pub fn into_contents(self) -> String {
        self.contents
    }
}

impl RegionSink for BufferRegion {
    fn replace(&mut self, fragment: String) {
        self.contents = fragment;
    }

    fn append(&mut self, fragment: String) {
        self.contents.push_str(&fragment);
    }

    fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Regions the review list view writes to.
pub struct ListRegions<'a> {
    /// Status line above the results.
    pub status: &'a mut dyn RegionSink,
    /// Results container holding the rendered listing.
    pub content: &'a mut dyn RegionSink,
}

/// The six regions the review detail view writes to.
pub struct DetailRegions<'a> {
    /// Region 1: full review text, sentence count, and review identifier.
    pub raw_text: &'a mut dyn RegionSink,
    /// Region 2: per-sentence breakdown in original order.
    pub sentence_breakdown: &'a mut dyn RegionSink,
    /// Region 3: highest-scoring sentence.
    pub most_positive_sentence: &'a mut dyn RegionSink,
    /// Region 4: lowest-scoring sentence.
    pub most_negative_sentence: &'a mut dyn RegionSink,
    /// Region 5: most positive sliding-window paragraph.
    pub positive_paragraph: &'a mut dyn RegionSink,
    /// Region 6: most negative sliding-window paragraph.
    pub negative_paragraph: &'a mut dyn RegionSink,
}

/// Regions the summary view writes to.
pub struct SummaryRegions<'a> {
    /// Status line above the results.
    pub status: &'a mut dyn RegionSink,
    /// Interstitial content container, cleared on completion.
    pub content: &'a mut dyn RegionSink,
    /// Container receiving the summary image exactly once.
    pub image_container: &'a mut dyn RegionSink,
}
