//! Review listing fragment.

use serde::Serialize;

use crate::backend::{FetchError, ReviewSummary};

use super::FragmentRenderer;

/// Page serving the detail view; navigation carries both identifiers as
/// query parameters, the only inter-page state transfer.
const DETAIL_PAGE_PATH: &str = "/reviewAnalyser";

pub(super) const LIST_TEMPLATE: &str = "\
<p><strong>App ID:</strong> {{ app_id }} | <strong>Total Reviews:</strong> {{ total_reviews }} | <strong>Timestamp:</strong> {{ timestamp }}</p>
<h3>Reviews</h3>
{% for entry in entries %}<div class=\"review-card\">
  <div class=\"review-meta\">
    <a href=\"{{ entry.href }}\">
      <span id=\"review_id_{{ loop.index0 }}\" data-value=\"{{ entry.review_id }}\">{{ entry.text }}</span>
    </a>
  </div>
</div>
{% endfor %}";

#[derive(Debug, Serialize)]
struct ListEntryContext {
    review_id: String,
    text: String,
    href: String,
}

/// Builds the detail-page link for one listing entry.
#[must_use]
pub fn detail_href(review_id: &str, app_id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("review_id", review_id)
        .append_pair("app_id", app_id)
        .finish();
    format!("{DETAIL_PAGE_PATH}?{query}")
}

impl FragmentRenderer {
    /// Renders the review listing: a header line followed by one linked
    /// entry per review, in response order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn review_list(&self, summary: &ReviewSummary) -> Result<String, FetchError> {
        let entries: Vec<ListEntryContext> = summary
            .entries
            .iter()
            .map(|entry| ListEntryContext {
                href: detail_href(&entry.review_id, &summary.app_id),
                review_id: entry.review_id.clone(),
                text: entry.text.clone(),
            })
            .collect();

        self.render(
            "list.html",
            minijinja::context! {
                app_id => &summary.app_id,
                total_reviews => summary.total_reviews,
                timestamp => &summary.timestamp,
                entries => entries,
            },
        )
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
