//! Search request description and its round trip through the host.
//!
//! Zellij performs web requests on the plugin's behalf and hands the response
//! back later as an event, together with a string map the plugin attached to
//! the request. [`SearchRequest`] is encoded into that map so the response can
//! be merged under the term it was issued for, whichever term is active by
//! the time it arrives. The current trace context rides along the same way so
//! the response span links to the request span.

use std::collections::BTreeMap;

/// Context key marking a web request as one of ours.
const MARKER_KEY: &str = "hnsearch.request";
const MARKER_VALUE: &str = "search";
const QUERY_KEY: &str = "query";
const PAGE_KEY: &str = "page";
const HITS_PER_PAGE_KEY: &str = "hits_per_page";
const TRACE_ID_KEY: &str = "trace_id";
const PARENT_SPAN_ID_KEY: &str = "parent_span_id";

/// Distributed tracing context carried across the host round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current span.
    ///
    /// Returns `None` when tracing is not initialized or the span is not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// One paginated search against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search term; also the key results are cached under.
    pub query: String,

    /// Zero-based page to fetch.
    pub page: u32,

    /// Page size requested from the API.
    pub hits_per_page: u32,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>, page: u32, hits_per_page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            hits_per_page,
        }
    }

    /// Builds the request URL under `api_base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::api::SearchRequest;
    ///
    /// let req = SearchRequest::new("rust lang", 2, 100);
    /// assert_eq!(
    ///     req.url("https://hn.algolia.com/api/v1"),
    ///     "https://hn.algolia.com/api/v1/search?query=rust%20lang&page=2&hitsPerPage=100"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, api_base: &str) -> String {
        format!(
            "{}/search?query={}&page={}&hitsPerPage={}",
            api_base.trim_end_matches('/'),
            urlencoding::encode(&self.query),
            self.page,
            self.hits_per_page
        )
    }

    /// Encodes the request, plus the current trace context, into a host context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(MARKER_KEY.to_string(), MARKER_VALUE.to_string());
        context.insert(QUERY_KEY.to_string(), self.query.clone());
        context.insert(PAGE_KEY.to_string(), self.page.to_string());
        context.insert(HITS_PER_PAGE_KEY.to_string(), self.hits_per_page.to_string());

        if let Some(trace) = TraceContext::from_current() {
            context.insert(TRACE_ID_KEY.to_string(), trace.trace_id);
            context.insert(PARENT_SPAN_ID_KEY.to_string(), trace.parent_span_id);
        }

        context
    }

    /// Recovers a request from a host context map.
    ///
    /// Returns `None` for maps that were not produced by [`Self::to_context`].
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        if context.get(MARKER_KEY).map(String::as_str) != Some(MARKER_VALUE) {
            return None;
        }

        let query = context.get(QUERY_KEY)?.clone();
        let page = context.get(PAGE_KEY)?.parse().ok()?;
        let hits_per_page = context.get(HITS_PER_PAGE_KEY)?.parse().ok()?;

        Some(Self {
            query,
            page,
            hits_per_page,
        })
    }
}

/// Reads the trace context attached by [`SearchRequest::to_context`], if any.
#[must_use]
pub fn trace_context_from(context: &BTreeMap<String, String>) -> Option<TraceContext> {
    Some(TraceContext {
        trace_id: context.get(TRACE_ID_KEY)?.clone(),
        parent_span_id: context.get(PARENT_SPAN_ID_KEY)?.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_query_and_trims_base() {
        let req = SearchRequest::new("c++ & rust?", 0, 100);
        assert_eq!(
            req.url("https://example.test/api/"),
            "https://example.test/api/search?query=c%2B%2B%20%26%20rust%3F&page=0&hitsPerPage=100"
        );
    }

    #[test]
    fn context_restores_request() {
        let req = SearchRequest::new("redux", 3, 50);
        let context = req.to_context();
        assert_eq!(context.get("hnsearch.request").map(String::as_str), Some("search"));
        assert_eq!(SearchRequest::from_context(&context), Some(req));
    }

    #[test]
    fn foreign_or_broken_context_is_rejected() {
        let mut foreign = BTreeMap::new();
        foreign.insert("query".to_string(), "redux".to_string());
        assert_eq!(SearchRequest::from_context(&foreign), None);

        let mut broken = SearchRequest::new("redux", 0, 100).to_context();
        broken.insert("page".to_string(), "not-a-number".to_string());
        assert_eq!(SearchRequest::from_context(&broken), None);
    }

    #[test]
    fn trace_context_requires_both_ids() {
        let mut context = BTreeMap::new();
        context.insert("trace_id".to_string(), "abc".to_string());
        assert_eq!(trace_context_from(&context), None);

        context.insert("parent_span_id".to_string(), "def".to_string());
        assert_eq!(
            trace_context_from(&context),
            Some(TraceContext {
                trace_id: "abc".to_string(),
                parent_span_id: "def".to_string(),
            })
        );
    }
}
