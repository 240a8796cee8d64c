//! Search response decoding.

use serde::Deserialize;

use crate::domain::error::{HnSearchError, Result};
use crate::domain::Hit;

/// Longest body excerpt kept in an HTTP error.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// One decoded page of search results.
///
/// Only `hits` and `page` are read; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    /// Hits in the order the API ranked them.
    pub hits: Vec<Hit>,

    /// Page number echoed by the API.
    ///
    /// `None` when the body omits it; callers fall back to the page they
    /// requested.
    #[serde(default)]
    pub page: Option<u32>,
}

/// Turns a host web response into a search page.
///
/// # Errors
///
/// - [`HnSearchError::HttpStatus`] for any non-2xx status, with a body excerpt
/// - [`HnSearchError::Decode`] when the body is not a valid search page
///
/// # Examples
///
/// ```
/// use hnsearch::api::decode_response;
///
/// let body = br#"{"hits":[{"objectID":"1","title":"Hi","points":3}],"page":0}"#;
/// let page = decode_response(200, body)?;
/// assert_eq!(page.hits[0].points, 3);
/// # Ok::<(), hnsearch::HnSearchError>(())
/// ```
pub fn decode_response(status: u16, body: &[u8]) -> Result<SearchPage> {
    if !(200..300).contains(&status) {
        let excerpt: String = String::from_utf8_lossy(body)
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        return Err(HnSearchError::HttpStatus {
            status,
            body: excerpt,
        });
    }

    let page: SearchPage = serde_json::from_slice(body)?;
    tracing::debug!(hits = page.hits.len(), page = ?page.page, "search page decoded");
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_page_and_ignores_extra_fields() {
        let body = br#"{
            "hits": [
                {"objectID": "a", "title": "One", "author": "x", "num_comments": 4, "points": 9, "_tags": ["story"]},
                {"objectID": "b", "title": null, "num_comments": null, "points": null}
            ],
            "page": 2,
            "nbPages": 10,
            "hitsPerPage": 100
        }"#;
        let page = decode_response(200, body).unwrap();
        assert_eq!(page.page, Some(2));
        assert_eq!(page.hits.len(), 2);
        assert_eq!(page.hits[0].num_comments, 4);
        assert_eq!(page.hits[1].title, None);
        assert_eq!(page.hits[1].points, 0);
    }

    #[test]
    fn missing_page_decodes_as_none() {
        let page = decode_response(200, br#"{"hits":[{"objectID":"b"}]}"#).unwrap();
        assert_eq!(page.page, None);
        assert_eq!(page.hits.len(), 1);
    }

    #[test]
    fn non_success_status_is_an_http_error() {
        let err = decode_response(400, b"dns error: no such host").unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("no such host"));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(1000);
        match decode_response(500, body.as_bytes()) {
            Err(HnSearchError::HttpStatus { body, .. }) => assert_eq!(body.len(), MAX_ERROR_BODY_CHARS),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn undecodable_body_is_a_decode_error() {
        let err = decode_response(200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, HnSearchError::Decode(_)));

        let missing_hits = decode_response(200, br#"{"page": 0}"#).unwrap_err();
        assert!(matches!(missing_hits, HnSearchError::Decode(_)));
    }
}
