use crate::api::{ApiError, DocumentRecord};
use crate::forms::FormError;
use tracing::{debug, error};

/// State behind the search view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    keyword: String,
    loading: bool,
    error: Option<String>,
    /// Last successful result. Never `Some(empty)`.
    docs: Option<Vec<DocumentRecord>>,
}

/// Which parts of the search view are visible. More than one can be on at a
/// time, e.g. the loader and a stale error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchView<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub no_results: bool,
    pub results: Option<&'a [DocumentRecord]>,
}

impl SearchForm {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: String) {
        self.keyword = keyword;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn docs(&self) -> Option<&[DocumentRecord]> {
        self.docs.as_deref()
    }

    /// Validate and enter the loading state, returning the keyword to query.
    /// An empty keyword sets the validation message; a search already in
    /// flight is refused without touching anything.
    pub fn begin_search(&mut self) -> Result<String, FormError> {
        if self.loading {
            return Err(FormError::InFlight);
        }
        if self.keyword.is_empty() {
            let err = FormError::MissingKeyword;
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.loading = true;
        self.error = None;
        debug!("Search started for keyword {:?}", self.keyword);

        Ok(self.keyword.clone())
    }

    /// Record the result of the request started by `begin_search`.
    /// A failure keeps whatever results were showing before.
    pub fn finish_search(&mut self, result: Result<Option<Vec<DocumentRecord>>, ApiError>) {
        match result {
            Ok(Some(docs)) if !docs.is_empty() => {
                debug!("Search returned {} record(s)", docs.len());
                self.docs = Some(docs);
            }
            // null and [] look the same to the user
            Ok(_) => {
                debug!("Search returned no records");
                self.docs = None;
            }
            Err(e) => {
                error!("Error fetching documents: {}", e);
                self.error = Some(FormError::Search(e).to_string());
            }
        }
        self.loading = false;
    }

    pub fn view(&self) -> SearchView<'_> {
        SearchView {
            loading: self.loading,
            error: self.error(),
            no_results: !self.loading && self.docs.is_none(),
            results: self
                .docs()
                .filter(|docs| !self.loading && !docs.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_keyword(keyword: &str) -> SearchForm {
        let mut form = SearchForm::default();
        form.set_keyword(keyword.to_string());
        form
    }

    #[test]
    fn test_initial_view_shows_no_results() {
        let form = SearchForm::default();
        assert!(!form.is_loading());
        assert_eq!(
            form.view(),
            SearchView {
                loading: false,
                error: None,
                no_results: true,
                results: None,
            }
        );
    }

    #[test]
    fn test_empty_keyword_sets_validation_error() {
        let mut form = SearchForm::default();
        assert!(matches!(form.begin_search(), Err(FormError::MissingKeyword)));
        assert!(!form.is_loading());
        assert_eq!(form.error(), Some("Please enter a keyword."));
    }

    #[test]
    fn test_whitespace_keyword_is_sent() {
        let mut form = with_keyword("  ");
        assert_eq!(form.begin_search().unwrap(), "  ");
    }

    #[test]
    fn test_loading_view_hides_results() {
        let mut form = with_keyword("contract");
        form.begin_search().unwrap();
        form.finish_search(Ok(Some(vec![json!({ "id": 1 })])));

        form.begin_search().unwrap();
        let view = form.view();
        assert!(view.loading);
        assert!(!view.no_results);
        assert!(view.results.is_none());
        assert!(matches!(form.begin_search(), Err(FormError::InFlight)));
    }

    #[test]
    fn test_null_and_empty_both_mean_no_results() {
        for outcome in [None, Some(vec![])] {
            let mut form = with_keyword("contract");
            form.begin_search().unwrap();
            form.finish_search(Ok(outcome));

            let view = form.view();
            assert!(!view.loading);
            assert!(view.no_results);
            assert!(view.results.is_none());
            assert!(form.docs().is_none());
        }
    }

    #[test]
    fn test_results_replace_prior_error() {
        let mut form = SearchForm::default();
        let _ = form.begin_search();
        assert!(form.error().is_some());

        form.set_keyword("contract".to_string());
        form.begin_search().unwrap();
        assert!(form.error().is_none());

        let docs = vec![json!({ "id": 1, "document": "Lease agreement" })];
        form.finish_search(Ok(Some(docs.clone())));

        let view = form.view();
        assert_eq!(view.results, Some(docs.as_slice()));
        assert!(view.error.is_none());
        assert!(!view.no_results);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut form = with_keyword("contract");
        let docs = vec![json!({ "id": 1 })];
        form.begin_search().unwrap();
        form.finish_search(Ok(Some(docs.clone())));

        form.begin_search().unwrap();
        form.finish_search(Err(ApiError::Status {
            status: 500,
            body: String::new(),
        }));

        let view = form.view();
        assert!(!view.loading);
        assert_eq!(view.error, Some("Error fetching data. Please try again later."));
        assert_eq!(view.results, Some(docs.as_slice()));
    }
}
