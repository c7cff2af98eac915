// Page controller - one load of the system page, Loading -> Success | Error
use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};
use crate::client::{FetchError, SystemSource};
use crate::models::SystemRecord;
use crate::view::{self, Document, FieldUpdate};
use crate::{SYSTEM_NAME_PARAM, SYSTEM_PAGE};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("No system specified in the url")]
    MissingParameter,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ViewError {
    /// Text written into the error panel
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Success { system_name: String },
    Error { message: String },
}

impl PageState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PageState::Loading)
    }
}

/// Pull `system_name` out of a page query. Accepts a full URL, `?a=b&...` or
/// `a=b&...`. An empty value counts as missing.
pub fn system_name_from_query(query: &str) -> Option<String> {
    // A `?` after the first `=` belongs to a value, not to a URL
    let raw = match query.split_once('?') {
        Some((prefix, search)) if !prefix.contains('=') => search,
        _ => query,
    };
    let url = Url::parse(&format!("http://localhost/{}?{}", SYSTEM_PAGE, raw)).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == SYSTEM_NAME_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub struct PageController<S: SystemSource, D: Document> {
    source: S,
    document: D,
    state: PageState,
    record: Option<SystemRecord>,
    updates: Vec<FieldUpdate>,
}

impl<S: SystemSource, D: Document> PageController<S, D> {
    pub fn new(source: S, document: D) -> Self {
        Self {
            source,
            document,
            state: PageState::Loading,
            record: None,
            updates: Vec::new(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn record(&self) -> Option<&SystemRecord> {
        self.record.as_ref()
    }

    /// Updates applied by the load that ended in the current state
    pub fn updates(&self) -> &[FieldUpdate] {
        &self.updates
    }

    /// Run the page load for `query`. Once the page has left Loading further
    /// calls leave it untouched.
    pub async fn load(&mut self, query: &str) -> &PageState {
        if self.state.is_terminal() {
            warn!("page already settled as {:?}, reload ignored", self.state);
            return &self.state;
        }

        let Some(system_name) = system_name_from_query(query) else {
            self.fail(ViewError::MissingParameter);
            return &self.state;
        };

        info!("loading system {}", system_name);
        let outcome = self.source.fetch_system(&system_name).await;
        match outcome {
            Ok(record) => self.show(system_name, record),
            Err(e) => self.fail(ViewError::Fetch(e)),
        }
        &self.state
    }

    fn show(&mut self, system_name: String, record: SystemRecord) {
        self.updates = view::system_view(&record);
        view::apply(&mut self.document, &self.updates);
        info!("rendered {} ({} updates)", system_name, self.updates.len());
        self.record = Some(record);
        self.state = PageState::Success { system_name };
    }

    fn fail(&mut self, err: ViewError) {
        let message = err.user_message();
        warn!("system page error: {:?}", err);
        self.updates = view::error_view(&message);
        view::apply(&mut self.document, &self.updates);
        self.state = PageState::Error { message };
    }
}
