// Search form handling - turns the typed system name into a detail-page URL
use tracing::debug;
use crate::{SYSTEM_NAME_PARAM, SYSTEM_PAGE};

/// Receives the navigation a submitted search triggers.
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

/// Browser-style history; the last entry is the current location.
impl Navigator for Vec<String> {
    fn navigate(&mut self, href: &str) {
        self.push(href.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct SearchRedirector {
    page: String,
}

impl Default for SearchRedirector {
    fn default() -> Self {
        Self::new(SYSTEM_PAGE)
    }
}

impl SearchRedirector {
    pub fn new(page: &str) -> Self {
        Self { page: page.to_string() }
    }

    /// Target for the submitted text, or None when it is blank.
    pub fn target_for(&self, input: &str) -> Option<String> {
        let system_name = input.trim();
        if system_name.is_empty() {
            return None;
        }
        Some(format!(
            "{}?{}={}",
            self.page,
            SYSTEM_NAME_PARAM,
            urlencoding::encode(system_name)
        ))
    }

    /// Handle a form submit. Blank input is a silent no-op.
    pub fn submit<N: Navigator + ?Sized>(&self, input: &str, navigator: &mut N) -> bool {
        match self.target_for(input) {
            Some(href) => {
                debug!("search redirect -> {}", href);
                navigator.navigate(&href);
                true
            }
            None => false,
        }
    }
}
