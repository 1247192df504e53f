use std::cell::RefCell;

use url::Url;

use crate::domain::AppError;
use crate::ports::TemplateFetcher;

/// Fetcher returning a canned body, or failing when none is set.
#[derive(Default)]
pub struct FakeFetcher {
    body: Option<String>,
    requested: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self { body: Some(body.into()), requested: RefCell::default() }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl TemplateFetcher for FakeFetcher {
    fn fetch(&self, url: &Url) -> Result<String, AppError> {
        self.requested.borrow_mut().push(url.to_string());
        self.body.clone().ok_or_else(|| AppError::UrlUnreachable {
            url: url.to_string(),
            reason: "connection refused".to_string(),
        })
    }
}
