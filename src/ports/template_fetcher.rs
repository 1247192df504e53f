use url::Url;

use crate::domain::AppError;

/// Port for downloading remote template text.
pub trait TemplateFetcher {
    /// Fetch the body at `url`, failing with `AppError::UrlUnreachable`.
    fn fetch(&self, url: &Url) -> Result<String, AppError>;
}
