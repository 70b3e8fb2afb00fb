use thiserror::Error;

/// The URL was refused before anything was fetched.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} is not a page from the official mtgo-standings")]
    UntrustedOrigin(String),
    #[error("malformed url {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("the decklists index does not link to any modern event")]
    NoDefaultLink,
}

/// The page does not look like a decklist page.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no decklist containers found")]
    NoDecklists,
    #[error("decklist row without a {0}")]
    MissingField(&'static str),
    #[error("card {name:?} has a count that is not a number: {count:?}")]
    BadCount { name: String, count: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("failed to encode the word cloud: {0}")]
    Image(#[from] image::ImageError),
}

impl AppError {
    /// The message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Insert a valid URL from the official mtgo-standings.",
            AppError::Extraction(_) => "The URL does not contain decklists or they changed the layout.",
            AppError::Image(_) => "Could not draw the word cloud.",
        }
    }
}
