use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::{
    consts::{BASE_URL, DECKLISTS_INDEX_URL, DEFAULT_LINK_SELECTORS, TRUSTED_PREFIX, USER_AGENT},
    error::{AppError, ValidationError},
};

/// Only pages from the official site are fetched.
pub fn validate_url(url: &str) -> Result<Url, ValidationError> {
    if !url.starts_with(TRUSTED_PREFIX) {
        return Err(ValidationError::UntrustedOrigin(url.to_string()));
    }
    Url::parse(url).map_err(|source| ValidationError::Malformed {
        url: url.to_string(),
        source,
    })
}

pub fn client() -> eyre::Result<Client> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()?;
    Ok(client)
}

pub async fn fetch_document(client: &Client, url: &Url) -> eyre::Result<Html> {
    info!(%url, "fetching");
    let req = client.get(url.clone()).build()?;
    let result = client.execute(req).await?.error_for_status()?;
    let text = result.text().await?;
    debug!(bytes = text.len(), "fetched");
    Ok(Html::parse_document(&text))
}

/// Link to the latest modern event on the decklists index.
pub fn find_default_url(index: &Html) -> Result<Url, ValidationError> {
    let base = Url::parse(BASE_URL).map_err(|source| ValidationError::Malformed {
        url: BASE_URL.to_string(),
        source,
    })?;
    let href = DEFAULT_LINK_SELECTORS
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|selector| {
            index
                .select(&selector)
                .find_map(|a| a.value().attr("href"))
                .map(str::to_string)
        })
        .ok_or(ValidationError::NoDefaultLink)?;
    base.join(&href).map_err(|source| ValidationError::Malformed { url: href, source })
}

pub async fn discover_default_url(client: &Client) -> eyre::Result<Url> {
    let index_url = validate_url(DECKLISTS_INDEX_URL).map_err(AppError::from)?;
    let index = fetch_document(client, &index_url).await?;
    let url = find_default_url(&index).map_err(AppError::from)?;
    info!(%url, "using the latest modern event");
    Ok(url)
}
