//! HTTP fetch with manual redirect following.
//!
//! The client has automatic redirects disabled; this loop follows them itself
//! so the chain can be bounded and logged.

use log::{debug, info, warn};
use reqwest::header::LOCATION;
use reqwest::{StatusCode, Url};

use crate::error_handling::FetchError;

/// A fetched page after all redirects.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that produced the body
    pub final_url: String,
    /// Every URL requested, starting with the original one
    pub redirect_chain: Vec<String>,
    /// Status of the final response
    pub status: StatusCode,
    /// Response body, whatever the status
    pub body: String,
}

/// Fetches `start_url`, following up to `max_hops` redirects.
///
/// Any 3xx response carrying a `Location` header is followed; relative
/// locations are resolved against the current URL. A 3xx without `Location`
/// is treated as the final response. The final body is returned even for
/// non-success statuses.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled
/// * `start_url` - The validated URL to start from
/// * `max_hops` - Maximum number of redirects to follow
///
/// # Errors
///
/// Returns `FetchError::Request` on transport failures,
/// `FetchError::TooManyRedirects` when the chain exceeds `max_hops` and
/// `FetchError::InvalidRedirect` when a `Location` cannot be resolved.
pub async fn fetch_page(
    client: &reqwest::Client,
    start_url: Url,
    max_hops: usize,
) -> Result<FetchedPage, FetchError> {
    let mut chain: Vec<String> = Vec::new();
    let mut current = start_url;

    loop {
        chain.push(current.to_string());
        debug!("GET {}", current);
        let resp = client.get(current.clone()).send().await?;
        let status = resp.status();

        if status.is_redirection() {
            let location = resp
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            if let Some(location) = location {
                if chain.len() > max_hops {
                    return Err(FetchError::TooManyRedirects {
                        url: chain[0].clone(),
                        hops: max_hops,
                    });
                }
                let next =
                    current
                        .join(&location)
                        .map_err(|source| FetchError::InvalidRedirect {
                            from: current.to_string(),
                            location: location.clone(),
                            source,
                        })?;
                info!("Redirect {} {} -> {}", status.as_u16(), current, next);
                current = next;
                continue;
            }

            warn!(
                "Redirect status {} for {} but no Location header",
                status.as_u16(),
                current
            );
        } else if !status.is_success() {
            warn!("{} returned status {}", current, status);
        }

        let body = resp.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), current);
        return Ok(FetchedPage {
            final_url: current.to_string(),
            redirect_chain: chain,
            status,
            body,
        });
    }
}
