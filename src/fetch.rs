use crate::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client used for every sheet download.
///
/// The timeout covers the whole request, body included.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// GET `url` and return the body. Non-2xx statuses are errors; there is no
/// retry.
pub async fn download(client: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = client.get(url).send().await?.error_for_status()?;
    let bytes = resp.bytes().await?;
    Ok(bytes.to_vec())
}
