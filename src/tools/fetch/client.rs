use super::types::{ClientConfig, HttpResponse};
use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::redirect;
use std::time::Duration;
use url::Url;

/// One-shot GET capability the fetch stage depends on.
///
/// Implementations own their timeout and redirect policy; the pipeline adds
/// no headers and never retries.
pub trait HttpClient {
    fn get_stream(&self, url: &Url) -> Result<HttpResponse>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get_stream(&self, url: &Url) -> Result<HttpResponse> {
        (**self).get_stream(url)
    }
}

impl HttpClient for Client {
    fn get_stream(&self, url: &Url) -> Result<HttpResponse> {
        let response = Client::get(self, url.clone()).send()?;
        let status = response.status();
        Ok(HttpResponse::new(status, response))
    }
}

/// Build a blocking reqwest client from `cfg`.
pub fn build_client(cfg: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .redirect(redirect::Policy::limited(cfg.redirect_limit))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .user_agent(cfg.user_agent.as_str())
        .timeout(Duration::from_millis(cfg.timeout_ms))
        .build()?;
    Ok(client)
}
