use log::{debug, info};
use reqwest::{header, redirect, Client};
use url::Url;
use crate::config::Config;
use crate::error::ResolveError;

/// Outcome of a short-link lookup
pub type ResolutionResult = Result<Url, ResolveError>;

/// Builds the HTTP client shared by every resolution in this process
pub fn build_client(config: &Config) -> Result<Client, ResolveError> {
    let client = Client::builder()
        .redirect(redirect::Policy::limited(config.max_redirects))
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout())
        .build()?;
    Ok(client)
}

/// Follows short-link redirects to the landing URL
#[derive(Clone)]
pub struct RedirectResolver {
    client: Client,
    user_agent: String,
}

impl RedirectResolver {
    pub fn new(client: Client, config: &Config) -> Self {
        RedirectResolver {
            client,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Builds a resolver with its own client from `config`
    pub fn from_config(config: &Config) -> Result<Self, ResolveError> {
        Ok(Self::new(build_client(config)?, config))
    }

    /// Issues one GET and returns the URL of the final request after all
    /// redirects. The final status is not inspected: a 404 landing page
    /// still tells us where the link points.
    pub async fn resolve(&self, url: &str) -> ResolutionResult {
        let target = Url::parse(url.trim())?;
        debug!("Resolving short link: {}", target);

        let response = self
            .client
            .get(target.clone())
            .header(header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        let final_url = response.url().clone();
        if final_url != target {
            info!("Short link {} resolved to {} ({})", target, final_url, status);
        } else {
            debug!("Short link {} did not redirect ({})", target, status);
        }

        Ok(final_url)
    }
}
