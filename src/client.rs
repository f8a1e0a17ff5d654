use crate::prelude::*;
use crate::ride::Ride;

#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    endpoint: String,
}

impl Client {
    pub fn new(endpoint: impl Into<String>, timeout: Option<StdDuration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build().context("failed to build the HTTP client")?,
            endpoint: endpoint.into(),
        })
    }

    /// Sends the ride to the prediction service and returns the decoded response body.
    ///
    /// The body is decoded as JSON regardless of the response status.
    #[instrument(level = "info", skip_all)]
    pub async fn predict(&self, ride: &Ride) -> Result<serde_json::Value> {
        let start_instant = Instant::now();
        debug!(endpoint = self.endpoint.as_str(), ?ride);

        let response = self
            .client
            .post(&self.endpoint)
            .json(ride)
            .send()
            .await
            .context("the request has failed")?;
        info!(status = ?response.status(), elapsed = ?start_instant.elapsed());

        response
            .json()
            .await
            .context("could not parse the prediction response")
    }
}
