use anyhow::anyhow;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::types::*;
use crate::api::LonLat;

pub const FETCH_PATH_FAILED: &str = "Failed to fetch path";
pub const TRUNCATE_FAILED: &str = "Failed to truncate database";
pub const LOAD_GRAPH_FAILED: &str = "Failed to load graph database";

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::new();
        let mut base: Url = base
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", base, e))?;

        // `join` resolves against the last `/` of the base path.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            inner: client,
            base,
        })
    }

    /// Transport and decode errors come back as the underlying [`reqwest::Error`].
    pub async fn get_path(&self, start: LonLat, end: LonLat) -> anyhow::Result<serde_json::Value> {
        let url = self.endpoint("get-path")?;
        let request = self.inner.post(url.clone()).json(&GetPathRequest::new(start, end));

        self.send(request, FETCH_PATH_FAILED)
            .await
            .inspect_err(|e| log::error!("Error fetching path from {url}: {e}"))
    }

    /// `Ok(None)` means the points are not connected.
    pub async fn get_path_collection(
        &self,
        start: LonLat,
        end: LonLat,
    ) -> anyhow::Result<Option<PathCollection>> {
        let value = self.get_path(start, end).await?;
        PathCollection::from_value(value)
    }

    pub async fn truncate_database(&self) -> anyhow::Result<StatusMessage> {
        let url = self.endpoint("truncate-db/")?;
        let request = self.inner.post(url.clone());

        self.send(request, TRUNCATE_FAILED)
            .await
            .inspect_err(|e| log::error!("Error truncating database at {url}: {e}"))
    }

    pub async fn load_graph_database(&self, path: Option<&str>) -> anyhow::Result<StatusMessage> {
        let mut url = self.endpoint("load-graph-database/")?;
        if let Some(path) = path {
            url.query_pairs_mut().append_pair("path", path);
        }
        let request = self.inner.post(url.clone());

        self.send(request, LOAD_GRAPH_FAILED)
            .await
            .inspect_err(|e| log::error!("Error loading graph database at {url}: {e}"))
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        self.base
            .join(path)
            .map_err(|e| anyhow!("error joining url: {e}"))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        rejected: &'static str,
    ) -> anyhow::Result<T> {
        let response = request.send().await?;

        let status = response.status();
        log::debug!("{} answered {status}", response.url());

        if !status.is_success() {
            return Err(anyhow!(rejected));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base() {
        let err = Client::new("not a url").err().unwrap();
        assert!(err.to_string().starts_with("not a url is not a valid url"));
    }

    #[test]
    fn joins_endpoints_onto_base() {
        let client = Client::new("http://127.0.0.1:3000").unwrap();

        assert_eq!(client.endpoint("get-path").unwrap().as_str(), "http://127.0.0.1:3000/get-path");
        assert_eq!(
            client.endpoint("truncate-db/").unwrap().as_str(),
            "http://127.0.0.1:3000/truncate-db/"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        for base in ["http://gateway.local/paths", "http://gateway.local/paths/"] {
            let client = Client::new(base).unwrap();

            assert_eq!(
                client.endpoint("get-path").unwrap().as_str(),
                "http://gateway.local/paths/get-path"
            );
            assert_eq!(
                client.endpoint("load-graph-database/").unwrap().as_str(),
                "http://gateway.local/paths/load-graph-database/"
            );
        }
    }
}
