use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{MovieDetail, MoviePage, MovieSummary};
use crate::config::CatalogConfig;

/// Async HTTP accessor for the remote catalog.
///
/// Cheap to clone; all clones share one connection pool. The bearer
/// token is attached to every request.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    token: String,
    language: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
            language: config.language.clone(),
        })
    }

    /// Fetch the current popular-movies page, in API order.
    pub async fn list_popular(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        let url = format!("{}/movie/popular", self.base_url);
        let page: MoviePage = self.get_json(&url, &[]).await?;
        Ok(page.results)
    }

    /// Search movies by title.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        let url = format!("{}/search/movie", self.base_url);
        let params = [
            ("query", query),
            ("include_adult", "false"),
            ("language", self.language.as_str()),
        ];
        let page: MoviePage = self.get_json(&url, &params).await?;
        Ok(page.results)
    }

    /// Fetch one movie's full record by identifier.
    pub async fn movie_detail(&self, movie_id: u64) -> Result<MovieDetail, CatalogError> {
        let url = format!("{}/movie/{}", self.base_url, movie_id);
        self.get_json(&url, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let mut request = self.http.get(url).bearer_auth(&self.token);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(CatalogError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(CatalogError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = CatalogConfig {
            base_url: "https://api.example.test/3/".to_string(),
            api_token: "token".to_string(),
            ..CatalogConfig::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://api.example.test/3");
    }
}
