// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::Languages;

impl GitHubClient {
    /// Get the language composition of a repository, in bytes per language.
    pub async fn get_languages(&self, owner: &str, repo: &str) -> Result<Languages> {
        let response = self
            .get(&format!("/repos/{}/{}/languages", owner, repo))
            .await?;
        let languages: Languages = response.json().await?;
        Ok(languages)
    }
}
