//! Link check API endpoints

use seccheck_core::domain::link::LinkCheck;
use seccheck_core::dto::link_check::{CheckLink, LinkCheckEnvelope, LinkCheckHistory};

use crate::SecurityCheckClient;
use crate::endpoint::{DEFAULT_PAGE_SIZE, Endpoint};
use crate::error::Result;

impl SecurityCheckClient {
    /// Check a URL against reputation sources
    ///
    /// Runs synchronously on the backend; the verdict is returned directly.
    pub async fn check_link(&self, url: &str) -> Result<LinkCheck> {
        let envelope: LinkCheckEnvelope = self
            .send(
                Endpoint::CheckLink,
                &CheckLink {
                    url: url.to_string(),
                },
            )
            .await?;
        Ok(envelope.check)
    }

    /// Get a past link check
    pub async fn get_link_check(&self, check_id: u64) -> Result<LinkCheck> {
        let envelope: LinkCheckEnvelope = self.call(Endpoint::LinkCheck(check_id)).await?;
        Ok(envelope.check)
    }

    /// List past link checks, newest first
    pub async fn link_check_history(
        &self,
        page: u32,
        limit: Option<u32>,
    ) -> Result<LinkCheckHistory> {
        self.call(Endpoint::LinkCheckHistory {
            page,
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE),
        })
        .await
    }
}
