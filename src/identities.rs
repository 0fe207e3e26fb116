//! Identity endpoints: `/domains/{domain}/mailboxes/{mailbox}/identities`.
//!
//! Identities hang off a mailbox, so every call takes the owning mailbox's
//! local-part in addition to the domain.

use crate::{Client, Identities, Identity, Result};
use reqwest::Method;

impl Client {
    /// List the identities of a mailbox.
    pub async fn get_identities(&self, domain: &str, mailbox: &str) -> Result<Vec<Identity>> {
        let url = self.domain_url(domain, &["mailboxes", mailbox, "identities"])?;
        let list: Identities = self.get_json(url).await?;
        Ok(list.identities)
    }

    /// Fetch a single identity of a mailbox by local-part.
    pub async fn get_identity(
        &self,
        domain: &str,
        mailbox: &str,
        local_part: &str,
    ) -> Result<Identity> {
        let url = self.domain_url(domain, &["mailboxes", mailbox, "identities", local_part])?;
        self.get_json(url).await
    }

    /// Create an identity and return the record the server stored.
    pub async fn create_identity(
        &self,
        domain: &str,
        mailbox: &str,
        identity: &Identity,
    ) -> Result<Identity> {
        let url = self.domain_url(domain, &["mailboxes", mailbox, "identities"])?;
        self.send_json(Method::POST, url, identity).await
    }

    /// Replace the settings of an existing identity.
    pub async fn update_identity(
        &self,
        domain: &str,
        mailbox: &str,
        local_part: &str,
        identity: &Identity,
    ) -> Result<Identity> {
        let url = self.domain_url(domain, &["mailboxes", mailbox, "identities", local_part])?;
        self.send_json(Method::PUT, url, identity).await
    }

    /// Delete an identity; the server echoes the deleted record.
    pub async fn delete_identity(
        &self,
        domain: &str,
        mailbox: &str,
        local_part: &str,
    ) -> Result<Identity> {
        let url = self.domain_url(domain, &["mailboxes", mailbox, "identities", local_part])?;
        self.delete_json(url).await
    }
}
