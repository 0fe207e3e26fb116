//! Mailbox endpoints: `/domains/{domain}/mailboxes`.

use crate::{Client, Mailbox, Mailboxes, Result};
use reqwest::Method;

impl Client {
    /// List all mailboxes of a domain.
    ///
    /// # Examples
    /// ```no_run
    /// # use migadu_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), migadu_client::Error> {
    /// let client = Client::new("admin@example.com", "api-key")?;
    /// for mailbox in client.get_mailboxes("example.com").await? {
    ///     println!("{} ({:.1} MB)", mailbox.address, mailbox.storage_usage);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_mailboxes(&self, domain: &str) -> Result<Vec<Mailbox>> {
        let url = self.domain_url(domain, &["mailboxes"])?;
        let list: Mailboxes = self.get_json(url).await?;
        Ok(list.mailboxes)
    }

    /// Fetch a single mailbox by local-part.
    pub async fn get_mailbox(&self, domain: &str, local_part: &str) -> Result<Mailbox> {
        let url = self.domain_url(domain, &["mailboxes", local_part])?;
        self.get_json(url).await
    }

    /// Create a mailbox and return the record the server stored.
    ///
    /// The result may differ from `mailbox`, e.g. in the normalized address
    /// or defaulted permission flags.
    pub async fn create_mailbox(&self, domain: &str, mailbox: &Mailbox) -> Result<Mailbox> {
        let url = self.domain_url(domain, &["mailboxes"])?;
        self.send_json(Method::POST, url, mailbox).await
    }

    /// Replace the settings of an existing mailbox.
    pub async fn update_mailbox(
        &self,
        domain: &str,
        local_part: &str,
        mailbox: &Mailbox,
    ) -> Result<Mailbox> {
        let url = self.domain_url(domain, &["mailboxes", local_part])?;
        self.send_json(Method::PUT, url, mailbox).await
    }

    /// Delete a mailbox; the server echoes the deleted record.
    pub async fn delete_mailbox(&self, domain: &str, local_part: &str) -> Result<Mailbox> {
        let url = self.domain_url(domain, &["mailboxes", local_part])?;
        self.delete_json(url).await
    }
}
