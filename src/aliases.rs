//! Alias endpoints: `/domains/{domain}/aliases`.

use crate::{Alias, Aliases, Client, Result};
use reqwest::Method;

impl Client {
    /// List all aliases of a domain.
    pub async fn get_aliases(&self, domain: &str) -> Result<Vec<Alias>> {
        let url = self.domain_url(domain, &["aliases"])?;
        let list: Aliases = self.get_json(url).await?;
        Ok(list.aliases)
    }

    /// Fetch a single alias by local-part.
    ///
    /// # Examples
    /// ```no_run
    /// # use migadu_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), migadu_client::Error> {
    /// let client = Client::new("admin@example.com", "api-key")?;
    /// let alias = client.get_alias("example.com", "info").await?;
    /// println!("{} -> {:?}", alias.address, alias.destinations);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_alias(&self, domain: &str, local_part: &str) -> Result<Alias> {
        let url = self.domain_url(domain, &["aliases", local_part])?;
        self.get_json(url).await
    }

    /// Create an alias and return the record the server stored.
    pub async fn create_alias(&self, domain: &str, alias: &Alias) -> Result<Alias> {
        let url = self.domain_url(domain, &["aliases"])?;
        self.send_json(Method::POST, url, alias).await
    }

    /// Replace the destinations and flags of an existing alias.
    pub async fn update_alias(&self, domain: &str, local_part: &str, alias: &Alias) -> Result<Alias> {
        let url = self.domain_url(domain, &["aliases", local_part])?;
        self.send_json(Method::PUT, url, alias).await
    }

    /// Delete an alias; the server echoes the deleted record.
    pub async fn delete_alias(&self, domain: &str, local_part: &str) -> Result<Alias> {
        let url = self.domain_url(domain, &["aliases", local_part])?;
        self.delete_json(url).await
    }
}
