//! Rewrite endpoints: `/domains/{domain}/rewrites`.
//!
//! Rewrite rules are read-only through this client.

use crate::{Client, Result, Rewrite, Rewrites};

impl Client {
    /// List the rewrite rules of a domain.
    pub async fn get_rewrites(&self, domain: &str) -> Result<Vec<Rewrite>> {
        let url = self.domain_url(domain, &["rewrites"])?;
        let list: Rewrites = self.get_json(url).await?;
        Ok(list.rewrites)
    }

    /// Fetch a single rewrite rule by its slug.
    pub async fn get_rewrite(&self, domain: &str, slug: &str) -> Result<Rewrite> {
        let url = self.domain_url(domain, &["rewrites", slug])?;
        self.get_json(url).await
    }
}
