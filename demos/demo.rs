//! Print the mailboxes, aliases and rewrites of a domain.
//!
//! ```sh
//! MIGADU_USERNAME=admin@example.com MIGADU_TOKEN=... RUST_LOG=migadu_client=debug \
//!     cargo run --example demo -- example.com
//! ```

use migadu_client::{ClientBuilder, domain};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), migadu_client::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let domain_name = std::env::args().nth(1).unwrap_or_else(|| "example.com".to_string());
    let client = ClientBuilder::from_env().build()?;

    for mailbox in client.get_mailboxes(&domain_name).await? {
        println!("mailbox  {} ({})", mailbox.address, mailbox.name);
    }

    for alias in client.get_aliases(&domain_name).await? {
        let destinations = domain::emails_to_unicode(&alias.destinations)?;
        println!("alias    {} -> {}", alias.address, destinations.join(", "));
    }

    for rewrite in client.get_rewrites(&domain_name).await? {
        println!(
            "rewrite  #{} {} -> {}",
            rewrite.order_num,
            rewrite.local_part_rule,
            rewrite.destinations.join(", ")
        );
    }

    Ok(())
}
