//! Records exchanged with the Migadu API.
//!
//! Field names match the JSON keys one to one. Every record defaults missing
//! keys, so a response of `{}` decodes to an all-default value.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A mailbox of a domain.
///
/// `address` is always `local_part@domain_name` in the ASCII form the server
/// returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mailbox {
    pub local_part: String,
    pub domain_name: String,
    pub address: String,
    pub name: String,
    pub is_internal: bool,
    pub may_send: bool,
    pub may_receive: bool,
    pub may_access_imap: bool,
    pub may_access_pop3: bool,
    pub may_access_managesieve: bool,
    /// Either `password` or `invitation`.
    pub password_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub password_recovery_email: String,
    pub spam_action: String,
    pub spam_aggressiveness: String,
    pub expirable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_on: String,
    pub remove_upon_expiry: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sender_denylist: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sender_allowlist: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub recipient_denylist: Vec<String>,
    pub autorespond_active: bool,
    pub autorespond_subject: String,
    pub autorespond_body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub autorespond_expires_on: String,
    pub footer_active: bool,
    pub footer_plain_body: String,
    pub footer_html_body: String,
    /// Storage used, in megabytes.
    pub storage_usage: f64,
    /// Local-parts of the mailboxes this one is delegated to.
    #[serde(deserialize_with = "null_as_default")]
    pub delegations: Vec<String>,
    /// Local-parts of the identities attached to this mailbox.
    #[serde(deserialize_with = "null_as_default")]
    pub identities: Vec<String>,
}

/// Body of the mailbox list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mailboxes {
    #[serde(deserialize_with = "null_as_default")]
    pub mailboxes: Vec<Mailbox>,
}

/// A forwarding alias of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alias {
    pub local_part: String,
    pub domain_name: String,
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub destinations: Vec<String>,
    /// Internal aliases only accept mail from the same domain.
    pub is_internal: bool,
    pub expirable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_on: String,
    pub remove_upon_expiry: bool,
}

/// Body of the alias list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aliases {
    #[serde(
        rename = "address_aliases",
        alias = "aliases",
        deserialize_with = "null_as_default"
    )]
    pub aliases: Vec<Alias>,
}

/// A pattern rule that forwards matching local-parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewrite {
    pub domain_name: String,
    /// Slug identifying the rule.
    pub name: String,
    /// Wildcard pattern, e.g. `support-*`.
    pub local_part_rule: String,
    pub order_num: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub destinations: Vec<String>,
}

/// Body of the rewrite list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewrites {
    #[serde(deserialize_with = "null_as_default")]
    pub rewrites: Vec<Rewrite>,
}

/// An additional sender address attached to a mailbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub local_part: String,
    pub domain_name: String,
    pub address: String,
    pub name: String,
    pub may_send: bool,
    pub may_receive: bool,
    pub may_access_imap: bool,
    pub may_access_pop3: bool,
    pub may_access_managesieve: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub footer_active: bool,
    pub footer_plain_body: String,
    pub footer_html_body: String,
}

/// Body of the identity list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identities {
    #[serde(deserialize_with = "null_as_default")]
    pub identities: Vec<Identity>,
}
