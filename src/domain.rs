//! Domain name normalization.
//!
//! The API addresses domains by their ASCII-compatible encoding, so every
//! client method runs user input through [`to_ascii`] before building a URL.
//! The address helpers convert only the part after the last `@`; local-parts
//! are passed through untouched.

use crate::{Error, Result};

/// Convert a (possibly Unicode) domain name to its ASCII-compatible encoding.
///
/// # Examples
/// ```
/// assert_eq!(migadu_client::domain::to_ascii("hoß.de").unwrap(), "xn--ho-hia.de");
/// ```
pub fn to_ascii(domain: &str) -> Result<String> {
    idna::domain_to_ascii(domain).map_err(|e| Error::Encoding {
        domain: domain.to_string(),
        reason: e.to_string(),
    })
}

/// Convert a domain name to its Unicode presentation form.
pub fn to_unicode(domain: &str) -> Result<String> {
    let (unicode, result) = idna::domain_to_unicode(domain);
    result.map_err(|e| Error::Encoding {
        domain: domain.to_string(),
        reason: e.to_string(),
    })?;
    Ok(unicode)
}

/// Convert the domain of every address to Unicode, for display.
pub fn emails_to_unicode<S: AsRef<str>>(emails: &[S]) -> Result<Vec<String>> {
    emails
        .iter()
        .map(|email| convert_email(email.as_ref(), to_unicode))
        .collect()
}

/// Convert the domain of every address to ASCII, for canonical comparison.
pub fn emails_to_ascii<S: AsRef<str>>(emails: &[S]) -> Result<Vec<String>> {
    emails
        .iter()
        .map(|email| convert_email(email.as_ref(), to_ascii))
        .collect()
}

fn convert_email(email: &str, convert: fn(&str) -> Result<String>) -> Result<String> {
    let (local_part, domain) = email.rsplit_once('@').ok_or_else(|| Error::Encoding {
        domain: email.to_string(),
        reason: "address has no `@`".to_string(),
    })?;
    Ok(format!("{local_part}@{}", convert(domain)?))
}
