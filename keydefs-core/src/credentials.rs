//! # Credentials
//!
//! In-memory model for the values captured from the operator. Values are
//! quoted as soon as they are captured so they can be pasted verbatim into a
//! `#define` line.

use std::fmt;

use crate::service::{CredentialField, Service};

/// A captured value wrapped in double quotes.
///
/// No escaping is applied: the value between the quotes is exactly what the
/// operator typed, and an empty answer becomes `""`.
#[derive(Clone, PartialEq, Eq)]
pub struct QuotedValue(String);

impl QuotedValue {
  /// Wrap a raw answer in double quotes.
  pub fn wrap(raw: &str) -> Self {
    Self(format!("\"{raw}\""))
  }

  /// The quoted form, as it appears in the header.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The raw answer with the surrounding quotes removed.
  pub fn raw(&self) -> &str {
    &self.0[1..self.0.len() - 1]
  }

  /// Whether the operator left this value blank.
  pub fn is_blank(&self) -> bool {
    self.raw().is_empty()
  }
}

// Secrets end up in Debug output of the collected set, so never print them.
impl fmt::Debug for QuotedValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_blank() {
      f.write_str("QuotedValue(blank)")
    } else {
      f.write_str("QuotedValue(<redacted>)")
    }
  }
}

/// Key and secret for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
  pub key: QuotedValue,
  pub secret: QuotedValue,
}

impl CredentialPair {
  pub fn get(&self, field: CredentialField) -> &QuotedValue {
    match field {
      CredentialField::Key => &self.key,
      CredentialField::Secret => &self.secret,
    }
  }
}

/// Credential pairs in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedCredentials {
  entries: Vec<(Service, CredentialPair)>,
}

impl CollectedCredentials {
  pub fn new() -> Self {
    Self::default()
  }

  /// Credentials with every value blank, used for the example template.
  pub fn blank(services: &[Service]) -> Self {
    let entries = services
      .iter()
      .map(|service| {
        (
          *service,
          CredentialPair {
            key: QuotedValue::wrap(""),
            secret: QuotedValue::wrap(""),
          },
        )
      })
      .collect();
    Self { entries }
  }

  pub fn push(&mut self, service: Service, pair: CredentialPair) {
    self.entries.push((service, pair));
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Service, &CredentialPair)> {
    self.entries.iter().map(|(service, pair)| (service, pair))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
