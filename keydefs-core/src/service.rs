//! # Service Catalog
//!
//! The exchanges that need an API key and secret compiled into the daemon.
//! The catalog is fixed at build time; its order drives both the prompt
//! sequence and the order of the emitted `#define` lines.

/// An external service that needs a credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
  /// Human readable name used in prompts
  pub name: &'static str,
  /// Identifier prefix used for the emitted macro names
  pub prefix: &'static str,
}

impl Service {
  pub const fn new(name: &'static str, prefix: &'static str) -> Self {
    Self { name, prefix }
  }

  /// Macro name for one field of this service, e.g. `POLONIEX_KEY`.
  pub fn macro_name(&self, field: CredentialField) -> String {
    format!("{}_{}", self.prefix, field.suffix())
  }
}

/// The exchanges keydefs prompts for, in emission order.
pub const SERVICES: [Service; 3] = [
  Service::new("Poloniex", "POLONIEX"),
  Service::new("Bittrex", "BITTREX"),
  Service::new("Binance", "BINANCE"),
];

/// One half of a credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
  Key,
  Secret,
}

impl CredentialField {
  /// Both fields in the order they are prompted and emitted.
  pub const ALL: [CredentialField; 2] = [CredentialField::Key, CredentialField::Secret];

  /// Label shown to the operator
  pub const fn label(self) -> &'static str {
    match self {
      CredentialField::Key => "Key",
      CredentialField::Secret => "Secret",
    }
  }

  /// Suffix appended to the service prefix in macro names
  pub const fn suffix(self) -> &'static str {
    match self {
      CredentialField::Key => "KEY",
      CredentialField::Secret => "SECRET",
    }
  }
}
