//! # Credential Collector
//!
//! Walks the service catalog in order and asks for a key and a secret for
//! each service. Blank answers are kept; they mean the credentials will be
//! supplied to the daemon at runtime instead.

use tracing::{debug, info};

use crate::credentials::{CollectedCredentials, CredentialPair, QuotedValue};
use crate::prompts::{PromptError, Prompter};
use crate::service::{CredentialField, Service};

/// Hint appended to every credential prompt
pub const PROMPT_HINT: &str = "(press enter to leave blank for later, or CTRL-C to abort)";

/// Prompt text for one field of one service.
pub fn prompt_message(service: &Service, field: CredentialField) -> String {
  format!("Enter {} {} {PROMPT_HINT}", service.name, field.label())
}

/// Collect one credential pair per service.
///
/// Stops at the first abort; the partially collected values are dropped with
/// the error.
pub fn collect_credentials(
  services: &[Service],
  prompter: &mut dyn Prompter,
) -> Result<CollectedCredentials, PromptError> {
  let mut collected = CollectedCredentials::new();

  for service in services {
    let key = ask(prompter, service, CredentialField::Key)?;
    let secret = ask(prompter, service, CredentialField::Secret)?;

    info!(
      service = service.name,
      key_blank = key.is_blank(),
      secret_blank = secret.is_blank(),
      "Collected credentials"
    );
    collected.push(*service, CredentialPair { key, secret });
  }

  Ok(collected)
}

fn ask(prompter: &mut dyn Prompter, service: &Service, field: CredentialField) -> Result<QuotedValue, PromptError> {
  let answer = prompter.prompt_line(&prompt_message(service, field))?;
  debug!(service = service.name, field = field.label(), len = answer.len(), "Read answer");
  Ok(QuotedValue::wrap(&answer))
}
