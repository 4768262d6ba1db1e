//! # Keydefs Core Library
//!
//! Builds `keydefs.h`, the header that compiles exchange API keys and secrets
//! into the trading daemon. A run checks that no header exists yet, prompts
//! for a key and a secret per exchange, and writes the include-guarded
//! definitions in one go.

pub mod collector;
pub mod config;
pub mod credentials;
pub mod emitter;
pub mod generate;
pub mod guard;
pub mod inspect;
pub mod output;
pub mod prompts;
pub mod service;

pub use config::{DEFAULT_OUTPUT, GUARD_TOKEN, GeneratorConfig};
pub use credentials::{CollectedCredentials, CredentialPair, QuotedValue};
pub use generate::{GenerateError, GenerateOutcome, generate};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use prompts::{LinePrompter, PromptError, Prompter, TerminalPrompter};
pub use service::{CredentialField, SERVICES, Service};
