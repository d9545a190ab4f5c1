//! Core validation pipeline
//!
//! collect → partition → validate (fan out) → aggregate (fan in) → report

pub mod input;
pub mod partition;
pub mod pipeline;
pub mod providers;
pub mod report;
pub mod traits;
pub mod types;
pub mod validator;

pub use input::collect_credentials;
pub use partition::{chunk_size, partition};
pub use pipeline::run_validation;
pub use report::{RenderOptions, Report, Style};
pub use traits::IdentityService;
pub use types::{AuthorizationDetails, CallerIdentity, CredentialPair, CredentialRecord};
pub use validator::Validator;
