pub mod callback;
pub mod config;
pub mod domain;
pub mod error;
pub mod rules;
pub mod uia;

pub use callback::{AuthCallbackRegistrar, DisplayNameForRegistration, EmailDisplayname};
pub use config::ModuleConfig;
pub use domain::*;
pub use error::CoreError;
pub use rules::*;
pub use uia::{EmailIdentity, RegistrationParams, UiaResults, AUTH_TYPE_EMAIL};
