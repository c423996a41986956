use crate::config::ModuleConfig;
use crate::error::CoreError;
use crate::rules::display_name_for_address;
use crate::uia::{RegistrationParams, UiaResults};
use std::sync::Arc;
use tracing::debug;

/// Proposes a display name for a user being registered.
///
/// `Ok(None)` means no opinion: the host falls back to its own naming.
pub trait DisplayNameForRegistration: Send + Sync {
    fn display_name_for_registration(
        &self,
        uia_results: &UiaResults,
        params: &RegistrationParams,
    ) -> Result<Option<String>, CoreError>;
}

/// The part of the host API a module needs to plug itself in.
pub trait AuthCallbackRegistrar {
    fn register_display_name_for_registration(
        &mut self,
        callback: Arc<dyn DisplayNameForRegistration>,
    );
}

/// Derives the display name of new accounts from their verified email.
#[derive(Debug, Clone)]
pub struct EmailDisplayname {
    config: ModuleConfig,
}

impl EmailDisplayname {
    pub fn new(config: ModuleConfig) -> Self {
        Self { config }
    }

    /// Build the module and hand it to the host.
    pub fn register<R>(config: ModuleConfig, registrar: &mut R) -> Arc<Self>
    where
        R: AuthCallbackRegistrar + ?Sized,
    {
        let module = Arc::new(Self::new(config));
        registrar.register_display_name_for_registration(module.clone());
        module
    }

    pub fn parse_config(raw: &toml::Table) -> Result<ModuleConfig, CoreError> {
        ModuleConfig::from_table(raw)
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }
}

impl DisplayNameForRegistration for EmailDisplayname {
    fn display_name_for_registration(
        &self,
        uia_results: &UiaResults,
        _params: &RegistrationParams,
    ) -> Result<Option<String>, CoreError> {
        let Some(identity) = uia_results.email_identity()? else {
            debug!("no email identity in uia results, deferring");
            return Ok(None);
        };
        let display_name = display_name_for_address(&self.config, &identity.address)?;
        debug!(
            extract_from_email = self.config.extract_from_email,
            "display name derived from email"
        );
        Ok(Some(display_name))
    }
}
