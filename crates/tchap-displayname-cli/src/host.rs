use std::sync::Arc;

use tchap_displayname_core::{
    AuthCallbackRegistrar, CoreError, DisplayNameForRegistration, RegistrationParams, UiaResults,
};
use tracing::debug;

/// In-process stand-in for the homeserver's module API.
#[derive(Default)]
pub struct LocalHost {
    display_name_callbacks: Vec<Arc<dyn DisplayNameForRegistration>>,
}

impl AuthCallbackRegistrar for LocalHost {
    fn register_display_name_for_registration(
        &mut self,
        callback: Arc<dyn DisplayNameForRegistration>,
    ) {
        self.display_name_callbacks.push(callback);
    }
}

impl LocalHost {
    /// Ask each registered callback in turn; the first opinion wins.
    pub fn display_name_for_registration(
        &self,
        uia_results: &UiaResults,
        params: &RegistrationParams,
    ) -> Result<Option<String>, CoreError> {
        for callback in &self.display_name_callbacks {
            if let Some(name) = callback.display_name_for_registration(uia_results, params)? {
                return Ok(Some(name));
            }
        }
        debug!("no callback proposed a display name");
        Ok(None)
    }
}
