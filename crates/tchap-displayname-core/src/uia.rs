use crate::error::CoreError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Auth type of the email-verification UIA stage.
pub const AUTH_TYPE_EMAIL: &str = "m.login.email.identity";

/// Body of the registration request. Passed through to callbacks untouched.
pub type RegistrationParams = Map<String, Value>;

/// Results of the completed UIA stages, keyed by auth type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct UiaResults(BTreeMap<String, Value>);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailIdentity {
    pub address: String,
}

impl UiaResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, auth_type: impl Into<String>, result: Value) {
        self.0.insert(auth_type.into(), result);
    }

    pub fn get(&self, auth_type: &str) -> Option<&Value> {
        self.0.get(auth_type)
    }

    /// Email stage result, if the user went through email verification.
    pub fn email_identity(&self) -> Result<Option<EmailIdentity>, CoreError> {
        let Some(value) = self.get(AUTH_TYPE_EMAIL) else {
            return Ok(None);
        };
        EmailIdentity::deserialize(value)
            .map(Some)
            .map_err(|err| CoreError::MalformedEmailStage(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{UiaResults, AUTH_TYPE_EMAIL};
    use crate::error::CoreError;
    use serde_json::json;

    #[test]
    fn email_identity_absent() {
        let results = UiaResults::new();
        assert_eq!(results.email_identity().unwrap(), None);
    }

    #[test]
    fn email_identity_ignores_other_stages() {
        let results: UiaResults =
            serde_json::from_value(json!({ "m.login.recaptcha": true })).unwrap();
        assert_eq!(results.email_identity().unwrap(), None);
    }

    #[test]
    fn email_identity_reads_address() {
        let results: UiaResults = serde_json::from_value(json!({
            "m.login.email.identity": {
                "address": "foo@nikan.com",
                "medium": "email",
                "validated_at": 1_650_000_000_000_u64,
            }
        }))
        .unwrap();
        let identity = results.email_identity().unwrap().expect("identity");
        assert_eq!(identity.address, "foo@nikan.com");
    }

    #[test]
    fn email_identity_requires_address() {
        let mut results = UiaResults::new();
        results.insert(AUTH_TYPE_EMAIL, json!({ "medium": "email" }));
        assert!(matches!(
            results.email_identity(),
            Err(CoreError::MalformedEmailStage(_))
        ));
    }
}
