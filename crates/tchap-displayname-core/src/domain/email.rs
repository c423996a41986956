use crate::error::CoreError;

/// An address after every "." has been turned into a space and the result
/// split at the "@". Only built by [`split_email`], so the domain always has
/// at least two labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailParts {
    local: String,
    org_labels: Vec<String>,
}

impl EmailParts {
    /// Local part, with dots already replaced by spaces.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Domain labels in order, e.g. `["education", "gouv", "fr"]`.
    pub fn org_labels(&self) -> &[String] {
        &self.org_labels
    }

    /// Last two domain labels.
    pub fn tail(&self) -> (&str, &str) {
        let len = self.org_labels.len();
        (&self.org_labels[len - 2], &self.org_labels[len - 1])
    }

    /// Label `n` positions from the end, where `1` is the last one.
    pub fn label_from_end(&self, n: usize) -> Option<&str> {
        let len = self.org_labels.len();
        if n == 0 || n > len {
            return None;
        }
        Some(self.org_labels[len - n].as_str())
    }
}

pub fn split_email(address: &str) -> Result<EmailParts, CoreError> {
    let spaced = address.replace('.', " ");
    let mut parts = spaced.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(CoreError::InvalidAddressFormat(address.to_string())),
    };

    let org_labels: Vec<String> = domain.split(' ').map(str::to_string).collect();
    if org_labels.len() < 2 {
        return Err(CoreError::InvalidAddressFormat(address.to_string()));
    }

    Ok(EmailParts {
        local: local.to_string(),
        org_labels,
    })
}
