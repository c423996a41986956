use crate::domain::email::EmailParts;
use crate::domain::name::capitalize_name;

/// Organisation tag shown to Tchap administrators.
pub const TCHAP_ADMIN: &str = "Tchap Admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Organization {
    /// Any `...matrix.org` address. Rendered verbatim.
    TchapAdmin,
    /// A raw domain label, capitalised on render.
    Named(String),
}

impl Organization {
    pub fn from_email(parts: &EmailParts) -> Self {
        match parts.tail() {
            ("matrix", "org") => Self::TchapAdmin,
            // A bare gouv.fr address has nothing before "gouv", so the org is "gouv".
            ("gouv", "fr") => {
                let label = parts
                    .label_from_end(3)
                    .or_else(|| parts.label_from_end(2))
                    .unwrap_or_default();
                Self::Named(label.to_string())
            }
            (second_level, _) => Self::Named(second_level.to_string()),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::TchapAdmin => TCHAP_ADMIN.to_string(),
            Self::Named(label) => capitalize_name(label),
        }
    }
}
