//! Contact details found in a résumé.

use serde::{Deserialize, Serialize};

/// Shown in place of a name when no candidate was matched.
pub const NAME_NOT_FOUND: &str = "Name not found";
/// Shown in place of an email when no address was matched.
pub const EMAIL_NOT_FOUND: &str = "Email not found";
/// Shown in place of a phone number when no number was matched.
pub const PHONE_NOT_FOUND: &str = "Phone not found";

/// Email and phone, each the first match in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Email address, or the "Email not found" sentinel.
    pub fn email_or_sentinel(&self) -> &str {
        self.email.as_deref().unwrap_or(EMAIL_NOT_FOUND)
    }

    /// Phone number, or the "Phone not found" sentinel.
    pub fn phone_or_sentinel(&self) -> &str {
        self.phone.as_deref().unwrap_or(PHONE_NOT_FOUND)
    }
}
