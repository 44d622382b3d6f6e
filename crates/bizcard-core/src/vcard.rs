//! vCard 3.0 payload generation.

use std::fmt;

use crate::error::CardResult;
use crate::profile::CardProfile;

/// MIME type of vCard files
pub const VCARD_MIME: &str = "text/vcard";

const LINE_END: &str = "\r\n";

/// Contact card text encoded in the QR code and saved as `.vcf`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VCardPayload(String);

impl VCardPayload {
    /// Build the payload for a profile.
    ///
    /// Fails with `InvalidProfile` when the name is empty. Other fields are
    /// written verbatim, blank ones included.
    pub fn from_profile(profile: &CardProfile) -> CardResult<Self> {
        profile.validate()?;

        let mut out = String::with_capacity(128);
        for line in [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", fold_value(&profile.name)),
            format!("ORG:{}", fold_value(&profile.business)),
            format!("TEL:{}", fold_value(&profile.phone)),
            format!("URL:{}", fold_value(&profile.website)),
            "END:VCARD".to_string(),
        ] {
            out.push_str(&line);
            out.push_str(LINE_END);
        }
        Ok(Self(out))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Value of the first property with this name, if any.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.0.lines().find_map(|line| {
            line.split_once(':')
                .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }
}

impl fmt::Display for VCardPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VCardPayload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keep a property value on one line: CRLF/CR/LF become the `\n` escape.
/// Literal backslashes are escaped first so they cannot read back as one.
fn fold_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\\n")
}
