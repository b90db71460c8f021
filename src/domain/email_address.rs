#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts anything shaped like `local@domain.tld`: no whitespace, a
    /// single `@`, and a dot strictly inside the domain part. No further
    /// domain validation — deliverability is the provider's problem.
    pub fn parse(s: String) -> Result<EmailAddress, String> {
        if Self::has_valid_shape(&s) {
            Ok(Self(s))
        } else {
            Err("valid email is required".to_string())
        }
    }

    fn has_valid_shape(s: &str) -> bool {
        if s.chars().any(char::is_whitespace) {
            return false;
        }
        let mut parts = s.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return false,
        };
        if local.is_empty() || domain.is_empty() {
            return false;
        }
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
