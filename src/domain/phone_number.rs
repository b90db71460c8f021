#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Accepts any formatting (dashes, parentheses, spaces) as long as the
    /// input carries at least ten digits. The original text is kept so the
    /// number is forwarded exactly as the submitter wrote it.
    pub fn parse(s: String) -> Result<PhoneNumber, String> {
        let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 10 {
            Err("valid phone is required".to_string())
        } else {
            Ok(Self(s))
        }
    }

    /// The digit-only form, suitable for `tel:` links.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
