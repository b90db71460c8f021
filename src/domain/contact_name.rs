use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    /// Returns a `ContactName` if the input, ignoring surrounding whitespace,
    /// is at least two user-perceived characters long.
    pub fn parse(s: String) -> Result<ContactName, String> {
        if s.trim().graphemes(true).count() < 2 {
            Err("name is required".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
