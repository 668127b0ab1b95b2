use crate::compat::{Cow, String, ToString};
use crate::error::MergeError;

/// Structural separator between query tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Ampersand,
    Semicolon,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Self::Ampersand => '&',
            Self::Semicolon => ';',
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Ampersand => Self::Semicolon,
            Self::Semicolon => Self::Ampersand,
        }
    }

    /// Infer the separator an existing query uses.
    /// `;` only wins when the query has no `&` at all; an empty query gets `&`.
    pub fn infer(query: &str) -> Self {
        let bytes = query.as_bytes();
        if memchr::memchr(b';', bytes).is_some() && memchr::memchr(b'&', bytes).is_none() {
            Self::Semicolon
        } else {
            Self::Ampersand
        }
    }

    /// Rewrite `query` onto this separator when it is written exclusively with
    /// the opposite one. Mixed or already matching queries are returned as is.
    pub fn normalize(self, query: &str) -> Cow<'_, str> {
        let ours = self.as_char() as u8;
        let theirs = self.opposite().as_char() as u8;
        let bytes = query.as_bytes();

        if memchr::memchr(ours, bytes).is_some() || memchr::memchr(theirs, bytes).is_none() {
            return Cow::Borrowed(query);
        }
        Cow::Owned(query.replace(self.opposite().as_char(), self.as_str()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ampersand => "&",
            Self::Semicolon => ";",
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = MergeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '&' => Ok(Self::Ampersand),
            ';' => Ok(Self::Semicolon),
            other => Err(MergeError::InvalidSeparator(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Separator {
    type Error = MergeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "&" => Ok(Self::Ampersand),
            ";" => Ok(Self::Semicolon),
            other => Err(MergeError::InvalidSeparator(String::from(other))),
        }
    }
}

impl core::fmt::Display for Separator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
