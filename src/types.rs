use crate::compat::ToString;
use crate::error::MergeError;

/// Duplicate-handling policy for one merge call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Policy {
    /// Keep every entry, duplicates included, in arrival order
    #[default]
    Append,
    /// Group entries by key at the key's first position, keeping distinct values only
    DedupeGroup,
    /// Last write wins, in place
    Override,
}

impl Policy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::DedupeGroup => "dedupe",
            Self::Override => "override",
        }
    }
}

impl core::str::FromStr for Policy {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "dedupe" | "dedupe-group" | "dedupe_group" | "group" => Ok(Self::DedupeGroup),
            "override" | "replace" => Ok(Self::Override),
            _ => Err(MergeError::UnknownPolicy(s.to_string())),
        }
    }
}

impl core::fmt::Display for Policy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
