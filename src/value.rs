use crate::collection::Occurrence;
use crate::compat::{String, ToString, Vec};

/// Value attached to a query key.
///
/// `Absent` renders as a bare key (`?flag`), `Scalar` as `key=value`, and
/// `Sequence` associates several values with one key. A `None` inside a
/// sequence is a bare occurrence of the key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    #[default]
    Absent,
    Scalar(String),
    Sequence(Vec<Option<String>>),
}

impl ParamValue {
    /// Flatten into the per-occurrence form used by the collections
    pub fn into_values(self) -> Vec<Option<String>> {
        match self {
            Self::Absent => crate::compat::vec![None],
            Self::Scalar(value) => crate::compat::vec![Some(value)],
            Self::Sequence(values) => values,
        }
    }

    /// Byte form folded into the merge collections
    pub(crate) fn into_occurrences(self) -> Vec<Occurrence> {
        self.into_values()
            .into_iter()
            .map(|value| value.map(String::into_bytes))
            .collect()
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<char> for ParamValue {
    fn from(value: char) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Collapse one element of a sequence to a single optional value.
/// Nested sequences are flattened to their first value.
fn scalar_of(value: ParamValue) -> Option<String> {
    match value {
        ParamValue::Absent => None,
        ParamValue::Scalar(s) => Some(s),
        ParamValue::Sequence(values) => values.into_iter().flatten().next(),
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(|v| scalar_of(v.into())).collect())
    }
}

impl<T: Into<ParamValue>, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        Self::Sequence(values.into_iter().map(|v| scalar_of(v.into())).collect())
    }
}

impl<T: Clone + Into<ParamValue>> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        Self::Sequence(
            values
                .iter()
                .cloned()
                .map(|v| scalar_of(v.into()))
                .collect(),
        )
    }
}
