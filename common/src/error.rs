use std::{error::Error, fmt::Display};

/// Everything that can go wrong when building or using one of our trees.
/// All variants describe invalid caller input; there are no transient failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An index or range does not fit the tree, or a range is reversed or empty.
    InvalidArgument(String),
    /// A tree was requested over an empty sequence.
    EmptyInput,
}

/// This type is our goto Result for everything touching a tree.
pub type TreeResult<O> = Result<O, TreeError>;

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidArgument(str) => {
                "invalid argument: ".fmt(f)?;
                str.fmt(f)
            }
            TreeError::EmptyInput => "cannot build a tree from an empty sequence".fmt(f),
        }
    }
}
impl Error for TreeError {}

impl TreeError {
    /// Returns true for errors caused by indices or ranges outside the tree.
    /// # Usage
    /// ```
    /// # use common::TreeError;
    /// let err: TreeError = "index 7 out of bounds".into();
    /// assert!(err.is_invalid_argument());
    /// assert!(!TreeError::EmptyInput.is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TreeError::InvalidArgument(_))
    }
}

impl<'a> From<&'a str> for TreeError {
    fn from(other: &'a str) -> Self {
        TreeError::InvalidArgument(other.to_string())
    }
}
impl From<String> for TreeError {
    fn from(other: String) -> Self {
        TreeError::InvalidArgument(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_argument() {
        let err: TreeError = format!("range {:?} exceeds length {}", 0..10, 6).into();
        assert_eq!(
            err.to_string(),
            "invalid argument: range 0..10 exceeds length 6"
        );
    }

    #[test]
    fn display_empty_input() {
        assert_eq!(
            TreeError::EmptyInput.to_string(),
            "cannot build a tree from an empty sequence"
        );
    }

    #[test]
    fn boxes_into_dyn_error() {
        let boxed: Box<dyn Error> = Box::new(TreeError::EmptyInput);
        assert!(boxed.downcast_ref::<TreeError>().is_some());
    }
}
