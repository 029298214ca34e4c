use std::fmt;

use crate::throw_set::{format_indices, ThrowSet};
use crate::DICE_COUNT;

/// Die indices to re-roll, as submitted through a play button's value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollRequest {
    indices: Vec<usize>,
}

impl RollRequest {
    /// Parses `[0,1,3]` style values. Whitespace around brackets and entries is
    /// allowed; the list may be empty.
    pub fn parse(value: &str) -> Result<Self, RollRequestError> {
        let inner = value
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| RollRequestError::Malformed(value.to_string()))?;
        let inner = inner.trim();
        let mut indices = Vec::new();
        if !inner.is_empty() {
            for entry in inner.split(',') {
                let index = entry
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| RollRequestError::Malformed(value.to_string()))?;
                indices.push(index);
            }
        }
        Self::from_indices(indices)
    }

    pub fn from_indices(indices: Vec<usize>) -> Result<Self, RollRequestError> {
        if indices.len() > DICE_COUNT {
            return Err(RollRequestError::TooMany {
                max: DICE_COUNT,
                found: indices.len(),
            });
        }
        for (pos, index) in indices.iter().enumerate() {
            if *index >= DICE_COUNT {
                return Err(RollRequestError::OutOfRange { index: *index });
            }
            if indices[..pos].contains(index) {
                return Err(RollRequestError::Duplicate { index: *index });
            }
        }
        Ok(Self { indices })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl From<&ThrowSet> for RollRequest {
    fn from(throw_set: &ThrowSet) -> Self {
        Self {
            indices: throw_set.as_slice().to_vec(),
        }
    }
}

impl fmt::Display for RollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_indices(&self.indices))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollRequestError {
    Malformed(String),
    TooMany { max: usize, found: usize },
    Duplicate { index: usize },
    OutOfRange { index: usize },
}

impl fmt::Display for RollRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollRequestError::Malformed(value) => {
                write!(f, "roll value '{value}' is not a bracketed index list")
            }
            RollRequestError::TooMany { max, found } => {
                write!(f, "roll lists {found} dice, at most {max} allowed")
            }
            RollRequestError::Duplicate { index } => {
                write!(f, "die {index} listed twice")
            }
            RollRequestError::OutOfRange { index } => {
                write!(f, "die {index} does not exist")
            }
        }
    }
}

impl std::error::Error for RollRequestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indicator_value() {
        let request = RollRequest::parse("[0,1,3,4,2]").unwrap();
        assert_eq!(request.indices(), &[0, 1, 3, 4, 2]);
        assert_eq!(request.to_string(), "[0,1,3,4,2]");
    }

    #[test]
    fn accepts_spaces_and_empty_list() {
        assert_eq!(RollRequest::parse(" [ 4, 0 ] ").unwrap().indices(), &[4, 0]);
        assert!(RollRequest::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            RollRequest::parse("0,1"),
            Err(RollRequestError::Malformed("0,1".to_string()))
        );
        assert_eq!(
            RollRequest::parse("[0,,1]"),
            Err(RollRequestError::Malformed("[0,,1]".to_string()))
        );
        assert_eq!(
            RollRequest::parse("[1,1]"),
            Err(RollRequestError::Duplicate { index: 1 })
        );
        assert_eq!(
            RollRequest::parse("[5]"),
            Err(RollRequestError::OutOfRange { index: 5 })
        );
        assert_eq!(
            RollRequest::parse("[0,1,2,3,4,0]"),
            Err(RollRequestError::TooMany { max: 5, found: 6 })
        );
    }

    #[test]
    fn builds_from_throw_set() {
        let mut set = ThrowSet::seeded(DICE_COUNT);
        set.toggle(1);
        let request = RollRequest::from(&set);
        assert_eq!(request.indices(), &[0, 2, 3, 4]);
    }
}
