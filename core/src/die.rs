use std::fmt;

/// Face value read from a die control's `value` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DieValue {
    Parsed(i64),
    /// Attribute had no leading integer; kept verbatim and carried as-is.
    Unparsed(String),
}

impl DieValue {
    /// Integer parse with the same leniency as a browser `parseInt(_, 10)`:
    /// leading whitespace is skipped and the longest signed decimal prefix wins.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return DieValue::Unparsed(raw.to_string());
        }
        match digits[..end].parse::<i64>() {
            Ok(value) if negative => DieValue::Parsed(-value),
            Ok(value) => DieValue::Parsed(value),
            Err(_) => DieValue::Unparsed(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            DieValue::Parsed(value) => Some(*value),
            DieValue::Unparsed(_) => None,
        }
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieValue::Parsed(value) => value.fmt(f),
            DieValue::Unparsed(_) => f.write_str("NaN"),
        }
    }
}

/// One clickable die. `index` is its position among the discovered die
/// controls; `held` dice are kept out of the next throw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DieSelector {
    index: usize,
    value: DieValue,
    held: bool,
}

impl DieSelector {
    pub fn new(index: usize, value: DieValue) -> Self {
        Self {
            index,
            value,
            held: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &DieValue {
        &self.value
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Flips the held flag and returns the new value. Throw set membership is
    /// updated by the board in the same step.
    pub(crate) fn flip(&mut self) -> bool {
        self.held = !self.held;
        self.held
    }
}

impl fmt::Display for DieSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{<DieSelector> held: {}, value: {}}}",
            self.held, self.value
        )
    }
}
