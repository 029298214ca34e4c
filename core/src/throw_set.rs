use std::fmt;
use std::str::FromStr;

/// Die indices still slated for the next throw, in the order toggles left
/// them. Un-holding a die appends its index, so the order can drift away from
/// die position over time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThrowSet {
    order: Vec<usize>,
}

impl ThrowSet {
    pub fn seeded(count: usize) -> Self {
        Self {
            order: (0..count).collect(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.order.contains(&index)
    }

    /// Removes the first occurrence of `index`. Returns whether it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.order.iter().position(|entry| *entry == index) {
            Some(pos) => {
                self.order.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, index: usize) {
        self.order.push(index);
    }

    /// Removes `index` when present, appends it otherwise. Returns whether the
    /// index is in the set afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.remove(index) {
            false
        } else {
            self.push(index);
            true
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Indices in the requested display order. The stored order is untouched.
    pub fn ordered(&self, order: ThrowOrder) -> Vec<usize> {
        let mut indices = self.order.clone();
        if order == ThrowOrder::Index {
            indices.sort_unstable();
        }
        indices
    }

    pub fn render(&self, order: ThrowOrder) -> String {
        format_indices(&self.ordered(order))
    }
}

impl fmt::Display for ThrowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_indices(&self.order))
    }
}

pub(crate) fn format_indices(indices: &[usize]) -> String {
    let joined = indices
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("[{joined}]")
}

/// How a throw set is shown on play indicators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThrowOrder {
    /// Order left by toggles; a released die shows up last.
    #[default]
    Toggle,
    /// Ascending die index.
    Index,
}

impl ThrowOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThrowOrder::Toggle => "toggle",
            ThrowOrder::Index => "index",
        }
    }
}

impl FromStr for ThrowOrder {
    type Err = ParseThrowOrderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("toggle") {
            Ok(ThrowOrder::Toggle)
        } else if value.eq_ignore_ascii_case("index") {
            Ok(ThrowOrder::Index)
        } else {
            Err(ParseThrowOrderError(value.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThrowOrderError(pub String);

impl fmt::Display for ParseThrowOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown throw order '{}' (expected toggle or index)", self.0)
    }
}

impl std::error::Error for ParseThrowOrderError {}
