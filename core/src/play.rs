use std::fmt;
use std::str::FromStr;

use crate::throw_set::{ThrowOrder, ThrowSet};

/// Action button that shows the current throw set as its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayIndicator {
    name: String,
}

impl PlayIndicator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> Option<PlayAction> {
        PlayAction::from_name(&self.name)
    }

    pub fn render_value(&self, throw_set: &ThrowSet, order: ThrowOrder) -> String {
        throw_set.render(order)
    }
}

impl fmt::Display for PlayIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{<PlayIndicator> name: {}}}", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayAction {
    New,
    Roll,
    Hold,
}

impl PlayAction {
    pub const ALL: [PlayAction; 3] = [PlayAction::New, PlayAction::Roll, PlayAction::Hold];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "new" => Some(PlayAction::New),
            "roll" => Some(PlayAction::Roll),
            "hold" => Some(PlayAction::Hold),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayAction::New => "new",
            PlayAction::Roll => "roll",
            PlayAction::Hold => "hold",
        }
    }
}

/// Where the current turn is; decides which play buttons accept clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Waiting,
    Play,
    Mark,
    Done,
}

impl Stage {
    pub fn allows(&self, action: PlayAction) -> bool {
        matches!(
            (self, action),
            (Stage::Waiting, PlayAction::New)
                | (Stage::Play, PlayAction::Roll)
                | (Stage::Play, PlayAction::Hold)
                | (Stage::Done, PlayAction::New)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Waiting => "waiting",
            Stage::Play => "play",
            Stage::Mark => "mark",
            Stage::Done => "done",
        }
    }
}

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "waiting" => Ok(Stage::Waiting),
            "play" => Ok(Stage::Play),
            "mark" => Ok(Stage::Mark),
            "done" => Ok(Stage::Done),
            _ => Err(ParseStageError(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStageError(pub String);

impl fmt::Display for ParseStageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stage '{}'", self.0)
    }
}

impl std::error::Error for ParseStageError {}
