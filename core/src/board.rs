use std::fmt;

use crate::die::{DieSelector, DieValue};
use crate::play::{PlayIndicator, Stage};
use crate::throw_set::{ThrowOrder, ThrowSet};
use crate::DICE_COUNT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DieDescriptor {
    /// Raw `value` attribute of the die control.
    pub value: String,
}

impl DieDescriptor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayDescriptor {
    pub name: String,
}

impl PlayDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Controls found on a page, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardDescriptor {
    pub dice: Vec<DieDescriptor>,
    pub plays: Vec<PlayDescriptor>,
}

impl BoardDescriptor {
    pub fn with_dice<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dice: values.into_iter().map(DieDescriptor::new).collect(),
            plays: Vec::new(),
        }
    }

    pub fn play(mut self, name: impl Into<String>) -> Self {
        self.plays.push(PlayDescriptor::new(name));
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub throw_order: ThrowOrder,
    pub stage: Option<Stage>,
    /// Indices the throw set starts with, before any die control is known.
    pub seed_count: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            throw_order: ThrowOrder::default(),
            stage: None,
            seed_count: DICE_COUNT,
        }
    }
}

/// Rendering seam between the board and whatever shows it.
pub trait ControlSurface {
    fn mark_die(&mut self, index: usize, held: bool);
    fn show_throw(&mut self, play: &str, value: &str);
    fn enable_play(&mut self, _play: &str, _enabled: bool) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub index: usize,
    pub held: bool,
    /// Whether the index is in the throw set after the toggle.
    pub in_throw: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    UnknownDie { index: usize, count: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnknownDie { index, count } => {
                write!(f, "no die at index {index} ({count} dice on the board)")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Selection state shared by every die selector and play indicator on a page.
#[derive(Clone, Debug)]
pub struct DiceBoard {
    selectors: Vec<DieSelector>,
    indicators: Vec<PlayIndicator>,
    throw_set: ThrowSet,
    config: BoardConfig,
}

impl DiceBoard {
    pub fn new(descriptor: &BoardDescriptor, config: BoardConfig) -> Self {
        let throw_set = ThrowSet::seeded(config.seed_count);
        let selectors = descriptor
            .dice
            .iter()
            .enumerate()
            .map(|(index, die)| DieSelector::new(index, DieValue::parse(&die.value)))
            .collect();
        let indicators = descriptor
            .plays
            .iter()
            .map(|play| PlayIndicator::new(play.name.clone()))
            .collect();
        Self {
            selectors,
            indicators,
            throw_set,
            config,
        }
    }

    pub fn selectors(&self) -> &[DieSelector] {
        &self.selectors
    }

    pub fn indicators(&self) -> &[PlayIndicator] {
        &self.indicators
    }

    pub fn throw_set(&self) -> &ThrowSet {
        &self.throw_set
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn stage(&self) -> Option<Stage> {
        self.config.stage
    }

    pub fn set_stage(&mut self, stage: Option<Stage>) {
        self.config.stage = stage;
    }

    /// Flips the die's held flag and moves its index in or out of the throw
    /// set: present indices are removed, absent ones appended at the end.
    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome, BoardError> {
        let count = self.selectors.len();
        let selector = self
            .selectors
            .get_mut(index)
            .ok_or(BoardError::UnknownDie { index, count })?;
        let held = selector.flip();
        let in_throw = self.throw_set.toggle(index);
        Ok(ToggleOutcome {
            index,
            held,
            in_throw,
        })
    }

    pub fn throw_value(&self) -> String {
        self.throw_set.render(self.config.throw_order)
    }

    /// Full pass: every die selector, then every play indicator.
    pub fn render_all(&self, surface: &mut dyn ControlSurface) {
        for selector in &self.selectors {
            surface.mark_die(selector.index(), selector.held());
        }
        for indicator in &self.indicators {
            let value = indicator.render_value(&self.throw_set, self.config.throw_order);
            surface.show_throw(indicator.name(), &value);
            if let (Some(stage), Some(action)) = (self.config.stage, indicator.action()) {
                surface.enable_play(indicator.name(), stage.allows(action));
            }
        }
    }

    pub fn render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::default();
        self.render_all(&mut frame);
        frame
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayFrame {
    pub name: String,
    pub value: String,
    pub enabled: Option<bool>,
}

/// In-memory surface: what a render pass would have put on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub selected: Vec<bool>,
    pub plays: Vec<PlayFrame>,
}

impl RenderFrame {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn value(&self, play: &str) -> Option<&str> {
        self.play(play).map(|frame| frame.value.as_str())
    }

    pub fn enabled(&self, play: &str) -> Option<bool> {
        self.play(play).and_then(|frame| frame.enabled)
    }

    fn play(&self, name: &str) -> Option<&PlayFrame> {
        self.plays.iter().find(|frame| frame.name == name)
    }

    fn play_mut(&mut self, name: &str) -> &mut PlayFrame {
        if let Some(pos) = self.plays.iter().position(|frame| frame.name == name) {
            return &mut self.plays[pos];
        }
        self.plays.push(PlayFrame {
            name: name.to_string(),
            ..PlayFrame::default()
        });
        let last = self.plays.len() - 1;
        &mut self.plays[last]
    }
}

impl ControlSurface for RenderFrame {
    fn mark_die(&mut self, index: usize, held: bool) {
        if self.selected.len() <= index {
            self.selected.resize(index + 1, false);
        }
        self.selected[index] = held;
    }

    fn show_throw(&mut self, play: &str, value: &str) {
        self.play_mut(play).value = value.to_string();
    }

    fn enable_play(&mut self, play: &str, enabled: bool) {
        self.play_mut(play).enabled = Some(enabled);
    }
}
