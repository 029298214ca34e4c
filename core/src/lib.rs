pub mod board;
pub mod die;
pub mod play;
pub mod roll;
pub mod throw_set;

pub use board::{
    BoardConfig, BoardDescriptor, BoardError, ControlSurface, DiceBoard, DieDescriptor,
    PlayDescriptor, RenderFrame, ToggleOutcome,
};
pub use die::{DieSelector, DieValue};
pub use play::{ParseStageError, PlayAction, PlayIndicator, Stage};
pub use roll::{RollRequest, RollRequestError};
pub use throw_set::{ParseThrowOrderError, ThrowOrder, ThrowSet};

/// Number of dice on the table. The throw set is seeded from this, not from
/// the number of die controls a page exposes.
pub const DICE_COUNT: usize = 5;
