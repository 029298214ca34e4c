use yew::prelude::*;

use crate::controller::{log_roll_request, log_toggle};
use crate::page_config::PageConfig;
use yams_core::{BoardConfig, BoardDescriptor, DiceBoard, DICE_COUNT};

#[derive(Properties, PartialEq, Clone)]
pub(crate) struct DicePanelProps {
    pub(crate) values: Vec<String>,
    pub(crate) plays: Vec<String>,
    pub(crate) selected_class: String,
    pub(crate) play_id_suffix: String,
    pub(crate) board: BoardConfig,
}

impl DicePanelProps {
    pub(crate) fn from_config(config: &PageConfig) -> Self {
        Self {
            values: (1..=DICE_COUNT).map(|value| value.to_string()).collect(),
            plays: config.panel_plays.clone(),
            selected_class: config.selected_class.clone(),
            play_id_suffix: config.play_id_suffix.clone(),
            board: config.board.clone(),
        }
    }

    fn descriptor(&self) -> BoardDescriptor {
        let mut descriptor = BoardDescriptor::with_dice(self.values.iter().cloned());
        for play in &self.plays {
            descriptor = descriptor.play(play.clone());
        }
        descriptor
    }
}

pub(crate) fn mount_panel(config: &PageConfig) {
    yew::Renderer::<DicePanel>::with_props(DicePanelProps::from_config(config)).render();
}

/// Dice and play buttons for pages that ship no markup of their own, driven
/// by the same board as the DOM controller.
#[function_component(DicePanel)]
pub(crate) fn dice_panel(props: &DicePanelProps) -> Html {
    let board = {
        let descriptor = props.descriptor();
        let config = props.board.clone();
        use_mut_ref(move || DiceBoard::new(&descriptor, config))
    };
    let redraw = use_force_update();
    let frame = board.borrow().render_frame();

    let dice = board
        .borrow()
        .selectors()
        .iter()
        .map(|selector| {
            let index = selector.index();
            let value = selector.value().to_string();
            let onclick = {
                let board = board.clone();
                let redraw = redraw.clone();
                Callback::from(move |_: MouseEvent| {
                    {
                        let mut board = board.borrow_mut();
                        match board.toggle(index) {
                            Ok(outcome) => log_toggle(&outcome, board.throw_set()),
                            Err(err) => gloo::console::warn!("yams:", err.to_string()),
                        }
                    }
                    redraw.force_update();
                })
            };
            let class = classes!(
                "die-button",
                frame
                    .is_selected(index)
                    .then(|| props.selected_class.clone())
            );
            html! {
                <button type="button" {class} value={value.clone()} {onclick}>
                    { value }
                </button>
            }
        })
        .collect::<Html>();

    let plays = props
        .plays
        .iter()
        .map(|name| {
            let value = frame.value(name).unwrap_or_default().to_string();
            let disabled = frame.enabled(name) == Some(false);
            let onclick = {
                let name = name.clone();
                let value = value.clone();
                Callback::from(move |_: MouseEvent| log_roll_request(&name, &value))
            };
            html! {
                <input
                    type="submit"
                    class="play-button"
                    name={name.clone()}
                    id={format!("{name}{}", props.play_id_suffix)}
                    value={value}
                    {disabled}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <form class="dice-panel" method="post">
            <div class="dice-row">{ dice }</div>
            <div class="play-row">{ plays }</div>
        </form>
    }
}
