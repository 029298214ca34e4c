use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::page_config::PageConfig;
use yams_core::{BoardDescriptor, ControlSurface, DieDescriptor, PlayDescriptor};

/// Die and play controls found in the page, in document order.
#[derive(Clone, Default)]
pub(crate) struct DomControls {
    pub(crate) dice: Vec<Element>,
    pub(crate) plays: Vec<PlayTarget>,
}

#[derive(Clone)]
pub(crate) struct PlayTarget {
    pub(crate) name: String,
    /// Element the scan found; receives clicks.
    pub(crate) source: Element,
    /// Element whose value shows the throw set.
    pub(crate) target: Element,
}

impl DomControls {
    pub(crate) fn descriptor(&self) -> BoardDescriptor {
        BoardDescriptor {
            dice: self
                .dice
                .iter()
                .map(|element| DieDescriptor::new(element.get_attribute("value").unwrap_or_default()))
                .collect(),
            plays: self
                .plays
                .iter()
                .map(|play| PlayDescriptor::new(play.name.clone()))
                .collect(),
        }
    }
}

/// Scans `root` for die and play controls. A failed query yields an empty
/// list rather than an error.
pub(crate) fn discover(document: &Document, root: &Element, config: &PageConfig) -> DomControls {
    let dice = query_all(root, &config.die_selector);
    for element in &dice {
        gloo::console::log!(
            "adding die button",
            element.get_attribute("name").unwrap_or_default()
        );
    }
    let plays = query_all(root, &config.play_selector)
        .into_iter()
        .map(|source| {
            let name = source.get_attribute("name").unwrap_or_default();
            let target = document
                .get_element_by_id(&config.play_target_id(&name))
                .unwrap_or_else(|| source.clone());
            gloo::console::log!("adding play button", name.clone());
            PlayTarget {
                name,
                source,
                target,
            }
        })
        .collect();
    DomControls { dice, plays }
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => {
            gloo::console::warn!("invalid selector", selector.to_string());
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn element_value(element: &Element) -> String {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        return button.value();
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    element.get_attribute("value").unwrap_or_default()
}

fn set_element_value(element: &Element, value: &str) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_value(value);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else {
        let _ = element.set_attribute("value", value);
    }
}

/// Writes render passes straight onto the discovered elements.
pub(crate) struct DomSurface {
    controls: DomControls,
    selected_class: String,
}

impl DomSurface {
    pub(crate) fn new(controls: DomControls, selected_class: String) -> Self {
        Self {
            controls,
            selected_class,
        }
    }

    pub(crate) fn controls(&self) -> &DomControls {
        &self.controls
    }
}

impl ControlSurface for DomSurface {
    fn mark_die(&mut self, index: usize, held: bool) {
        let Some(element) = self.controls.dice.get(index) else {
            return;
        };
        let classes = element.class_list();
        let _ = if held {
            classes.add_1(&self.selected_class)
        } else {
            classes.remove_1(&self.selected_class)
        };
    }

    fn show_throw(&mut self, play: &str, value: &str) {
        for target in self.controls.plays.iter().filter(|target| target.name == play) {
            set_element_value(&target.target, value);
            gloo::console::log!("updating play button", play.to_string(), value.to_string());
        }
    }

    fn enable_play(&mut self, play: &str, enabled: bool) {
        for target in self.controls.plays.iter().filter(|target| target.name == play) {
            if let Some(button) = target.target.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(!enabled);
            } else if let Some(input) = target.target.dyn_ref::<HtmlInputElement>() {
                input.set_disabled(!enabled);
            } else if enabled {
                let _ = target.target.remove_attribute("disabled");
            } else {
                let _ = target.target.set_attribute("disabled", "");
            }
        }
    }
}
