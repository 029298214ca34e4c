use serde::Deserialize;
use web_sys::{Document, UrlSearchParams};

use yams_core::{BoardConfig, PlayAction, Stage, ThrowOrder};

pub(crate) const CONFIG_ELEMENT_ID: &str = "yams-config";

pub(crate) const DIE_SELECTOR_DEFAULT: &str = ".die-button";
pub(crate) const PLAY_SELECTOR_DEFAULT: &str = ".play-button";
pub(crate) const SELECTED_CLASS_DEFAULT: &str = "selected";
pub(crate) const PLAY_ID_SUFFIX_DEFAULT: &str = "-button";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageConfig {
    pub(crate) die_selector: String,
    pub(crate) play_selector: String,
    pub(crate) selected_class: String,
    /// Indicator `<name>` writes into the element with id `<name><suffix>`.
    pub(crate) play_id_suffix: String,
    pub(crate) board: BoardConfig,
    /// Render the built-in dice panel when the page has no die controls.
    pub(crate) mount_panel: bool,
    pub(crate) panel_plays: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            die_selector: DIE_SELECTOR_DEFAULT.to_string(),
            play_selector: PLAY_SELECTOR_DEFAULT.to_string(),
            selected_class: SELECTED_CLASS_DEFAULT.to_string(),
            play_id_suffix: PLAY_ID_SUFFIX_DEFAULT.to_string(),
            board: BoardConfig::default(),
            mount_panel: false,
            panel_plays: vec![
                PlayAction::Roll.name().to_string(),
                PlayAction::Hold.name().to_string(),
            ],
        }
    }
}

impl PageConfig {
    pub(crate) fn play_target_id(&self, name: &str) -> String {
        format!("{name}{}", self.play_id_suffix)
    }
}

/// Shape of the optional inline JSON block; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigDoc {
    die_selector: Option<String>,
    play_selector: Option<String>,
    selected_class: Option<String>,
    play_id_suffix: Option<String>,
    throw_order: Option<String>,
    stage: Option<String>,
    mount_panel: Option<bool>,
    panel_plays: Option<Vec<String>>,
}

pub(crate) fn load_page_config() -> PageConfig {
    let mut config = PageConfig::default();
    let Some(window) = web_sys::window() else {
        return config;
    };
    if let Some(document) = window.document() {
        if let Some(raw) = config_block_text(&document) {
            match parse_config_doc(&raw) {
                Ok(doc) => apply_config_doc(&mut config, doc),
                Err(err) => {
                    gloo::console::warn!("yams config: ignoring invalid json", err.to_string());
                }
            }
        }
    }
    if let Ok(search) = window.location().search() {
        apply_query(&mut config, &search);
    }
    config
}

fn config_block_text(document: &Document) -> Option<String> {
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let text = element.text_content()?;
    if text.trim().is_empty() {
        return None;
    }
    Some(text)
}

pub(crate) fn parse_config_doc(raw: &str) -> Result<ConfigDoc, serde_json::Error> {
    serde_json::from_str(raw)
}

pub(crate) fn apply_config_doc(config: &mut PageConfig, doc: ConfigDoc) {
    if let Some(value) = non_empty(doc.die_selector) {
        config.die_selector = value;
    }
    if let Some(value) = non_empty(doc.play_selector) {
        config.play_selector = value;
    }
    if let Some(value) = non_empty(doc.selected_class) {
        config.selected_class = value;
    }
    if let Some(value) = doc.play_id_suffix {
        config.play_id_suffix = value;
    }
    if let Some(value) = doc.throw_order {
        apply_throw_order(config, &value);
    }
    if let Some(value) = doc.stage {
        apply_stage(config, &value);
    }
    if let Some(value) = doc.mount_panel {
        config.mount_panel = value;
    }
    if let Some(plays) = doc.panel_plays {
        config.panel_plays = plays
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
    }
}

/// `?throw_order=index&stage=play` overrides whatever the page embedded.
pub(crate) fn apply_query(config: &mut PageConfig, search: &str) {
    let search = search.trim();
    if search.is_empty() {
        return;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return;
    };
    if let Some(value) = params.get("throw_order") {
        apply_throw_order(config, &value);
    }
    if let Some(value) = params.get("stage") {
        apply_stage(config, &value);
    }
}

fn apply_throw_order(config: &mut PageConfig, value: &str) {
    match value.parse::<ThrowOrder>() {
        Ok(order) => config.board.throw_order = order,
        Err(err) => gloo::console::warn!("yams config:", err.to_string()),
    }
}

fn apply_stage(config: &mut PageConfig, value: &str) {
    if value.trim().is_empty() || value.trim().eq_ignore_ascii_case("none") {
        config.board.stage = None;
        return;
    }
    match value.parse::<Stage>() {
        Ok(stage) => config.board.stage = Some(stage),
        Err(err) => gloo::console::warn!("yams config:", err.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    let value = value?.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
