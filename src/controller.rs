use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::dom_view::{self, DomControls, DomSurface};
use crate::page_config::{self, PageConfig};
use crate::yew_app;
use yams_core::{DiceBoard, RollRequest, ThrowSet, ToggleOutcome};

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = RefCell::new(None);
}

/// Page entry: discovers controls, renders once, and wires clicks.
pub(crate) fn run() {
    let config = page_config::load_page_config();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::warn!("yams: no document, controls left unbound");
        return;
    };
    let Some(root) = document.document_element() else {
        gloo::console::warn!("yams: empty document, controls left unbound");
        return;
    };
    let mut controller = Controller::initialize(&document, &root, &config);
    if controller.die_count() == 0 && config.mount_panel {
        gloo::console::log!("yams: no die controls found, mounting dice panel");
        yew_app::mount_panel(&config);
        return;
    }
    controller.bind_events();
    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(controller);
    });
}

pub(crate) struct Controller {
    board: Rc<RefCell<DiceBoard>>,
    surface: Rc<RefCell<DomSurface>>,
    listeners: Vec<EventListener>,
}

impl Controller {
    pub(crate) fn initialize(document: &Document, root: &Element, config: &PageConfig) -> Self {
        let controls = dom_view::discover(document, root, config);
        let board = DiceBoard::new(&controls.descriptor(), config.board.clone());
        gloo::console::log!(
            "yams: controls found",
            board.selectors().len(),
            board.indicators().len()
        );
        let surface = DomSurface::new(controls, config.selected_class.clone());
        let controller = Self {
            board: Rc::new(RefCell::new(board)),
            surface: Rc::new(RefCell::new(surface)),
            listeners: Vec::new(),
        };
        controller.render_all();
        controller
    }

    pub(crate) fn die_count(&self) -> usize {
        self.board.borrow().selectors().len()
    }

    #[cfg(test)]
    pub(crate) fn board(&self) -> Rc<RefCell<DiceBoard>> {
        self.board.clone()
    }

    pub(crate) fn bind_events(&mut self) {
        let controls: DomControls = self.surface.borrow().controls().clone();
        for (index, element) in controls.dice.iter().enumerate() {
            let board = self.board.clone();
            let surface = self.surface.clone();
            let listener = EventListener::new(element, "click", move |_event| {
                toggle_and_render(&board, &surface, index);
            });
            self.listeners.push(listener);
        }
        for play in controls.plays {
            let target = play.target.clone();
            let name = play.name.clone();
            let listener = EventListener::new(&play.source, "click", move |_event| {
                log_roll_request(&name, &dom_view::element_value(&target));
            });
            self.listeners.push(listener);
        }
    }

    pub(crate) fn render_all(&self) {
        render(&self.board, &self.surface);
    }
}

fn toggle_and_render(board: &Rc<RefCell<DiceBoard>>, surface: &Rc<RefCell<DomSurface>>, index: usize) {
    {
        let mut board = board.borrow_mut();
        match board.toggle(index) {
            Ok(outcome) => log_toggle(&outcome, board.throw_set()),
            Err(err) => {
                gloo::console::warn!("yams:", err.to_string());
                return;
            }
        }
    }
    render(board, surface);
}

fn render(board: &Rc<RefCell<DiceBoard>>, surface: &Rc<RefCell<DomSurface>>) {
    let board = board.borrow();
    let mut surface = surface.borrow_mut();
    board.render_all(&mut *surface);
}

pub(crate) fn log_toggle(outcome: &ToggleOutcome, throw_set: &ThrowSet) {
    if outcome.in_throw {
        gloo::console::log!("adding index:", outcome.index);
    } else {
        gloo::console::log!("removing index:", outcome.index);
    }
    gloo::console::log!("to throw:", throw_set.to_string());
}

pub(crate) fn log_roll_request(play: &str, value: &str) {
    match RollRequest::parse(value) {
        Ok(request) => {
            gloo::console::log!("play", play.to_string(), "requests", request.to_string());
        }
        Err(err) => {
            gloo::console::warn!("play", play.to_string(), err.to_string());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(html: &str) -> (Document, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        (document, root)
    }

    fn five_dice(play: &str) -> String {
        let mut html = String::new();
        for value in 1..=5 {
            html.push_str(&format!(
                r#"<button class="die-button" name="die-{value}" value="{value}"></button>"#
            ));
        }
        html.push_str(&format!(
            r#"<input type="submit" class="play-button" name="{play}" id="{play}-button" value="">"#
        ));
        html
    }

    fn click(root: &Element, selector: &str, nth: u32) {
        let element = root
            .query_selector_all(selector)
            .unwrap()
            .item(nth)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        element.click();
    }

    fn play_value(document: &Document, id: &str) -> String {
        dom_view::element_value(&document.get_element_by_id(id).unwrap())
    }

    fn is_selected(root: &Element, nth: u32) -> bool {
        root.query_selector_all(".die-button")
            .unwrap()
            .item(nth)
            .unwrap()
            .dyn_into::<Element>()
            .unwrap()
            .class_list()
            .contains("selected")
    }

    #[wasm_bindgen_test]
    fn initial_render_shows_all_dice() {
        let (document, root) = fixture(&five_dice("roll-a"));
        let controller = Controller::initialize(&document, &root, &PageConfig::default());
        assert_eq!(controller.die_count(), 5);
        assert_eq!(play_value(&document, "roll-a-button"), "[0,1,2,3,4]");
        assert!(!is_selected(&root, 0));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn clicks_hold_and_release_dice() {
        let (document, root) = fixture(&five_dice("roll-b"));
        let mut controller = Controller::initialize(&document, &root, &PageConfig::default());
        controller.bind_events();

        click(&root, ".die-button", 2);
        assert_eq!(play_value(&document, "roll-b-button"), "[0,1,3,4]");
        assert!(is_selected(&root, 2));

        click(&root, ".die-button", 2);
        assert_eq!(play_value(&document, "roll-b-button"), "[0,1,3,4,2]");
        assert!(!is_selected(&root, 2));
        assert_eq!(controller.board().borrow().throw_set().as_slice(), &[0, 1, 3, 4, 2]);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn render_twice_leaves_dom_unchanged() {
        let (document, root) = fixture(&five_dice("roll-c"));
        let mut controller = Controller::initialize(&document, &root, &PageConfig::default());
        controller.bind_events();
        click(&root, ".die-button", 1);
        let before = root.inner_html();
        controller.render_all();
        controller.render_all();
        assert_eq!(root.inner_html(), before);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn empty_page_binds_nothing() {
        let (document, root) = fixture("<p>no dice here</p>");
        let mut controller = Controller::initialize(&document, &root, &PageConfig::default());
        controller.bind_events();
        controller.render_all();
        assert_eq!(controller.die_count(), 0);
        assert!(controller.listeners.is_empty());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn stage_disables_play_buttons() {
        let (document, root) = fixture(&five_dice("new"));
        let mut config = PageConfig::default();
        config.board.stage = Some(yams_core::Stage::Play);
        let _controller = Controller::initialize(&document, &root, &config);
        let input = document
            .get_element_by_id("new-button")
            .unwrap()
            .dyn_into::<web_sys::HtmlInputElement>()
            .unwrap();
        assert!(input.disabled());
        root.remove();
    }
}
