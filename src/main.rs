mod boot;
mod controller;
mod dom_view;
mod page_config;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    boot::run_when_loaded(controller::run);
}
