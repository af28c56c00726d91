use crate::common::request::Request;
use crate::controller::{ActionResult, ControllerRegistry, DEFAULT_ACTION, DEFAULT_CONTROLLER, view};

pub fn register(registry: &mut ControllerRegistry) {
    registry.register(DEFAULT_CONTROLLER, DEFAULT_ACTION, index);
}

pub fn index(_: &Request) -> ActionResult {
    view()
}
