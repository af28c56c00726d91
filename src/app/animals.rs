use std::collections::HashMap;

use form_urlencoded::parse as form_parse;
use serde::Serialize;

use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::status;
use crate::controller::{ActionResult, ControllerRegistry, named_view, named_view_with, view, view_with};

pub const CONTROLLER: &str = "Animals";

const NAME_KEY: &str = "Name";
const AGE_KEY: &str = "Age";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CatViewModel {
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AdoptionViewModel {
    pub name: String,
}

pub fn register(registry: &mut ControllerRegistry) {
    registry.register(CONTROLLER, "Index", index);
    registry.register(CONTROLLER, "Cats", cats);
    registry.register(CONTROLLER, "Dogs", dogs);
    registry.register(CONTROLLER, "Bunnies", bunnies);
    registry.register(CONTROLLER, "Turtles", turtles);
    registry.register(CONTROLLER, "Adopt", adopt);
}

pub fn index(_: &Request) -> ActionResult {
    ActionResult::Redirect(String::from("/Animals/Cats"))
}

/// Shows a cat described by the "Name" and "Age" query parameters.
pub fn cats(request: &Request) -> ActionResult {
    view_with(cat_view_model(request))
}

fn cat_view_model(request: &Request) -> CatViewModel {
    let name = request.query_value(NAME_KEY).unwrap_or("the cats");
    // an unparsable age counts as no age
    let age = request.query_value(AGE_KEY)
        .and_then(|age| age.parse().ok())
        .unwrap_or(0);

    CatViewModel { name: name.to_string(), age }
}

pub fn dogs(_: &Request) -> ActionResult {
    view()
}

pub fn bunnies(_: &Request) -> ActionResult {
    named_view("Rabbits")
}

pub fn turtles(_: &Request) -> ActionResult {
    named_view("Animals/Wild/LotsOfTurtles")
}

/// Takes a form POST with a `name` field and shows the adoption page for it.
pub fn adopt(request: &Request) -> ActionResult {
    if request.method() != Method::POST {
        return ActionResult::Status(status::METHOD_NOT_ALLOWED);
    }

    let form: HashMap<String, String> = form_parse(request.body().as_bytes()).into_owned().collect();

    match form.get("name").map(|name| name.trim()) {
        Some(name) if !name.is_empty() => named_view_with("Adopted", AdoptionViewModel { name: name.to_string() }),
        _ => ActionResult::Status(status::BAD_REQUEST),
    }
}
