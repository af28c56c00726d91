use handlebars::{to_json, JsonValue};
use log::error;
use serde::Serialize;

use crate::common::response::Response;
use crate::common::status;
use crate::common::status::Status;
use crate::controller::registry::Route;
use crate::controller::view_engine::{ViewEngine, ViewError, ViewName};

/// What an action produced for a request.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// Render a view, optionally with a model.
    View { name: ViewName, model: Option<JsonValue> },
    /// Send the client somewhere else.
    Redirect(String),
    /// Respond with a bare status.
    Status(Status),
}

/// The view named after the action.
pub fn view() -> ActionResult {
    ActionResult::View { name: ViewName::Implicit, model: None }
}

/// The view named after the action, rendered with the given model.
pub fn view_with(model: impl Serialize) -> ActionResult {
    ActionResult::View { name: ViewName::Implicit, model: Some(to_json(model)) }
}

/// A view with an explicit name. See [`ViewName::Named`] for how names resolve.
pub fn named_view(name: &str) -> ActionResult {
    ActionResult::View { name: ViewName::Named(name.to_string()), model: None }
}

/// An explicitly named view rendered with the given model.
pub fn named_view_with(name: &str, model: impl Serialize) -> ActionResult {
    ActionResult::View { name: ViewName::Named(name.to_string()), model: Some(to_json(model)) }
}

impl ActionResult {
    /// Turns the result into a response. Views are resolved against the route that produced them.
    pub fn into_response(self, route: &Route, views: &ViewEngine) -> Response {
        match self {
            ActionResult::View { name, model } => {
                let view = name.resolve(route);
                match views.render(&view, &model.unwrap_or(JsonValue::Null)) {
                    Ok(html) => Response::html(html),
                    Err(ViewError::NotFound(path)) => {
                        error!("View '{}' not found at {}", view, path.display());
                        status::NOT_FOUND.into()
                    }
                    Err(err) => {
                        error!("Could not render view '{}': {}", view, err);
                        status::INTERNAL_SERVER_ERROR.into()
                    }
                }
            }
            ActionResult::Redirect(location) => Response::redirect(&location),
            ActionResult::Status(status) => status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use handlebars::JsonValue;
    use serde::Serialize;

    use crate::common::status;
    use crate::controller::action::{ActionResult, named_view, view, view_with};
    use crate::controller::registry::Route;
    use crate::controller::view_engine::{ViewEngine, ViewName};

    #[derive(Serialize)]
    struct Model {
        name: &'static str,
    }

    fn route() -> Route {
        Route { controller: String::from("Animals"), action: String::from("Cats") }
    }

    fn missing_views() -> ViewEngine {
        ViewEngine::new("./no/such/views/dir")
    }

    #[test]
    fn view_with_serializes_model() {
        match view_with(Model { name: "Tom" }) {
            ActionResult::View { name, model } => {
                assert_eq!(name, ViewName::Implicit);
                assert_eq!(model.unwrap()["name"], JsonValue::from("Tom"));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn named_view_keeps_name() {
        assert_eq!(named_view("Rabbits"), ActionResult::View { name: ViewName::Named(String::from("Rabbits")), model: None });
    }

    #[test]
    fn redirect_response() {
        let response = ActionResult::Redirect(String::from("/Animals/Cats")).into_response(&route(), &missing_views());
        assert_eq!(response.status, status::FOUND);
        assert_eq!(response.headers.get("Location").unwrap(), "/Animals/Cats");
    }

    #[test]
    fn status_response() {
        let response = ActionResult::Status(status::BAD_REQUEST).into_response(&route(), &missing_views());
        assert_eq!(response.status, status::BAD_REQUEST);
    }

    #[test]
    fn missing_view_is_not_found() {
        let response = view().into_response(&route(), &missing_views());
        assert_eq!(response.status, status::NOT_FOUND);
    }
}
