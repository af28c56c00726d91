use std::collections::HashMap;

use log::debug;

use crate::common::request::Request;
use crate::controller::action::ActionResult;

/// Controller used when the path names none.
pub const DEFAULT_CONTROLLER: &str = "Home";
/// Action used when the path names a controller but no action.
pub const DEFAULT_ACTION: &str = "Index";

/// An action: produces a result for a request.
pub type Action = Box<dyn Fn(&Request) -> ActionResult + 'static + Send + Sync>;

/// A controller and action pair, with the names spelled as they were registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub controller: String,
    pub action: String,
}

/// The route a request resolved to and what its action produced.
#[derive(Debug)]
pub struct Dispatched {
    pub route: Route,
    pub result: ActionResult,
}

/// Maps controller and action names to actions. Filled once at startup, then only read.
#[derive(Default)]
pub struct ControllerRegistry {
    /// Keyed by lowercased (controller, action).
    actions: HashMap<(String, String), (Route, Action)>,
}

impl ControllerRegistry {
    /// Creates a new empty registry.
    pub fn new() -> ControllerRegistry {
        ControllerRegistry::default()
    }

    /// Registers an action under the given controller. Names are matched without regard to case,
    /// and registering the same pair again replaces the earlier action.
    /// ```
    /// use mywebserver::controller::{ControllerRegistry, view};
    ///
    /// let mut registry = ControllerRegistry::new();
    /// registry.register("Animals", "Dogs", |_| view());
    /// assert!(registry.resolve("/animals/dogs").is_some());
    /// ```
    pub fn register(&mut self, controller: &str, action: &str,
                    handler: impl Fn(&Request) -> ActionResult + 'static + Send + Sync) {
        let route = Route { controller: controller.to_string(), action: action.to_string() };
        self.actions.insert(key(controller, action), (route, Box::new(handler)));
    }

    /// Gets the registered route for a path of the form "/", "/Controller" or "/Controller/Action".
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let (controller, action) = split_path(path)?;
        self.actions.get(&key(controller, action)).map(|(route, _)| route)
    }

    /// Resolves the request's path and runs the matching action. None when no action matches.
    pub fn dispatch(&self, request: &Request) -> Option<Dispatched> {
        let (controller, action) = split_path(request.path())?;
        let (route, handler) = self.actions.get(&key(controller, action))?;

        debug!("{} {} -> {}::{}", request.method(), request.path(), route.controller, route.action);

        Some(Dispatched { route: route.clone(), result: handler(request) })
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn key(controller: &str, action: &str) -> (String, String) {
    (controller.to_ascii_lowercase(), action.to_ascii_lowercase())
}

/// Splits a path into controller and action names, filling in the defaults.
/// Paths with more than two segments name no action.
fn split_path(path: &str) -> Option<(&str, &str)> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());

    let controller = segments.next().unwrap_or(DEFAULT_CONTROLLER);
    let action = segments.next().unwrap_or(DEFAULT_ACTION);

    match segments.next() {
        Some(_) => None,
        None => Some((controller, action)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::common::status;
    use crate::controller::action::{ActionResult, view};
    use crate::controller::registry::{ControllerRegistry, Route, split_path};
    use crate::parse::parse_request;

    fn route(controller: &str, action: &str) -> Route {
        Route { controller: controller.to_string(), action: action.to_string() }
    }

    fn registry() -> ControllerRegistry {
        let mut registry = ControllerRegistry::new();
        registry.register("Home", "Index", |_| view());
        registry.register("Animals", "Index", |_| ActionResult::Redirect(String::from("/Animals/Cats")));
        registry.register("Animals", "Cats", |request| {
            match request.query_value("Name") {
                Some(_) => view(),
                None => ActionResult::Status(status::BAD_REQUEST),
            }
        });
        registry
    }

    #[test]
    fn split_paths() {
        assert_eq!(split_path("/"), Some(("Home", "Index")));
        assert_eq!(split_path(""), Some(("Home", "Index")));
        assert_eq!(split_path("/Animals"), Some(("Animals", "Index")));
        assert_eq!(split_path("/Animals/"), Some(("Animals", "Index")));
        assert_eq!(split_path("/Animals/Cats"), Some(("Animals", "Cats")));
        assert_eq!(split_path("/Animals/Cats/1"), None);
    }

    #[test]
    fn resolve_defaults() {
        let registry = registry();
        assert_eq!(registry.resolve("/"), Some(&route("Home", "Index")));
        assert_eq!(registry.resolve("/Animals"), Some(&route("Animals", "Index")));
    }

    #[test]
    fn resolve_ignores_case_and_keeps_registered_names() {
        assert_eq!(registry().resolve("/aNiMaLs/CATS"), Some(&route("Animals", "Cats")));
    }

    #[test]
    fn resolve_unknown() {
        let registry = registry();
        assert_eq!(registry.resolve("/Animals/Dogs"), None);
        assert_eq!(registry.resolve("/Plants"), None);
        assert_eq!(registry.resolve("/Animals/Cats/extra"), None);
    }

    #[test]
    fn dispatch_runs_action_with_request() {
        let registry = registry();

        let request = parse_request("GET /Animals/Cats?Name=Tom HTTP/1.1\r\n\r\n").unwrap();
        let dispatched = registry.dispatch(&request).unwrap();
        assert_eq!(dispatched.route, route("Animals", "Cats"));
        assert_eq!(dispatched.result, view());

        let request = parse_request("GET /Animals/Cats HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(registry.dispatch(&request).unwrap().result, ActionResult::Status(status::BAD_REQUEST));
    }

    #[test]
    fn dispatch_unknown() {
        let request = parse_request("GET /nowhere/at/all HTTP/1.1\r\n\r\n").unwrap();
        assert!(registry().dispatch(&request).is_none());
    }

    #[test]
    fn register_replaces() {
        let calls = Arc::new(Mutex::new(vec![]));
        let mut registry = ControllerRegistry::new();

        let first = Arc::clone(&calls);
        registry.register("Home", "Index", move |_| {
            first.lock().unwrap().push("first");
            view()
        });
        let second = Arc::clone(&calls);
        registry.register("home", "index", move |_| {
            second.lock().unwrap().push("second");
            view()
        });

        let request = parse_request("GET / HTTP/1.1\r\n\r\n").unwrap();
        registry.dispatch(&request).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(*calls.lock().unwrap(), vec!["second"]);
        assert_eq!(registry.resolve("/").unwrap(), &route("home", "index"));
    }
}
