use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use handlebars::{Handlebars, JsonValue, RenderError};

use crate::controller::registry::Route;

/// File extension of view templates.
const TEMPLATE_EXTENSION: &str = "hbs";

/// The name of the view an action wants rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewName {
    /// The view named after the controller and action, like "Animals/Dogs".
    Implicit,
    /// An explicit view. A bare name lives in the controller's folder ("Rabbits" from the Animals
    /// controller is "Animals/Rabbits"). A name containing '/' is relative to the views root.
    Named(String),
}

impl ViewName {
    /// Resolves the name to a view path relative to the views root, without an extension.
    pub fn resolve(&self, route: &Route) -> String {
        match self {
            ViewName::Implicit => format!("{}/{}", route.controller, route.action),
            ViewName::Named(name) if name.contains('/') => name.trim_start_matches('/').to_string(),
            ViewName::Named(name) => format!("{}/{}", route.controller, name),
        }
    }
}

#[derive(Debug)]
pub enum ViewError {
    /// No template exists for the view.
    NotFound(PathBuf),
    /// The template exists but couldn't be read.
    FileError(std::io::Error),
    /// Handlebars failed on the template.
    TemplateError(RenderError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::NotFound(path) => write!(f, "no template at {}", path.display()),
            ViewError::FileError(err) => write!(f, "could not read template: {}", err),
            ViewError::TemplateError(err) => write!(f, "could not render template: {}", err),
        }
    }
}

impl Error for ViewError {}

/// Renders views from handlebars templates stored under a root directory.
pub struct ViewEngine {
    root: PathBuf,
    handlebars: Handlebars<'static>,
}

impl ViewEngine {
    /// Creates an engine reading templates from the given directory.
    pub fn new(root: impl Into<PathBuf>) -> ViewEngine {
        ViewEngine { root: root.into(), handlebars: Handlebars::new() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Gets the template file for a resolved view, e.g. "Animals/Cats" is "<root>/Animals/Cats.hbs".
    pub fn template_path(&self, view: &str) -> PathBuf {
        self.root.join(format!("{}.{}", view, TEMPLATE_EXTENSION))
    }

    /// Renders the resolved view with the given model.
    pub fn render(&self, view: &str, model: &JsonValue) -> Result<String, ViewError> {
        let path = self.template_path(view);

        let source = fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ViewError::NotFound(path.clone()),
            _ => ViewError::FileError(err),
        })?;

        self.handlebars.render_template(&source, model)
            .map_err(ViewError::TemplateError)
    }
}
