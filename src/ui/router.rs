/// Path the shell opens on.
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Calculate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub screen: Screen,
}

/// Flat route table. Paths match exactly; there are no guards or nesting.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: vec![Route {
                path: ROOT_PATH,
                screen: Screen::Home,
            }],
        }
    }

    pub fn resolve(&self, path: &str) -> Option<Screen> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.screen)
    }

    pub fn initial_screen(&self) -> Screen {
        self.resolve(ROOT_PATH).unwrap_or_default()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
