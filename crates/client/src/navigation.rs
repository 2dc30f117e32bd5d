/// Router capability: move the application to a path such as
/// `/hr/dashboard`.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, path: &str) {
        (**self).navigate(path);
    }
}

/// Navigator that only remembers where it was sent. Used by headless
/// callers that act on the destination themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryNavigator {
    history: Vec<String>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, path: &str) {
        tracing::debug!(path, "navigate");
        self.history.push(path.to_string());
    }
}
