use std::fmt;
use std::rc::Rc;

use dioxus::prelude::Element;

pub type ModalBody = Rc<dyn Fn() -> Element>;
pub type OnClose = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn max_width_class(self) -> &'static str {
        match self {
            Self::Sm => "modal-sm",
            Self::Md => "modal-md",
            Self::Lg => "modal-lg",
            Self::Xl => "modal-xl",
        }
    }
}

#[derive(Clone)]
pub struct ModalConfig {
    pub title: Option<String>,
    pub content: ModalBody,
    pub size: ModalSize,
    pub show_close_button: bool,
    pub on_close: Option<OnClose>,
}

impl ModalConfig {
    pub fn new(content: impl Fn() -> Element + 'static) -> Self {
        Self {
            title: None,
            content: Rc::new(content),
            size: ModalSize::default(),
            show_close_button: true,
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    pub fn on_close(mut self, on_close: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(on_close));
        self
    }

    pub fn shows_header(&self) -> bool {
        self.title.is_some() || self.show_close_button
    }
}

impl fmt::Debug for ModalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalConfig")
            .field("title", &self.title)
            .field("size", &self.size)
            .field("show_close_button", &self.show_close_button)
            .field("on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

/// The open modal, if any. Open iff a config is held.
#[derive(Clone, Debug, Default)]
pub struct ModalStore {
    config: Option<ModalConfig>,
}

impl ModalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.config.is_some()
    }

    pub fn config(&self) -> Option<&ModalConfig> {
        self.config.as_ref()
    }

    /// Shows `config`, replacing whatever is open without running its
    /// `on_close`.
    pub fn open(&mut self, config: ModalConfig) {
        tracing::debug!(title = ?config.title, replaced = self.is_open(), "modal opened");
        self.config = Some(config);
    }

    pub fn close(&mut self) {
        if let Some(on_close) = self.begin_close() {
            on_close();
        }
    }

    /// Clears the state and hands back the `on_close` hook for the caller to
    /// run once it no longer holds the store.
    ///
    /// The hook therefore runs after the modal is already closed, not before
    /// the transition: inside it `is_open()` is false and opening another
    /// modal sticks.
    pub fn begin_close(&mut self) -> Option<OnClose> {
        let config = self.config.take()?;
        tracing::debug!(title = ?config.title, "modal closed");
        if config.on_close.is_some() {
            tracing::debug!("running modal on_close hook");
        }
        config.on_close
    }
}
