/// Whatever owns the page scroll (the webview document in the app, a counter
/// in tests).
pub trait ScrollHost {
    fn suspend_scroll(&self);
    fn restore_scroll(&self);
}

/// Holds the page scroll suspended until dropped.
#[derive(Debug)]
pub struct ScrollLock<H: ScrollHost> {
    host: H,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        host.suspend_scroll();
        Self { host }
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.restore_scroll();
    }
}
