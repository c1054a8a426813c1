/// Pending "data changed" notifications.
///
/// Commits call [`SettleQueue::schedule`]; the table's post-render effect
/// calls [`SettleQueue::drain`] and notifies once per ticket. Nothing is
/// delivered from inside the state write itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleQueue {
    pending: usize,
}

impl SettleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self) {
        self.pending += 1;
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn drain(&mut self) -> usize {
        std::mem::take(&mut self.pending)
    }
}
