use std::path::PathBuf;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// File operations queued by key handlers and run after the current input poll.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Open(PathBuf),
    Save,
    SaveAs(PathBuf),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
