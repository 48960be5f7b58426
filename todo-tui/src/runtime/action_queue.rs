use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Async work queued by the (synchronous) key handlers. The event loop
/// drains these and awaits each to completion, so a mutation always
/// finishes before the refetch it triggers.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    /// Create or update depending on `App::editing_id`.
    SubmitDraft,
    ToggleComplete { id: i32, completed: bool },
    ConfirmDelete,
    RefreshTodos,
    SubmitLogin,
    SubmitRegister,
    Logout,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
