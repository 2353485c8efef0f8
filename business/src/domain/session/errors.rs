#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.callback_incomplete")]
    CallbackIncomplete,
}
