use client_blockchain_core::ProgramError;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("runtime command channel closed")]
    CommandChannelClosed,

    #[error("runtime reply channel closed")]
    ReplyChannelClosed(#[from] tokio::sync::oneshot::error::RecvError),

    #[error(transparent)]
    Program(#[from] ProgramError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
