/// Session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no user logged in")]
    NotLoggedIn,
}
