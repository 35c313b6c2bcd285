pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value was required but the `Optional` is empty
    #[error("value is absent")]
    Absent,
}
