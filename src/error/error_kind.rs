/// Describes an application specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the error on the client side.
    ClientError,
    /// Error caused by a reference to the entity that doesn't exist.
    NotFound,
    /// Error caused by the failure to read from or write to the task storage.
    StorageError,
    /// Unknown error.
    Unknown,
}
