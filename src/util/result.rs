use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the [`Ok`] value, panicking with the error's own message otherwise. The panicking
    /// form of every faulting operation is implemented by calling this on its `try_` sibling, so
    /// both forms stay in agreement about what counts as a fault.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
