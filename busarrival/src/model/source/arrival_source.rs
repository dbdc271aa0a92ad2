use crate::model::batch::BatchError;

/// source of raw arrival responses. the batch runner only sees this trait,
/// so tests can drive a full batch without a network.
pub trait ArrivalSource {
    /// fetches the current arrivals for the configured station, returning
    /// the undecoded response body.
    fn fetch(&self) -> Result<String, BatchError>;
}

impl<T: ArrivalSource + ?Sized> ArrivalSource for &T {
    fn fetch(&self) -> Result<String, BatchError> {
        (**self).fetch()
    }
}

impl<T: ArrivalSource + ?Sized> ArrivalSource for Box<T> {
    fn fetch(&self) -> Result<String, BatchError> {
        (**self).fetch()
    }
}
