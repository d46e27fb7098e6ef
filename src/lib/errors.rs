use failure::Fail;

/// The Error enum containing all Errors that may occur when running setversion
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Fail)]
pub enum Error {
    #[fail(display = "Failed to read/write the file! Error: {}", _0)]
    File(String),
    #[fail(display = "Failed to read the version from input! Error: {}", _0)]
    Input(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::File(e.to_string())
    }
}
