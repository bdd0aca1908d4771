pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Load a typed input from `--input <file>` or piped stdin, in that order.
/// Returns `None` when neither source is available so the caller can fall
/// back to individual flags.
pub fn load<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        log::debug!("reading input from {path}");
        return Ok(Some(file::read_input(path)?));
    }
    match stdin::read_stdin()? {
        Some(data) => {
            log::debug!("reading input from stdin");
            Ok(Some(serde_json::from_value(data)?))
        }
        None => Ok(None),
    }
}
