//! Call site capture
//!
//! Every public severity method is `#[track_caller]`, so the location stored
//! on an emitted entry is the user's call site however many internal layers
//! sit between it and the formatter.

use std::panic::Location;
use std::path::Path;

/// `file:line` with the file reduced to its base name, or `???:0` when no
/// location was captured.
pub fn caller_with_line(caller: Option<&Location<'_>>) -> String {
    match caller {
        Some(location) => {
            let file = Path::new(location.file())
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_else(|| location.file());
            format!("{}:{}", file, location.line())
        }
        None => "???:0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_uses_base_name() {
        let location = Location::caller();
        let line = location.line();
        assert_eq!(caller_with_line(Some(location)), format!("caller.rs:{}", line));
    }

    #[test]
    fn test_missing_caller() {
        assert_eq!(caller_with_line(None), "???:0");
    }
}
