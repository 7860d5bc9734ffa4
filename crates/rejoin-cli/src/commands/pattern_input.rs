//! Shared pattern loading for CLI commands.

use std::io::Read;
use std::path::Path;

/// Load patterns from positional arguments or a file (`-` for stdin).
///
/// File input is one pattern per line; blank lines are kept, since the
/// empty pattern is a valid input that matches the empty string.
pub fn load_patterns(args: Vec<String>, file: Option<&Path>) -> Result<Vec<String>, String> {
    let Some(path) = file else {
        if args.is_empty() {
            return Err("no patterns given (pass them as arguments or via --file)".into());
        }
        return Ok(args);
    };
    if !args.is_empty() {
        return Err("patterns were given both as arguments and via --file".into());
    }
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?
    };
    Ok(contents.lines().map(str::to_owned).collect())
}
