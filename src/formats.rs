//! File-extension to pastebin syntax-format mapping.
//!
//! The service identifies syntax highlighting by its own format tags, which do not always
//! match the file extension (`py` highlights as `python`, `bat` as `dos`). Only extensions
//! with a known tag are mapped; anything else uploads as an untyped paste.

/// Look up the pastebin format identifier for a lowercase file extension (no leading dot).
///
/// Returns `None` for unknown extensions; an untyped paste is valid, so a miss is not an
/// error and the format field is simply omitted from the request.
pub fn format_for_extension(ext: &str) -> Option<&'static str> {
    let format = match ext {
        "ada" => "ada",
        "arm" => "arm",
        "asm" => "asm",
        "asp" => "asp",
        "bash" => "bash",
        "bat" => "dos",
        "bibtex" => "bibtex",
        "c" => "c",
        "cs" => "csharp",
        "cc" | "cpp" | "c++" => "cpp",
        "clj" => "clojure",
        "cmake" => "cmake",
        "css" => "css",
        "d" => "d",
        "dart" => "dart",
        "html" => "html5",
        "java" => "java",
        "js" => "javascript",
        "json" => "json",
        "latex" => "latex",
        "lua" => "lua",
        "m" => "matlab",
        "md" => "markdown",
        "py" => "python",
        _ => return None,
    };
    Some(format)
}
