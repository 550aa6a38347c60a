mod registry;
mod safari;
mod scripted;

pub use registry::BrowserRegistry;
pub use safari::{SafariBrowser, SAFARI};
pub use scripted::{ScriptGrammar, ScriptedBrowser, CHROMIUM_GRAMMAR};

/// Escapes a value for use inside an AppleScript string literal.
pub(crate) fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn quote_escapes_backslashes_and_quotes() {
        assert_eq!(quote("Google Chrome"), "\"Google Chrome\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
