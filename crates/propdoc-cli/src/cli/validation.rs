/// Parse and normalize a file extension given on the command line.
///
/// A leading dot is accepted and dropped, so `.jsx` and `jsx` are the same
/// extension. Extensions may contain inner dots (`d.ts`) but never path
/// separators or whitespace.
///
/// # Examples
///
/// Valid: `js`, `.jsx`, `d.ts`
/// Invalid: `""`, `.`, `src/js`, `j s`
pub fn parse_extension(s: &str) -> Result<String, String> {
    let extension = s.trim().trim_start_matches('.');

    if extension.is_empty() {
        return Err(format!("Extension cannot be empty: '{}'", s));
    }

    if extension
        .chars()
        .any(|c| c == '/' || c == '\\' || c.is_whitespace())
    {
        return Err(format!(
            "Extension cannot contain path separators or whitespace: '{}'",
            s
        ));
    }

    Ok(extension.to_string())
}

/// Parse the separator used when rewriting path keys.
pub fn parse_separator(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Separator cannot be empty".to_string());
    }

    Ok(s.to_string())
}
