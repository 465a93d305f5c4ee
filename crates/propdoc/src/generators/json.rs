use crate::{error::Result, model::DocOutput};

/// Prefix written before the JSON when rendering as a CommonJS module.
pub const MODULE_PREFIX: &str = "module.exports = ";

/// Options controlling JSON rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOptions {
    /// Indent with two spaces instead of emitting one line.
    pub pretty: bool,
    /// Wrap the JSON as `module.exports = <json>;`.
    pub module: bool,
}

/// JSON representation of the documentation output.
pub fn render_json(output: &DocOutput, options: &JsonOptions) -> Result<String> {
    let json = if options.pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };

    if options.module {
        Ok(format!("{MODULE_PREFIX}{json};"))
    } else {
        Ok(json)
    }
}
