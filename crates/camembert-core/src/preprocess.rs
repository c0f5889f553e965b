//! Directive extraction.
//!
//! `%%{init: { ... }}%%` directives carry per-diagram config overrides. They
//! are collected and removed from the text before the grammar parser runs, so
//! the parser only ever sees plain statements.

use crate::config::PieConfigOverrides;
use crate::{Error, Result};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct PreprocessResult {
    /// Input with all `%%{...}%%` spans removed.
    pub code: String,
    /// Merged overrides from every `init` directive, in document order.
    pub overrides: PieConfigOverrides,
}

pub fn preprocess(text: &str) -> Result<PreprocessResult> {
    let mut code = String::with_capacity(text.len());
    let mut overrides = PieConfigOverrides::default();

    let mut rest = text;
    while let Some(open) = rest.find("%%{") {
        code.push_str(&rest[..open]);
        let body_start = open + "%%{".len();
        let Some(close) = rest[body_start..].find("}%%") else {
            // Unterminated directive: everything from the opener on is dropped,
            // matching the "remove directives" pass of the surrounding framework.
            return Ok(PreprocessResult { code, overrides });
        };
        let body = &rest[body_start..body_start + close];
        apply_directive(body, &mut overrides)?;
        rest = &rest[body_start + close + "}%%".len()..];
    }
    code.push_str(rest);

    Ok(PreprocessResult { code, overrides })
}

/// Parses one directive body of the form `type` or `type: <JSON>` and folds
/// recognized payloads into `overrides`. Unknown directive types are ignored.
fn apply_directive(body: &str, overrides: &mut PieConfigOverrides) -> Result<()> {
    let body = body.trim();
    let (ty, args) = match body.split_once(':') {
        Some((ty, args)) => (ty.trim(), args.trim()),
        None => (body, ""),
    };
    if !matches!(ty, "init" | "initialize") || args.is_empty() {
        return Ok(());
    }

    let payload: Value =
        serde_json::from_str(args).map_err(|e| Error::InvalidDirectiveJson {
            message: e.to_string(),
        })?;

    // Theme variables apply first so diagram-specific `pie` values win.
    for key in ["themeVariables", "pie"] {
        if let Some(section) = payload.get(key) {
            let layer: PieConfigOverrides = serde_json::from_value(section.clone())
                .map_err(|e| Error::InvalidDirectiveJson {
                    message: e.to_string(),
                })?;
            overrides.merge(layer);
        }
    }
    Ok(())
}
