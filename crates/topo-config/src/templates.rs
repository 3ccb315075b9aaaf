//! Configuration templates for `topo init`.
//!
//! Templates are kept as valid TOML and handed out fully commented, so a fresh file
//! documents every setting without changing any default.

/// Local configuration template.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the commented local template.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the commented global template.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
