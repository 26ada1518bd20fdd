use log::debug;
use regex::{Captures, NoExpand, Regex};

use crate::{
    constants::{PG_PASSWORD_TOKEN, RELEASE_TOKEN},
    error::Result,
};

/// Matches the metadata `name` line of the sample CR. Exactly two spaces
/// of indentation; differently-indented documents pass through unchanged.
const NAME_LINE: &str = r"(?m)^  name: .*$";

/// Matches the metadata `namespace` line of the sample CR.
const NAMESPACE_LINE: &str = r"(?m)^  namespace: .*$";

/// Matches any `storageClass` line, keeping the indented key as a capture.
const STORAGE_CLASS_LINE: &str = r"(?m)^(\s*storageClass:).*$";

/// Runtime values injected into the sample CR document.
#[derive(Debug, Clone)]
pub struct RenderValues {
    pub release: String,
    pub namespace: String,
    pub pg_password: String,
    pub storage_class: Option<String>,
}

impl RenderValues {
    fn storage_class_override(&self) -> Option<&str> {
        self.storage_class.as_deref().filter(|class| !class.is_empty())
    }
}

/// Applies the substitution pipeline to the sample CR text.
///
/// Substitution order is fixed: metadata `name` line, metadata `namespace`
/// line, release token, password token, then the optional storageClass
/// override. Each step operates on the result of the previous one, so
/// reordering could corrupt earlier replacements.
///
/// Only the first `name`/`namespace` line is replaced; the placeholder
/// tokens are replaced everywhere they occur. Values are injected verbatim
/// with no escaping, and a step that matches nothing is a silent no-op.
pub fn render(document: &str, values: &RenderValues) -> Result<String> {
    let name_line = format!("  name: {}", values.release);
    let rendered = Regex::new(NAME_LINE)?.replace(document, NoExpand(&name_line));

    let namespace_line = format!("  namespace: {}", values.namespace);
    let rendered = Regex::new(NAMESPACE_LINE)?.replace(&rendered, NoExpand(&namespace_line));

    let rendered = rendered
        .replace(RELEASE_TOKEN, &values.release)
        .replace(PG_PASSWORD_TOKEN, &values.pg_password);

    let rendered = match values.storage_class_override() {
        Some(class) => {
            debug!("overriding storageClass with '{class}'");
            Regex::new(STORAGE_CLASS_LINE)?
                .replace_all(&rendered, |caps: &Captures| format!("{} {class}", &caps[1]))
                .into_owned()
        }
        None => rendered,
    };

    Ok(rendered)
}
