//! Resource bundle: UI texts by key, with `{0}`-style placeholders.

const TEXTS_EN: &[(&str, &str)] = &[
    ("appTitle", "Categories"),
    ("worklistTitle", "Categories"),
    ("worklistTableTitle", "Categories"),
    ("worklistTableTitleCount", "Categories ({0})"),
    ("tableNoDataText", "No categories are currently available"),
    ("worklistNoDataWithSearchText", "No matching categories found"),
    ("shareSendEmailWorklistSubject", "Categories"),
    ("shareSendEmailWorklistMessage", "Category list\n{0}"),
    ("shareSendEmailObjectSubject", "Category {0}"),
    ("shareSendEmailObjectMessage", "Category: {0} (ID {1})\n{2}"),
    ("shareSendEmail", "Send by email"),
    ("objectTitle", "Category"),
    ("labelId", "ID"),
    ("labelName", "Name"),
    ("btnSearch", "Search"),
    ("btnRefresh", "Refresh"),
    ("btnNew", "New"),
    ("btnBack", "Back"),
    ("btnCreate", "Create"),
    ("btnEdit", "Edit"),
    ("btnSave", "Save"),
    ("btnDelete", "Delete"),
    ("btnOk", "OK"),
    ("btnCancel", "Cancel"),
    ("valueHelpTitle", "Select a name"),
    ("valueHelpSearch", "Search names"),
    ("valueHelpNoData", "No names found"),
    ("loading", "Loading..."),
    ("notFoundTitle", "Not Found"),
    ("objectNotFoundText", "This category is not available"),
    ("backToWorklist", "Show categories"),
    ("msgSuc", "Operation completed successfully"),
    ("msgError", "The operation failed"),
    ("msgOb", "ID is required and must be a positive integer"),
    ("messageSuccessTitle", "Success"),
    ("messageErrorTitle", "Error"),
];

#[derive(Clone, Copy, Debug)]
pub struct ResourceBundle {
    texts: &'static [(&'static str, &'static str)],
}

impl Default for ResourceBundle {
    fn default() -> Self {
        Self { texts: TEXTS_EN }
    }
}

impl ResourceBundle {
    /// Text for `key` with `{n}` replaced by `args[n]`.
    ///
    /// Unknown keys come back unchanged so a missing text is visible in the UI.
    pub fn get_text(&self, key: &str, args: &[&str]) -> String {
        let template = match self.texts.iter().find(|(k, _)| *k == key) {
            Some((_, text)) => *text,
            None => {
                log::warn!("i18n: missing text for key '{}'", key);
                return key.to_string();
            }
        };
        fill_placeholders(template, args)
    }

    /// Shorthand for texts without placeholders
    pub fn text(&self, key: &str) -> String {
        self.get_text(key, &[])
    }
}

/// One left-to-right pass over `template`; inserted arguments are never
/// scanned again. Placeholders without a matching argument stay as they are.
fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            args.get(index).map(|arg| (close, *arg))
        });
        match arg {
            Some((close, arg)) => {
                text.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                text.push('{');
                rest = after;
            }
        }
    }
    text.push_str(rest);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution() {
        let bundle = ResourceBundle::default();
        assert_eq!(
            bundle.get_text("worklistTableTitleCount", &["8"]),
            "Categories (8)"
        );
        assert_eq!(
            bundle.get_text("shareSendEmailObjectMessage", &["Dairy", "4", "http://x"]),
            "Category: Dairy (ID 4)\nhttp://x"
        );
    }

    #[test]
    fn test_argument_with_placeholder_is_kept_verbatim() {
        let bundle = ResourceBundle::default();
        assert_eq!(
            bundle.get_text("shareSendEmailObjectMessage", &["Promo {1}", "4", "http://x"]),
            "Category: Promo {1} (ID 4)\nhttp://x"
        );
        assert_eq!(
            bundle.get_text("shareSendEmailObjectSubject", &["{0}"]),
            "Category {0}"
        );
    }

    #[test]
    fn test_unmatched_braces_stay() {
        assert_eq!(fill_placeholders("a {x} {5} {", &["A"]), "a {x} {5} {");
        assert_eq!(fill_placeholders("{0}{0}", &["ab"]), "abab");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(ResourceBundle::default().text("nope"), "nope");
    }
}
