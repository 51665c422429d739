//! Key paths address one entity of a collection: `/Categories(42)`.

use super::AggregateId;

/// Build the key path of an entity inside `collection`.
pub fn create_key<Id: AggregateId>(collection: &str, id: &Id) -> String {
    format!("{}({})", collection, id.as_string())
}

/// Remove the collection prefix from an entity path.
///
/// `"/Categories(42)"` yields `Some("(42)")`; paths of other collections
/// yield `None`.
pub fn strip_collection<'a>(collection: &str, path: &'a str) -> Option<&'a str> {
    path.strip_prefix(collection)
}

/// Parse the key out of a key path created by [`create_key`].
pub fn parse_key<Id: AggregateId>(collection: &str, path: &str) -> Option<Id> {
    let rest = strip_collection(collection, path)?;
    let raw = rest.strip_prefix('(')?.strip_suffix(')')?;
    Id::from_string(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::aggregate::CategoryId;

    #[test]
    fn test_create_key() {
        assert_eq!(create_key("/Categories", &CategoryId(42)), "/Categories(42)");
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key::<CategoryId>("/Categories", "/Categories(7)"), Some(CategoryId(7)));
        assert_eq!(parse_key::<CategoryId>("/Categories", "/Categories(x)"), None);
        assert_eq!(parse_key::<CategoryId>("/Categories", "/Products(7)"), None);
        assert_eq!(parse_key::<CategoryId>("/Categories", "/Categories7"), None);
    }

    #[test]
    fn test_strip_collection() {
        assert_eq!(strip_collection("/Categories", "/Categories(3)"), Some("(3)"));
        assert_eq!(strip_collection("/Categories", "/Other(3)"), None);
    }
}
