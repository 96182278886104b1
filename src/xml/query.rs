//! Child selector mini-grammar
//!
//! Three selector shapes, detected by inspection rather than configuration:
//! a bare tag name (`Child`), an absolute path (`/Root/Child`) resolved
//! from the node the query is issued on, and an attribute-equality
//! predicate (`Tag[@attr="value"]`). Resolution never fails; an unmatched
//! or unparseable selector matches nothing.

use crate::xml::model::Node;

/// A parsed child selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Match children by local tag name
    Name(String),
    /// Match by structural path; the first segment names the root element
    Path(Vec<String>),
    /// Match children by tag name and attribute equality
    Predicate {
        name: String,
        attribute: String,
        value: String,
    },
}

impl Selector {
    /// Detects the selector shape. Input that fits no shape becomes a name
    /// selector, which simply matches nothing.
    pub fn parse(input: &str) -> Self {
        if let Some(path) = input.strip_prefix('/') {
            return Self::Path(path.split('/').map(str::to_string).collect());
        }
        if let Some(predicate) = Self::parse_predicate(input) {
            return predicate;
        }
        Self::Name(input.to_string())
    }

    fn parse_predicate(input: &str) -> Option<Self> {
        let (name, rest) = input.split_once("[@")?;
        let condition = rest.strip_suffix(']')?;
        let (attribute, quoted) = condition.split_once('=')?;
        let value = unquote(quoted)?;
        if name.is_empty() || attribute.is_empty() {
            return None;
        }
        Some(Self::Predicate {
            name: name.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
    }

    /// Resolves the selector against `node`, returning matches in document
    /// order
    pub fn apply<'a>(&self, node: &'a Node) -> Vec<&'a Node> {
        match self {
            Self::Name(name) => node
                .children()
                .iter()
                .filter(|child| child.name() == name)
                .collect(),
            Self::Predicate {
                name,
                attribute,
                value,
            } => node
                .children()
                .iter()
                .filter(|child| child.name() == name)
                .filter(|child| {
                    child
                        .attributes()
                        .get(attribute)
                        .is_some_and(|found| found.value() == value)
                })
                .collect(),
            Self::Path(segments) => resolve_path(node, segments),
        }
    }
}

fn resolve_path<'a>(node: &'a Node, segments: &[String]) -> Vec<&'a Node> {
    let Some((first, rest)) = segments.split_first() else {
        return Vec::new();
    };
    if node.name() != first {
        return Vec::new();
    }
    let mut level = vec![node];
    for segment in rest {
        level = level
            .iter()
            .flat_map(|parent| {
                parent
                    .children()
                    .iter()
                    .filter(|child| child.name() == segment)
            })
            .collect();
        if level.is_empty() {
            break;
        }
    }
    level
}

fn unquote(quoted: &str) -> Option<&str> {
    quoted
        .strip_prefix('"')
        .and_then(|value| value.strip_suffix('"'))
        .or_else(|| {
            quoted
                .strip_prefix('\'')
                .and_then(|value| value.strip_suffix('\''))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::new("Test").with_value("Content").with_children(vec![
            Node::new("Child").with_attributes(crate::collection::TypedMap::keyed([
                crate::xml::attribute::Attribute::new("name", "empty"),
            ])),
            Node::new("Child")
                .with_value("Test")
                .with_attributes(crate::collection::TypedMap::keyed([
                    crate::xml::attribute::Attribute::new("name", "not-empty"),
                ])),
            Node::new("Element").with_value("Element"),
        ])
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(Selector::parse("Child"), Selector::Name("Child".to_string()));
        assert_eq!(
            Selector::parse("/Test/Child"),
            Selector::Path(vec!["Test".to_string(), "Child".to_string()])
        );
        assert_eq!(
            Selector::parse("Child[@name=\"x\"]"),
            Selector::Predicate {
                name: "Child".to_string(),
                attribute: "name".to_string(),
                value: "x".to_string(),
            }
        );
        assert_eq!(
            Selector::parse("Child[@name='x']"),
            Selector::Predicate {
                name: "Child".to_string(),
                attribute: "name".to_string(),
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_predicate_matches_nothing() {
        let selector = Selector::parse("Child[@name=x]");
        assert_eq!(selector, Selector::Name("Child[@name=x]".to_string()));
        assert!(selector.apply(&sample()).is_empty());
    }

    #[test]
    fn test_name_selector() {
        let root = sample();
        assert_eq!(root.select("Child").len(), 2);
        assert_eq!(root.select("Element").len(), 1);
        assert!(root.select("Missing").is_empty());
    }

    #[test]
    fn test_path_selector() {
        let root = sample();
        assert_eq!(root.select("/Test/Child").len(), 2);
        assert!(root.select("/Other/Child").is_empty());
        assert!(root.select("/Test/Child/Grandchild").is_empty());
    }

    #[test]
    fn test_predicate_selector() {
        let root = sample();
        let matched = root.select("Child[@name=\"not-empty\"]");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched.first().map(|node| node.value()), Some("Test"));
        assert!(root.select("Child[@name=\"missing\"]").is_empty());
        assert!(root.select("Child[@other=\"not-empty\"]").is_empty());
    }
}
