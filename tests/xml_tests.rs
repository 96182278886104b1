use xutil::xml::OptionalAttribute;
use xutil::{parse_xml, Attribute, Result, TypedMap};

#[test]
fn test_empty_element() -> Result<()> {
    let empty = parse_xml("<Test/>")?;
    assert_eq!(empty.name(), "Test");
    assert_eq!(empty.to_string(), "<Test/>");
    assert_eq!(empty.value(), "");
    assert!(empty.attributes().is_empty());
    assert!(empty.children().is_empty());
    assert!(empty.is_empty());
    assert_eq!(
        empty
            .attributes()
            .get_optional(&OptionalAttribute::new("none"))
            .name(),
        "none"
    );
    Ok(())
}

#[test]
fn test_namespace_and_prolog_are_stripped() -> Result<()> {
    let element = parse_xml(concat!(
        "<Test name=\"test\" debug=\"true\" xmlns=\"https://xdruple.xtuple.com/schema/test\">",
        "<Child name=\"not-empty\">Test</Child>",
        "</Test>",
    ))?;
    assert_eq!(
        element.to_string(),
        "<Test name=\"test\" debug=\"true\"><Child name=\"not-empty\">Test</Child></Test>"
    );

    let element = parse_xml(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>",
        "<Test name=\"test\" debug=\"true\" xmlns=\"https://xdruple.xtuple.com/schema/test\">",
        "<Child name=\"not-empty\">Test</Child>",
        "</Test>",
    ))?;
    assert_eq!(
        element.to_string(),
        "<Test name=\"test\" debug=\"true\"><Child name=\"not-empty\">Test</Child></Test>"
    );
    assert_eq!(
        element.select("Child").first().map(|child| child.to_string()),
        Some("<Child name=\"not-empty\">Test</Child>".to_string())
    );
    Ok(())
}

#[test]
fn test_mixed_content_queries() -> Result<()> {
    let element = parse_xml(concat!(
        "<Test name=\"test\" debug=\"true\" xmlns=\"https://xdruple.xtuple.com/schema/test\">",
        "<Child name=\"empty\"></Child>",
        "<Child name=\"not-empty\">Test</Child>",
        "<Element>Element</Element>",
        "Content",
        "</Test>",
    ))?;
    assert_eq!(element.name(), "Test");
    assert_eq!(element.value(), "Content");
    assert_eq!(element.children().len(), 3);
    assert_eq!(element.select("Child").len(), 2);
    assert_eq!(element.select("/Test/Child").len(), 2);
    assert_eq!(
        element
            .select("Child[@name=\"not-empty\"]")
            .first()
            .map(|child| child.value()),
        Some("Test")
    );
    assert_eq!(
        element
            .attributes()
            .get_optional(&OptionalAttribute::new("debug"))
            .value(),
        "true"
    );
    assert_eq!(element.attributes().len(), 2);
    assert!(!element.is_empty());
    Ok(())
}

#[test]
fn test_predicate_single_match() -> Result<()> {
    let element = parse_xml("<Test name=\"test\"><Child name=\"x\"/></Test>")?;
    let matched = element.select("Child[@name=\"x\"]");
    assert_eq!(matched.len(), 1);
    Ok(())
}

#[test]
fn test_boolean_optional_attributes() -> Result<()> {
    let element = parse_xml("<Test upper=\"FALSE\" lower=\"true\"/>")?;
    assert!(element.attributes().bool_optional("absent", true));
    assert!(!element.attributes().bool_optional("upper", true));
    assert!(element.attributes().bool_optional("lower", false));
    Ok(())
}

#[test]
fn test_attribute_over_element_fails() -> Result<()> {
    let element = parse_xml("<Test><Child name=\"x\"><Grandchild/></Child></Test>")?;
    let child = element.select("Child");
    let child = child.first().ok_or_else(|| {
        xutil::Error::with_message(
            xutil::ErrorKind::InvalidArgument,
            xutil::Span::empty(),
            "missing child",
        )
    })?;
    let err = Attribute::from_node(child).expect_err("child is an element");
    assert_eq!(err.message(), "element given where attribute expected");
    Ok(())
}

#[test]
fn test_serialization_struct_forms() {
    use xutil::Node;

    assert_eq!(Node::new("Test").to_string(), "<Test/>");
    assert_eq!(
        Node::new("Test").with_value("Value").to_string(),
        "<Test>Value</Test>"
    );
    assert_eq!(
        Node::new("Test")
            .with_value("Value")
            .with_attributes(TypedMap::keyed([
                Attribute::new("attribute1", "value1"),
                Attribute::new("attribute2", "value2"),
            ]))
            .to_string(),
        "<Test attribute1=\"value1\" attribute2=\"value2\">Value</Test>"
    );
    assert_eq!(
        Node::new("Test")
            .with_value("Value")
            .with_children(vec![
                Node::new("Child").with_value("value1"),
                Node::new("Child").with_value("value2"),
            ])
            .to_string(),
        "<Test><Child>value1</Child><Child>value2</Child>Value</Test>"
    );
}

#[test]
fn test_parse_from_bytes() -> Result<()> {
    let element = xutil::parse_xml_bytes(b"<Test name=\"test\"/>")?;
    assert_eq!(element.name(), "Test");

    let err = xutil::parse_xml_bytes(b"<Test>\xff</Test>").expect_err("invalid utf-8");
    assert_eq!(err.kind(), &xutil::ErrorKind::MalformedMarkup);
    Ok(())
}

#[test]
fn test_roundtrip_idempotence() -> Result<()> {
    let inputs = [
        "<Test/>",
        "<Test name=\"test\"><Child>Value</Child></Test>",
        "<Test a=\"1\" b=\"2\"><Child name=\"x\"/><Child name=\"y\">v</Child>text</Test>",
    ];
    for input in inputs {
        let parsed = parse_xml(input)?;
        assert_eq!(parsed.to_string(), input);
        let reparsed = parse_xml(&parsed.to_string())?;
        assert_eq!(reparsed, parsed);
    }
    Ok(())
}
