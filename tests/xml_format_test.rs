//! Tests for the quick-xml backed MarkupFormat

use rstest::rstest;

use treemark::domain::{MarkupElement, MarkupNode};
use treemark::infrastructure::traits::MarkupFormat;
use treemark::infrastructure::{MarkupError, XmlFormat};

fn format() -> XmlFormat {
    XmlFormat::default()
}

// ============================================================
// Parsing
// ============================================================

#[test]
fn given_nested_document_when_parsing_then_builds_element_records() {
    // Arrange
    let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<items>
    <!-- ignored -->
    <item id="5" color="red">
        <name>Widget</name>
    </item>
    <item/>
</items>
"#;

    // Act
    let root = format().parse(input).unwrap();

    // Assert
    assert_eq!(root.tag_name, "items");
    let items: Vec<_> = root.child_elements().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].attributes["id"], "5");
    assert_eq!(items[0].attributes["color"], "red");
    let name = items[0].child_elements().next().unwrap();
    assert_eq!(name.children, vec![MarkupNode::Text("Widget".to_string())]);
    assert!(items[1].children.is_empty());
}

#[test]
fn given_trim_text_when_parsing_then_whitespace_only_text_is_dropped() {
    let root = format().parse("<a>\n  <b>x</b>\n</a>").unwrap();

    assert_eq!(root.children.len(), 1);
    assert!(!root.children[0].is_text());
}

#[test]
fn given_no_trim_when_parsing_then_whitespace_text_is_kept() {
    let format = XmlFormat {
        trim_text: false,
        ..XmlFormat::default()
    };

    let root = format.parse("<a>\n  <b>x</b>\n</a>").unwrap();

    assert_eq!(root.children.len(), 3);
    assert!(root.children[0].is_text());
}

#[test]
fn given_entities_and_cdata_when_parsing_then_text_is_unescaped() {
    let root = format()
        .parse(r#"<a title="x &amp; y"><b>1 &lt; 2</b><c><![CDATA[<raw>]]></c></a>"#)
        .unwrap();

    assert_eq!(root.attributes["title"], "x & y");
    let children: Vec<_> = root.child_elements().collect();
    assert_eq!(children[0].text_content(), "1 < 2");
    assert_eq!(children[1].text_content(), "<raw>");
}

#[rstest]
#[case::empty("")]
#[case::only_declaration(r#"<?xml version="1.0"?>"#)]
#[case::only_comment("<!-- nothing -->")]
fn given_document_without_elements_when_parsing_then_fails_no_root(#[case] input: &str) {
    let result = format().parse(input);

    assert!(matches!(result, Err(MarkupError::NoRootElement)));
}

#[test]
fn given_nesting_at_limit_when_parsing_then_succeeds() {
    let format = XmlFormat {
        max_depth: 2,
        ..XmlFormat::default()
    };

    let root = format.parse("<a><b><c/></b></a>").unwrap();

    assert_eq!(root.tag_name, "a");
}

#[rstest]
#[case::start_tag("<a><b><c><d></d></c></b></a>")]
#[case::empty_tag("<a><b><c><d/></c></b></a>")]
fn given_nesting_past_limit_when_parsing_then_fails_too_deep(#[case] input: &str) {
    let format = XmlFormat {
        max_depth: 2,
        ..XmlFormat::default()
    };

    let result = format.parse(input);

    assert!(matches!(result, Err(MarkupError::NestingTooDeep { limit: 2 })));
}

#[test]
fn given_unclosed_element_when_parsing_then_fails() {
    let result = format().parse("<a><b></b>");

    assert!(result.is_err());
}

#[test]
fn given_mismatched_end_tag_when_parsing_then_fails() {
    let result = format().parse("<a><b></c></a>");

    assert!(result.is_err());
}

#[rstest]
#[case::second_root("<a/><b/>")]
#[case::trailing_text("<a/>junk")]
fn given_content_after_root_when_parsing_then_fails(#[case] input: &str) {
    let result = format().parse(input);

    assert!(matches!(result, Err(MarkupError::ContentOutsideRoot(_))));
}

// ============================================================
// Serializing
// ============================================================

#[test]
fn given_compact_format_when_serializing_then_writes_single_line() {
    let root = MarkupElement::new("item")
        .with_attribute("id", "5")
        .with_child(MarkupElement::new("color").with_text("red"))
        .with_child(MarkupElement::new("empty"));

    let xml = XmlFormat::compact().serialize(&root).unwrap();

    assert_eq!(xml, r#"<item id="5"><color>red</color><empty/></item>"#);
}

#[test]
fn given_special_characters_when_serializing_then_they_are_escaped() {
    let root = MarkupElement::new("a")
        .with_attribute("q", "\"x\" & <y>")
        .with_text("1 < 2 & 3");

    let xml = XmlFormat::compact().serialize(&root).unwrap();
    let parsed = XmlFormat::compact().parse(&xml).unwrap();

    assert!(!xml.contains("<y>"));
    assert_eq!(parsed, root);
}

#[test]
fn given_declaration_enabled_when_serializing_then_output_starts_with_it() {
    let xml = format().serialize(&MarkupElement::new("root")).unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<root/>"));
}

#[test]
fn given_indented_output_when_parsing_back_then_records_are_equal() {
    let root = MarkupElement::new("library").with_child(
        MarkupElement::new("shelf")
            .with_attribute("room", "east")
            .with_child(
                MarkupElement::new("book")
                    .with_attribute("id", "b1")
                    .with_child(MarkupElement::new("title").with_text("Dune")),
            ),
    );

    let xml = format().serialize(&root).unwrap();
    let parsed = format().parse(&xml).unwrap();

    assert!(xml.contains('\n'));
    assert_eq!(parsed, root);
}

#[test]
fn given_empty_tag_name_when_serializing_then_fails() {
    let result = format().serialize(&MarkupElement::new(""));

    assert!(matches!(result, Err(MarkupError::InvalidName(_))));
}

#[rstest]
#[case::whitespace("two words")]
#[case::angle_bracket("a<b")]
#[case::equals("a=b")]
#[case::slash("a/b")]
#[case::leading_digit("1st")]
#[case::leading_dash("-x")]
#[case::leading_dot(".x")]
fn given_invalid_element_name_when_serializing_then_fails(#[case] name: &str) {
    let root = MarkupElement::new("doc").with_child(MarkupElement::new(name).with_text("v"));

    let result = format().serialize(&root);

    assert!(matches!(result, Err(MarkupError::InvalidName(found)) if found == name));
}

#[test]
fn given_invalid_attribute_name_when_serializing_then_fails() {
    let root = MarkupElement::new("doc").with_attribute("two words", "v");

    let result = format().serialize(&root);

    assert!(matches!(result, Err(MarkupError::InvalidName(_))));
}

#[rstest]
#[case("item")]
#[case("xml:lang")]
#[case("data-2.value_x")]
fn given_valid_name_when_serializing_then_output_parses_back(#[case] name: &str) {
    let root = MarkupElement::new("doc")
        .with_attribute(name, "v")
        .with_child(MarkupElement::new(name).with_text("w"));

    let xml = format().serialize(&root).unwrap();

    assert_eq!(format().parse(&xml).unwrap(), root);
}
