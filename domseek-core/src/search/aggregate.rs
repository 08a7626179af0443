//! Lists of search values

use tracing::debug;

use crate::dom::Node;

use super::compat::check_compatible;
use super::error::SearchError;
use super::kind::Value;
use super::matcher::match_one;
use super::options::ContainsOptions;
use super::outcome::{Details, Outcome};
use super::term::normalize;

/// Match every element of `items` in `container`
///
/// Each element is normalized and checked against the anchors on its own.
/// Without `details` the first miss answers `false`; with it every element
/// is evaluated and sorted into found and unfound, keeping input order.
pub fn match_list(
    container: &Node,
    items: &[Value],
    options: &ContainsOptions,
) -> Result<Outcome, SearchError> {
    let mut details = Details::default();

    for item in items {
        let term = normalize(item, container, options)?;
        check_compatible(term.kind(), options)?;

        if match_one(container, &term, options)? {
            details.found.push(item.clone());
        } else if options.details {
            details.unfound.push(item.clone());
        } else {
            debug!(target: "domseek::search", item = %item, "list element not found");
            return Ok(Outcome::Found(false));
        }
    }

    if options.details {
        Ok(Outcome::Detailed(details))
    } else {
        Ok(Outcome::Found(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::search::Kind;

    fn fixture() -> (Document, Node) {
        let doc = Document::parse(
            r#"<div id="mondiv">Mon div de test<div id="sousdiv">Le sous-div</div></div><div id="divout"></div>"#,
        );
        let container = doc.root().element_children()[0].clone();
        (doc, container)
    }

    #[test]
    fn test_short_circuits_without_details() {
        let (_doc, container) = fixture();
        // The Other element after the miss is never normalized
        let items = vec![
            Value::from("Intrus"),
            Value::Other("Number".to_string()),
        ];
        assert_eq!(
            match_list(&container, &items, &ContainsOptions::new()).unwrap(),
            Outcome::Found(false)
        );
    }

    #[test]
    fn test_details_keep_input_order() {
        let (doc, container) = fixture();
        let inside = container.element_children()[0].clone();
        let outside = doc.root().element_children()[1].clone();
        let items = vec![
            Value::from(outside.clone()),
            Value::from("Mon"),
            Value::from("Intrus"),
            Value::from(inside.clone()),
        ];

        let outcome = match_list(&container, &items, &ContainsOptions::new().details(true)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Detailed(Details {
                found: vec![Value::from("Mon"), Value::from(inside)],
                unfound: vec![Value::from(outside), Value::from("Intrus")],
            })
        );
    }

    #[test]
    fn test_blank_text_element_is_found() {
        let (_doc, container) = fixture();
        let items = vec![Value::from(""), Value::from("Mon")];
        assert_eq!(
            match_list(&container, &items, &ContainsOptions::new()).unwrap(),
            Outcome::Found(true)
        );
    }

    #[test]
    fn test_empty_list() {
        let (_doc, container) = fixture();
        assert_eq!(
            match_list(&container, &[], &ContainsOptions::new()).unwrap(),
            Outcome::Found(true)
        );
    }

    #[test]
    fn test_anchors_are_checked_per_element() {
        let (_doc, container) = fixture();
        let inside = container.element_children()[0].clone();
        let options = ContainsOptions::new().after("Mon");

        let error = match_list(
            &container,
            &[Value::from("div"), Value::from(inside)],
            &options,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            SearchError::IncompatibleAnchorType {
                term: Kind::Node,
                anchor: Kind::Text
            }
        ));
    }

    #[test]
    fn test_nested_lists_are_unsupported() {
        let (_doc, container) = fixture();
        let items = vec![Value::List(vec![Value::from("Mon")])];

        assert!(matches!(
            match_list(&container, &items, &ContainsOptions::new()),
            Err(SearchError::UnsupportedSearchKind(Kind::List))
        ));
    }
}
