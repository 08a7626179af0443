//! End-to-end tests for `contains` over the HTML fixtures

use std::fs;
use std::path::PathBuf;

use domseek_core::search::{first_candidate, normalize, TermValue};
use domseek_core::{
    contains, get, get_all, ContainerRef, ContainsOptions, Details, Document, Kind, Node, Outcome, Pattern,
    SearchError, Value,
};

fn fixture(name: &str) -> Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {}", path.display(), e));
    Document::parse(&source)
}

fn node(doc: &Document, selector: &str) -> Node {
    get(doc, selector, None)
        .unwrap()
        .unwrap_or_else(|| panic!("no node for {}", selector))
}

fn found(outcome: Result<Outcome, SearchError>) -> bool {
    outcome.unwrap().is_found()
}

fn test_div() -> Document {
    Document::parse(
        r#"<div id="mondiv" class="moncss maclass">Mon div de test<div id="sousdiv">Le sous-div</div></div><div id="divout"></div>"#,
    )
}

#[test]
fn selector_tokens_with_three_candidates() {
    let doc = fixture("parent.html");
    let parent = node(&doc, "div#parent");
    let none = ContainsOptions::new();

    // Three div.child nodes, the first one is enough
    assert!(found(contains(&doc, &parent, "div.child", &none)));
    assert!(found(contains(&doc, &parent, "span.grand-child", &none)));
    // A leading space keeps the token literal, and that literal is absent
    assert!(!found(contains(&doc, &parent, " span.grand-child", &none)));
    // ...unless the literal text is really there
    assert!(found(contains(&doc, &parent, " span.autre-grand-child", &none)));
}

#[test]
fn container_given_as_selector() {
    let doc = fixture("parent.html");
    assert!(!found(contains(
        &doc,
        "div.child",
        "div.child",
        &ContainsOptions::new()
    )));
}

#[test]
fn missing_container() {
    let doc = test_div();
    let result = contains(
        &doc,
        "bad.contenant",
        Pattern::new("texte").unwrap(),
        &ContainsOptions::new(),
    );
    assert!(matches!(result, Err(SearchError::MissingContainer { .. })));
}

#[test]
fn detailed_aggregation() {
    let doc = test_div();
    let el = node(&doc, "#mondiv");
    let elin = node(&doc, "#sousdiv");
    let elout = node(&doc, "#divout");

    let searched = vec![Value::from("Intrus"), Value::from(&elin), Value::from("Mon")];
    assert_eq!(
        contains(&doc, &el, searched.clone(), &ContainsOptions::new().details(true)).unwrap(),
        Outcome::Detailed(Details {
            found: vec![Value::from(&elin), Value::from("Mon")],
            unfound: vec![Value::from("Intrus")],
        })
    );
    assert_eq!(
        contains(&doc, &el, searched.clone(), &ContainsOptions::new().details(false)).unwrap(),
        Outcome::Found(false)
    );
    assert_eq!(
        contains(&doc, &el, searched, &ContainsOptions::new()).unwrap(),
        Outcome::Found(false)
    );

    let all_found = vec![Value::from("div"), Value::from(&elin), Value::from("Mon")];
    let outcome = contains(&doc, &el, all_found, &ContainsOptions::new().details(true)).unwrap();
    let details = outcome.details().unwrap();
    assert!(details.all());
    assert!(details.one());

    let none_found = vec![Value::from("Intrus"), Value::from(&elout)];
    let outcome = contains(&doc, &el, none_found, &ContainsOptions::new().details(true)).unwrap();
    assert_eq!(
        outcome.details().unwrap(),
        &Details {
            found: vec![],
            unfound: vec![Value::from("Intrus"), Value::from(&elout)],
        }
    );
    assert!(!outcome.details().unwrap().one());
}

#[test]
fn node_anchors_follow_sibling_order() {
    let doc = fixture("lists.html");
    let list1 = node(&doc, "ul#first-list");
    let items = list1.element_children();
    let (deuxieme, troisieme) = (&items[1], &items[2]);

    assert!(found(contains(&doc, &list1, troisieme, &ContainsOptions::new().after(deuxieme))));
    assert!(!found(contains(&doc, &list1, deuxieme, &ContainsOptions::new().after(troisieme))));
    assert!(found(contains(&doc, &list1, deuxieme, &ContainsOptions::new().before(troisieme))));
    assert!(!found(contains(&doc, &list1, troisieme, &ContainsOptions::new().before(deuxieme))));
}

#[test]
fn trap_is_resolved_by_candidate_enumeration() {
    let doc = fixture("lists.html");
    let list2 = node(&doc, "ul#second-list");
    let options = ContainsOptions::new()
        .after(node(&doc, "li#le-deux"))
        .before(node(&doc, "li#le-dernier"));

    assert!(found(contains(&doc, &list2, "li.piege", &options)));

    // The first .piege sits before #le-deux; the second one is chosen
    let term = normalize(&Value::from("li.piege"), &list2, &options).unwrap();
    match term.value() {
        TermValue::Node(first) => assert_eq!(first.text_content(), "Le premier piège"),
        other => panic!("expected a node, got {:?}", other),
    }
    let traps = get_all(&doc, "li.piege", Some(&list2)).unwrap();
    let chosen = first_candidate(&list2, &term, &options).unwrap().unwrap();
    assert_eq!(chosen.value(), &TermValue::Node(traps[1].clone()));
}

#[test]
fn text_anchors_with_a_pattern_term() {
    let doc = fixture("lists.html");
    let list2 = node(&doc, "ul#second-list");
    let options = ContainsOptions::new().after("avant").before("après");

    let pattern = Pattern::with_flags("recherch.", "i").unwrap();
    assert!(found(contains(&doc, &list2, pattern, &options)));
}

#[test]
fn text_window_is_not_the_text_between_anchors() {
    let doc = fixture("lists.html");
    let list2 = node(&doc, "ul#second-list");
    let options = ContainsOptions::new().after("avant").before("après");

    // "assez long" lies well before "avant", yet inside the computed window
    assert!(found(contains(&doc, &list2, "assez long", &options)));
    // "dernier" is in the container but outside the window
    assert!(found(contains(&doc, &list2, "dernier", &ContainsOptions::new())));
    assert!(!found(contains(&doc, &list2, "dernier", &options)));
}

#[test]
fn incompatible_anchors() {
    let doc = test_div();
    let el = node(&doc, "#mondiv");
    let elin = node(&doc, "#sousdiv");

    let error = contains(&doc, &el, &elin, &ContainsOptions::new().after("un string")).unwrap_err();
    assert!(matches!(
        error,
        SearchError::IncompatibleAnchorType {
            term: Kind::Node,
            anchor: Kind::Text
        }
    ));
    assert_eq!(
        error.to_string(),
        "incompatible types in contains: 'Node' and 'Text'"
    );

    let error = contains(&doc, &el, "string", &ContainsOptions::new().after(&elin)).unwrap_err();
    assert!(matches!(
        error,
        SearchError::IncompatibleAnchorType {
            term: Kind::Text,
            anchor: Kind::Node
        }
    ));

    let pattern_anchor = ContainsOptions::new().after(Pattern::with_flags("reg", "i").unwrap());
    assert!(contains(&doc, &el, "string", &pattern_anchor).is_ok());
}

#[test]
fn id_option_narrows_a_selector_token() {
    let doc = fixture("lists.html");
    let list1 = node(&doc, "ul#first-list");

    let narrowed = ContainsOptions::new().id("deuxieme");
    assert!(found(contains(&doc, &list1, "li", &narrowed)));

    let unresolved = ContainsOptions::new().id("absent");
    assert!(!found(contains(&doc, &list1, "li", &unresolved)));
}

#[test]
fn repeated_searches_agree() {
    let doc = fixture("lists.html");
    let options = ContainsOptions::new().details(true);
    let searched = vec![Value::from("Premier"), Value::from("Intrus")];

    let first = contains(&doc, ContainerRef::Root, searched.clone(), &options).unwrap();
    let second = contains(&doc, ContainerRef::Root, searched, &options).unwrap();
    assert_eq!(first, second);
}
