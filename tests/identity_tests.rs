mod common;

use common::*;
use form_presets::FieldIdentity;
use form_presets::form::field_model::capturable_fields;
use form_presets::form::identity::identify;
use std::collections::HashSet;

fn key_of(doc: &form_presets::Document, id: &str) -> String {
    identify(doc, node(doc, id)).key()
}

#[test]
fn test_display_order_and_quoting() {
    let identity = FieldIdentity {
        name: Some("email".into()),
        id: Some("mail".into()),
        label: Some("E-mail".into()),
        field_type: "email".into(),
        index: None,
    };
    assert_eq!(
        identity.to_string(),
        r#"name="email"id="mail"label="E-mail"type="email""#
    );
}

#[test]
fn test_index_only_identity() {
    let identity = FieldIdentity {
        name: None,
        id: None,
        label: None,
        field_type: "text".into(),
        index: Some(3),
    };
    assert_eq!(identity.key(), r#"type="text"index=3"#);
}

#[test]
fn test_identity_uses_trimmed_label_text() {
    let doc = contact_page(CONTACT_URL, &BLANK);
    assert_eq!(
        key_of(&doc, "fullname"),
        r#"name="fullname"id="fullname"label="Full name"type="text""#
    );
}

#[test]
fn test_identity_ignores_values() {
    let blank = contact_page(CONTACT_URL, &BLANK);
    let filled = contact_page(CONTACT_URL, &FILLED);

    let blank_keys: Vec<String> = capturable_fields(&blank, contact(&blank))
        .into_iter()
        .map(|n| identify(&blank, n).key())
        .collect();
    let filled_keys: Vec<String> = capturable_fields(&filled, contact(&filled))
        .into_iter()
        .map(|n| identify(&filled, n).key())
        .collect();

    assert_eq!(blank_keys, filled_keys);
}

#[test]
fn test_identity_is_deterministic() {
    let doc = contact_page(CONTACT_URL, &FILLED);
    for field in capturable_fields(&doc, contact(&doc)) {
        assert_eq!(identify(&doc, field), identify(&doc, field));
    }
}

#[test]
fn test_anonymous_fields_get_distinct_indexes() {
    let doc = page(
        "u",
        "",
        vec![el(
            "form",
            &[("id", "f")],
            vec![
                input(&[("type", "submit")]),
                input(&[("type", "text")]),
                input(&[("type", "text")]),
                input(&[("type", "text"), ("name", "named")]),
                input(&[("type", "text")]),
            ],
        )],
    );

    let keys: Vec<String> = capturable_fields(&doc, node(&doc, "f"))
        .into_iter()
        .map(|n| identify(&doc, n).key())
        .collect();

    // Buttons take no part in the ranking.
    assert_eq!(
        keys,
        vec![
            r#"type="text"index=0"#,
            r#"type="text"index=1"#,
            r#"name="named"type="text""#,
            r#"type="text"index=3"#,
        ]
    );
    assert_eq!(keys.iter().collect::<HashSet<_>>().len(), keys.len());
}

#[test]
fn test_no_index_outside_a_form() {
    let doc = page("u", "", vec![input(&[("type", "text")])]);
    let field = doc.form_controls(doc.root())[0];
    assert_eq!(identify(&doc, field).index, None);
    assert_eq!(identify(&doc, field).key(), r#"type="text""#);
}

#[test]
fn test_empty_label_is_omitted() {
    let doc = page(
        "u",
        "",
        vec![el(
            "form",
            &[],
            vec![
                el("label", &[("for", "x")], vec![text("   ")]),
                input(&[("id", "x")]),
            ],
        )],
    );
    assert_eq!(key_of(&doc, "x"), r#"id="x"type="text""#);
}

#[test]
fn test_empty_name_and_id_count_as_absent() {
    let doc = page(
        "u",
        "",
        vec![el(
            "form",
            &[("id", "f")],
            vec![input(&[("name", ""), ("id", ""), ("type", "tel")])],
        )],
    );
    let field = doc.form_controls(node(&doc, "f"))[0];
    assert_eq!(identify(&doc, field).key(), r#"type="tel"index=0"#);
}
