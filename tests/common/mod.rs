#![allow(dead_code)]

use form_presets::dom::snapshot::PageSnapshot;
use form_presets::{Document, NodeId};
use serde_json::{Map, Value, json};

// ============================================================================
// Snapshot builders
// ============================================================================

pub fn el(tag: &str, attrs: &[(&str, &str)], children: Vec<Value>) -> Value {
    let attrs: Map<String, Value> = attrs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    json!({ "tag": tag, "attrs": attrs, "children": children })
}

pub fn text(s: &str) -> Value {
    json!({ "text": s })
}

pub fn input(attrs: &[(&str, &str)]) -> Value {
    el("input", attrs, vec![])
}

pub fn option(value: &str, label: &str, selected: bool) -> Value {
    if selected {
        el("option", &[("value", value), ("selected", "")], vec![text(label)])
    } else {
        el("option", &[("value", value)], vec![text(label)])
    }
}

pub fn page(url: &str, title: &str, body: Vec<Value>) -> Document {
    let snapshot: PageSnapshot = serde_json::from_value(json!({
        "url": url,
        "title": title,
        "root": el("body", &[], body),
    }))
    .expect("valid snapshot");
    Document::from_snapshot(&snapshot).expect("document")
}

pub fn node(doc: &Document, id: &str) -> NodeId {
    doc.by_id(id)
        .unwrap_or_else(|| panic!("no element with id {id}"))
}

// ============================================================================
// Contact form fixture: one field of every supported kind
// ============================================================================

pub const CONTACT_URL: &str = "https://example.com/contact";

/// Values of the filled-in variant of the contact form.
pub struct ContactValues<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub subscribe: bool,
    pub plan_pro: bool,
    pub country: Option<&'a str>,
    pub topics: &'a [&'a str],
    pub nickname: &'a str,
}

pub const FILLED: ContactValues<'static> = ContactValues {
    full_name: "Ada Lovelace",
    email: "ada@example.com",
    message: "Hello there",
    subscribe: true,
    plan_pro: true,
    country: Some("de"),
    topics: &["news", "jobs"],
    nickname: "ada",
};

pub const BLANK: ContactValues<'static> = ContactValues {
    full_name: "",
    email: "",
    message: "",
    subscribe: false,
    plan_pro: false,
    country: None,
    topics: &[],
    nickname: "",
};

pub fn contact_form(v: &ContactValues) -> Value {
    let flag = |on: bool| if on { Some(("checked", "")) } else { None };

    let mut subscribe = vec![("type", "checkbox"), ("name", "subscribe"), ("id", "subscribe")];
    subscribe.extend(flag(v.subscribe));
    let mut pro = vec![("type", "radio"), ("name", "plan"), ("id", "plan-pro"), ("value", "pro")];
    pro.extend(flag(v.plan_pro));

    let message = if v.message.is_empty() { vec![] } else { vec![text(v.message)] };

    el(
        "form",
        &[("id", "contact")],
        vec![
            el("h2", &[], vec![text("Contact us")]),
            el("label", &[("for", "fullname")], vec![text(" Full name ")]),
            input(&[("type", "text"), ("name", "fullname"), ("id", "fullname"), ("value", v.full_name)]),
            input(&[("type", "email"), ("name", "email"), ("value", v.email)]),
            el("textarea", &[("name", "message"), ("id", "message")], message),
            input(&subscribe),
            input(&[("type", "radio"), ("name", "plan"), ("id", "plan-basic"), ("value", "basic")]),
            input(&pro),
            el(
                "select",
                &[("name", "country"), ("id", "country")],
                vec![
                    option("", "Choose a country", false),
                    option("us", "United States", v.country == Some("us")),
                    option("de", "Germany", v.country == Some("de")),
                ],
            ),
            el(
                "select",
                &[("name", "topics"), ("id", "topics"), ("multiple", "")],
                vec![
                    option("news", "News", v.topics.contains(&"news")),
                    option("events", "Events", v.topics.contains(&"events")),
                    option("jobs", "Jobs", v.topics.contains(&"jobs")),
                ],
            ),
            input(&[("type", "text"), ("value", v.nickname)]),
            input(&[("type", "submit"), ("value", "Send")]),
            input(&[("type", "reset")]),
        ],
    )
}

pub fn contact_page(url: &str, v: &ContactValues) -> Document {
    page(url, "Contact - Example", vec![contact_form(v)])
}

pub fn contact(doc: &Document) -> NodeId {
    node(doc, "contact")
}
