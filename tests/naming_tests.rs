mod common;

use chrono::{Local, TimeZone};
use common::*;
use form_presets::form::naming::suggest_name_at;

fn noon() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap()
}

#[test]
fn test_heading_inside_form_wins() {
    let doc = contact_page(CONTACT_URL, &BLANK);
    assert_eq!(suggest_name_at(&doc, contact(&doc), noon(), "Preset"), "Contact us");
}

#[test]
fn test_first_non_empty_heading_in_document_order() {
    let doc = page(
        "u",
        "Title",
        vec![el(
            "form",
            &[("id", "f")],
            vec![
                el("h3", &[], vec![text("  ")]),
                el("h4", &[], vec![text(" Shipping ")]),
                el("h1", &[], vec![text("Billing")]),
            ],
        )],
    );
    assert_eq!(suggest_name_at(&doc, node(&doc, "f"), noon(), "Preset"), "Shipping");
}

#[test]
fn test_parent_heading_used_when_form_has_none() {
    let doc = page(
        "u",
        "Title",
        vec![el(
            "section",
            &[],
            vec![
                el("form", &[("id", "other")], vec![el("h2", &[], vec![text("Other form")])]),
                el("h2", &[], vec![text("Newsletter")]),
                el("form", &[("id", "f")], vec![input(&[("name", "e")])]),
            ],
        )],
    );
    assert_eq!(suggest_name_at(&doc, node(&doc, "f"), noon(), "Preset"), "Newsletter");
}

#[test]
fn test_title_used_without_headings() {
    let doc = page(
        "u",
        "  Sign up  ",
        vec![el("form", &[("id", "f")], vec![])],
    );
    assert_eq!(suggest_name_at(&doc, node(&doc, "f"), noon(), "Preset"), "Sign up");
}

#[test]
fn test_timestamp_fallback() {
    let doc = page("u", "", vec![el("form", &[("id", "f")], vec![])]);
    assert_eq!(
        suggest_name_at(&doc, node(&doc, "f"), noon(), "Preset"),
        "Preset 2026-03-01 12:30:05"
    );
    assert_eq!(
        suggest_name_at(&doc, node(&doc, "f"), noon(), "Form"),
        "Form 2026-03-01 12:30:05"
    );
}
