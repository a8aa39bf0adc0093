//! Canned response scaffolding shared by the per-service fixture modules.

use serde_json::{json, Value};

/// Derive a human title from a slug: hyphens to spaces, sentence case.
#[must_use]
pub fn titleize_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}

/// Like [`titleize_slug`], but upcases the first letter of every word.
#[must_use]
pub fn titleize_slug_title_case(slug: &str) -> String {
    slug.replace('-', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Singular response envelope: just the status header.
#[must_use]
pub fn response_base() -> Value {
    json!({
        "_response_info": {
            "status": "ok"
        }
    })
}

/// List response envelope with the standard pagination fields.
#[must_use]
pub fn plural_response_base() -> Value {
    json!({
        "_response_info": {
            "status": "ok"
        },
        "description": "Tags!",
        "total": 100,
        "start_index": 1,
        "page_size": 100,
        "current_page": 1,
        "pages": 1,
        "results": []
    })
}
