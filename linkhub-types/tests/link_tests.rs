use chrono::{DateTime, Utc};
use linkhub_types::{Category, Link, LinkPatch, Visibility};
use pretty_assertions::assert_eq;

fn sample_link() -> Link {
    let epoch: DateTime<Utc> = DateTime::UNIX_EPOCH;
    Link {
        id: "link-blog".to_string(),
        title: "Blog".to_string(),
        url: "https://blog.example.com".to_string(),
        icon: "emoji:📝".to_string(),
        category: Category::Docs,
        pinned: true,
        notes: Some("personal blog".to_string()),
        order: Some(20),
        created_at: epoch,
        updated_at: epoch,
        visibility: Visibility::Private,
    }
}

// ── Category ─────────────────────────────────────────────────────

#[test]
fn category_normalize_known_names() {
    for cat in Category::ALL {
        assert_eq!(Category::normalize(cat.as_str()), cat);
    }
}

#[test]
fn category_normalize_unknown_falls_back_to_project() {
    assert_eq!(Category::normalize("Gaming"), Category::Project);
    assert_eq!(Category::normalize(""), Category::Project);
    assert_eq!(Category::normalize("project"), Category::Project);
}

#[test]
fn category_default_is_project() {
    assert_eq!(Category::default(), Category::Project);
}

// ── Visibility ───────────────────────────────────────────────────

#[test]
fn visibility_only_private_is_private() {
    assert_eq!(Visibility::from("private".to_string()), Visibility::Private);
    assert_eq!(Visibility::from("public".to_string()), Visibility::Public);
    assert_eq!(Visibility::from("Private".to_string()), Visibility::Public);
    assert_eq!(Visibility::from("".to_string()), Visibility::Public);
}

// ── Link serde ───────────────────────────────────────────────────

#[test]
fn link_roundtrips_through_json() {
    let link = sample_link();
    let json = serde_json::to_string(&link).unwrap();
    let back: Link = serde_json::from_str(&json).unwrap();
    assert_eq!(link, back);
}

#[test]
fn link_serializes_camel_case() {
    let json = serde_json::to_value(sample_link()).unwrap();
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert_eq!(json["category"], "Docs");
    assert_eq!(json["visibility"], "private");
}

#[test]
fn link_tolerates_minimal_json() {
    let raw = r#"{
        "id": "link-x",
        "title": "X",
        "url": "https://x.example.com",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;
    let link: Link = serde_json::from_str(raw).unwrap();
    assert_eq!(link.icon, Link::DEFAULT_ICON);
    assert_eq!(link.category, Category::Project);
    assert!(!link.pinned);
    assert_eq!(link.notes, None);
    assert_eq!(link.order, None);
    assert_eq!(link.rank(), 0);
    assert_eq!(link.visibility, Visibility::Public);
}

#[test]
fn unknown_category_in_json_normalizes_to_project() {
    let raw = r#"{
        "id": "link-x",
        "title": "X",
        "url": "https://x.example.com",
        "category": "Gaming",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;
    let link: Link = serde_json::from_str(raw).unwrap();
    assert_eq!(link.category, Category::Project);
}

#[test]
fn absent_notes_and_order_are_omitted_when_serialized() {
    let mut link = sample_link();
    link.notes = None;
    link.order = None;
    let json = serde_json::to_value(&link).unwrap();
    assert!(json.get("notes").is_none());
    assert!(json.get("order").is_none());
}

#[test]
fn rank_reads_stored_order() {
    let link = sample_link();
    assert_eq!(link.rank(), 20);
}

// ── LinkPatch ────────────────────────────────────────────────────

#[test]
fn patch_fields_default_to_absent() {
    let patch: LinkPatch = serde_json::from_str("{}").unwrap();
    assert!(patch.title.is_none());
    assert!(patch.url.is_none());
    assert!(patch.order.is_none());
    assert!(patch.pinned.is_none());
}

#[test]
fn patch_parses_partial_body() {
    let patch: LinkPatch = serde_json::from_str(r#"{"pinned": true, "order": 30}"#).unwrap();
    assert_eq!(patch.pinned, Some(true));
    assert_eq!(patch.order, Some(30));
    assert!(patch.title.is_none());
}
