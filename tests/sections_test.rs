mod support;

use crate::support::{tracing_init, Call, FakeSource};
use mymanga_admin::api::{decode_data, CollectionSource, Record};
use mymanga_admin::filter::{ListingQuery, PageController};
use mymanga_admin::sections::{Layout, Section};
use serde_json::{json, Value};

/// A record carrying the fields any section needs, plus a few optional ones
fn sample(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("Record {id}"),
        "content": "Great chapter, thanks for the translation!",
        "manga_name": "Naruto",
        "chapter_name": "Chapter 700",
        "user_name": "reader42",
        "reason": "Missing pages",
        "status": "pending",
        "created_at": "2024-05-01",
    })
}

#[tokio::test]
async fn test_every_section_renders_one_cell_per_column() {
    tracing_init();

    for section in Section::ALL {
        let source =
            FakeSource::new().with_records(section.endpoint(), vec![sample(1), sample(2)]);
        let query = ListingQuery::new(&section.default_filters(), 20);

        let page = section
            .fetch_rows(&source, &query)
            .await
            .unwrap_or_else(|e| panic!("{} failed to decode: {}", section, e));

        assert_eq!(page.total, 2, "{}", section);
        for row in &page.items {
            assert_eq!(
                row.cells.len(),
                section.columns().len(),
                "{} row {} has the wrong number of cells",
                section,
                row.id
            );
        }
    }
}

#[tokio::test]
async fn test_each_section_lists_its_own_endpoint() {
    let source = FakeSource::new().with_records("chapter-reports", vec![sample(5)]);
    let query = ListingQuery::new(&Section::ChapterReports.default_filters(), 20);

    Section::ChapterReports
        .fetch_rows(&source, &query)
        .await
        .unwrap();

    assert_eq!(
        source.calls(),
        vec![Call::List {
            endpoint: "chapter-reports".to_string(),
            params: vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "20".to_string()),
            ],
        }]
    );
}

#[tokio::test]
async fn test_detail_record_lists_every_field() {
    let source = FakeSource::new().with_records("comments", vec![sample(9)]);

    let value = source.get(Section::Comments.endpoint(), "9").await.unwrap();
    let record = Record::from_value(&decode_data::<Value>(value).unwrap());

    assert_eq!(record.get("id"), Some("9"));
    assert_eq!(record.get("user_name"), Some("reader42"));
    assert_eq!(record.fields.len(), sample(9).as_object().unwrap().len());
}

#[test]
fn test_routes_resolve_by_slug() {
    for section in Section::ALL {
        let parsed: Section = section.to_string().parse().unwrap();
        assert_eq!(parsed, section);
    }
    assert!("library".parse::<Section>().is_err());
}

#[test]
fn test_grid_sections() {
    let grid: Vec<Section> = Section::ALL
        .into_iter()
        .filter(|section| section.layout() == Layout::Grid)
        .collect();
    assert_eq!(grid, vec![Section::Manga, Section::Doujinshi, Section::Pets]);
}

#[test]
fn test_reset_restores_every_field_empty() {
    for section in Section::ALL {
        let mut page = PageController::new(section.filter_fields());
        let first = section.filter_fields()[0].name;
        page.handle_search(section.default_filters().with(first, "x").unwrap());
        page.handle_reset();

        let fields: Vec<&str> = page.filters().iter().map(|(field, _)| field.name).collect();
        let expected: Vec<&str> = section.filter_fields().iter().map(|f| f.name).collect();
        assert_eq!(fields, expected, "{}", section);
        assert!(page.filters().is_default(), "{}", section);
    }
}

#[tokio::test]
async fn test_null_fields_do_not_fail_the_page() {
    tracing_init();

    let source = FakeSource::new().with_records(
        "members",
        vec![
            json!({"id": 1, "name": "reader42", "email": "r@mymanga.vn", "is_active": true}),
            json!({"id": 2, "name": null, "email": null, "is_active": null}),
        ],
    );
    let query = ListingQuery::new(&Section::Members.default_filters(), 20);

    let page = Section::Members.fetch_rows(&source, &query).await.unwrap();

    assert_eq!(page.items.len(), 2);
    let cells = &page.items[1].cells;
    assert_eq!(cells[0], "-");
    assert!(cells.iter().any(|cell| cell == "Inactive"));
    assert!(page.items[0].cells.iter().any(|cell| cell == "Active"));
}
