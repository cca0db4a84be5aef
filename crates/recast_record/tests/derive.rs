use recast_record::access::{get_field, has_field, set_field};
use recast_record::derive::Record;
use recast_record::{Described, Record as _};

#[derive(Record, Default)]
struct Document {
    #[record(readonly)]
    id: u64,
    #[record(rename = "title")]
    raw_title: String,
    body: String,
    #[record(skip)]
    cached_len: usize,
}

#[test]
fn renamed_fields_answer_to_the_public_name() {
    let mut doc = Document::default();

    assert!(set_field(&mut doc, "title", &String::from("Notes")));
    assert_eq!(doc.raw_title, "Notes");
    assert_eq!(get_field::<String>(&doc, "title"), "Notes");

    assert!(!has_field(&doc, "raw_title"));
    assert!(!set_field(&mut doc, "raw_title", &String::from("x")));
}

#[test]
fn skipped_fields_are_invisible() {
    let doc = Document {
        cached_len: 99,
        ..Document::default()
    };

    assert!(!has_field(&doc, "cached_len"));
    assert_eq!(doc.field_len(), 3);
    assert_eq!(get_field::<usize>(&doc, "cached_len"), 0);
}

#[test]
fn readonly_fields_read_but_reject_writes() {
    let mut doc = Document {
        id: 7,
        ..Document::default()
    };

    assert!(doc.field("id").is_some());
    assert!(doc.field_mut("id").is_none());
    assert_eq!(get_field::<u64>(&doc, "id"), 7);
}

#[test]
fn record_info_describes_the_declared_fields() {
    let info = Document::record_info();

    assert_eq!(info.type_name(), "Document");
    assert_eq!(info.type_path(), concat!(module_path!(), "::Document"));
    assert_eq!(info.field_len(), 3);
    assert_eq!(info.index_of("title"), Some(1));
    assert_eq!(info.readable_names(), ["id", "title", "body"]);

    let id = info.field("id").unwrap();
    assert!(id.type_is::<u64>());
    assert!(id.readable() && !id.writable());
    assert!(info.field("cached_len").is_none());
}

#[test]
fn iteration_follows_declaration_order() {
    let doc = Document {
        id: 1,
        raw_title: "t".into(),
        body: "b".into(),
        cached_len: 0,
    };

    let names: Vec<_> = doc.iter_fields().map(|(name, _)| name.to_string()).collect();
    assert_eq!(names, ["id", "title", "body"]);
    assert_eq!(doc.name_at(2), Some("body"));
    assert!(doc.field_at(3).is_none());
}

#[test]
fn trait_object_downcasts() {
    let doc: Box<dyn recast_record::Record> = Box::new(Document {
        id: 3,
        ..Document::default()
    });

    assert!(doc.is::<Document>());
    assert_eq!(doc.field_as::<u64>("id"), Some(&3));

    let doc = match doc.take::<u64>() {
        Err(original) => original,
        Ok(_) => unreachable!("a Document is not a u64"),
    };
    let doc: Document = doc.take().expect("the type matches");
    assert_eq!(doc.id, 3);
}
