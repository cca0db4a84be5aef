use recast_record::access::from_mapping;
use recast_record::derive::Record;
use recast_record::serde::RecordSerializer;
use recast_record::{FieldMap, Outcome, Scalar};

#[derive(Record, Default, Debug, PartialEq)]
struct Sensor {
    label: String,
    reading: f64,
    online: bool,
    last_error: Option<String>,
}

#[test]
fn records_serialize_as_ordered_maps() {
    let sensor = Sensor {
        label: "t1".into(),
        reading: 21.5,
        online: true,
        last_error: None,
    };

    let json = serde_json::to_string(&RecordSerializer(&sensor)).unwrap();
    assert_eq!(
        json,
        r#"{"label":"t1","reading":21.5,"online":true,"last_error":null}"#
    );
}

#[test]
fn mappings_serialize_in_insertion_order() {
    let mut mapping = FieldMap::new();
    mapping.insert("b", 2_u32);
    mapping.insert("a", Some(String::from("x")));
    mapping.insert("n", Scalar::Null);

    let json = serde_json::to_string(&mapping).unwrap();
    assert_eq!(json, r#"{"b":2,"a":"x","n":null}"#);
}

#[test]
fn mappings_deserialize_into_scalars_and_coerce() {
    let mapping: FieldMap = serde_json::from_str(
        r#"{"label":"t2","reading":3,"online":"true","last_error":null,"extra":1}"#,
    )
    .unwrap();

    assert!(matches!(
        mapping.get("reading").unwrap().downcast_ref::<Scalar>(),
        Some(Scalar::UInt(3))
    ));

    let sensor: Sensor = from_mapping(&mapping);
    assert_eq!(
        sensor,
        Sensor {
            label: "t2".into(),
            reading: 3.0,
            online: true,
            last_error: None,
        }
    );
}

#[test]
fn scalars_deserialize_untagged() {
    let scalars: Vec<Scalar> = serde_json::from_str(r#"[null, true, -3, 7, 1.5, "hi"]"#).unwrap();
    assert_eq!(
        scalars,
        [
            Scalar::Null,
            Scalar::Bool(true),
            Scalar::Int(-3),
            Scalar::UInt(7),
            Scalar::Float(1.5),
            Scalar::Str("hi".into()),
        ]
    );
}

#[test]
fn json_null_lands_in_nullable_fields_only() {
    let mapping: FieldMap =
        serde_json::from_str(r#"{"label":null,"last_error":null}"#).unwrap();

    let mut sensor = Sensor {
        label: "keep".into(),
        last_error: Some("stale".into()),
        ..Sensor::default()
    };
    for (name, value) in mapping.iter() {
        recast_record::access::set_field(&mut sensor, name, value);
    }

    assert_eq!(sensor.label, "keep");
    assert_eq!(sensor.last_error, None);
}

#[test]
fn outcomes_carry_structured_payloads() {
    #[derive(serde::Serialize)]
    struct Page {
        items: Vec<u32>,
    }

    let outcome = Outcome::ok_with_count(Page { items: vec![5, 6] }, 12);
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"success":true,"payload":{"items":[5,6]},"errors":[],"total_count":12}"#
    );
}

#[test]
fn outcomes_serialize_without_absent_parts() {
    let ok = Outcome::ok_with_count(vec![1, 2], 9);
    assert_eq!(
        serde_json::to_string(&ok).unwrap(),
        r#"{"success":true,"payload":[1,2],"errors":[],"total_count":9}"#
    );

    let failed: Outcome<Vec<u8>> = Outcome::fail("backend unavailable");
    assert_eq!(
        serde_json::to_string(&failed).unwrap(),
        r#"{"success":false,"errors":["backend unavailable"]}"#
    );
}
