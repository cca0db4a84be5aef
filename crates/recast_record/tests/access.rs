use recast_record::access::{
    AccessError, changed_fields, clear_fields, copy_all_fields, copy_fields, fields_equal,
    get_field, has_field, reset_fields, set_field, try_get_field, try_set_field,
};
use recast_record::AssignError;
use recast_record::derive::Record;

#[derive(Record, Default, Debug, PartialEq)]
struct User {
    name: String,
    email: String,
    age: u32,
    nickname: Option<String>,
    #[record(readonly)]
    id: u64,
}

fn ada() -> User {
    User {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        age: 36,
        nickname: Some("countess".into()),
        id: 1,
    }
}

#[test]
fn set_then_get_round_trips() {
    let mut user = User::default();

    assert!(set_field(&mut user, "age", &36_u32));
    assert_eq!(get_field::<u32>(&user, "age"), 36);

    assert!(set_field(&mut user, "name", &String::from("Ada")));
    assert_eq!(get_field::<String>(&user, "name"), "Ada");
}

#[test]
fn get_coerces_through_scalars() {
    let user = ada();

    assert_eq!(get_field::<String>(&user, "age"), "36");
    assert_eq!(get_field::<i64>(&user, "age"), 36);
    assert_eq!(get_field::<String>(&user, "nickname"), "countess");
}

#[test]
fn get_unknown_name_returns_the_zero_value() {
    let user = ada();

    assert_eq!(get_field::<u32>(&user, "salary"), 0);
    assert_eq!(get_field::<String>(&user, "salary"), "");
    assert!(!has_field(&user, "salary"));
    assert!(has_field(&user, "age"));
}

#[test]
fn set_coerces_and_rejects_atomically() {
    let mut user = ada();

    assert!(set_field(&mut user, "age", &String::from("40")));
    assert_eq!(user.age, 40);

    assert!(!set_field(&mut user, "age", &String::from("forty")));
    assert_eq!(user.age, 40);
}

#[test]
fn set_readonly_field_returns_false_and_changes_nothing() {
    let mut user = ada();

    assert!(!set_field(&mut user, "id", &2_u64));
    assert_eq!(user.id, 1);
}

#[test]
fn try_variants_distinguish_the_failure_causes() {
    let mut user = ada();

    assert!(matches!(
        try_set_field(&mut user, "salary", &1_u32),
        Err(AccessError::UnknownField { .. })
    ));
    assert!(matches!(
        try_set_field(&mut user, "id", &2_u64),
        Err(AccessError::NotWritable { .. })
    ));
    assert!(matches!(
        try_set_field(&mut user, "age", &String::from("forty")),
        Err(AccessError::Incompatible(AssignError::NotCoercible { .. }))
    ));

    assert_eq!(try_get_field::<u32>(&user, "age"), Ok(36));
    assert!(matches!(
        try_get_field::<u32>(&user, "salary"),
        Err(AccessError::UnknownField { .. })
    ));
}

#[test]
fn clear_only_affects_nullable_fields() {
    let mut user = ada();

    clear_fields(&mut user, &["nickname", "age", "id", "salary"]);

    assert_eq!(user.nickname, None);
    assert_eq!(user.age, 36);
    assert_eq!(user.id, 1);
}

#[test]
fn reset_restores_zero_values() {
    let mut user = ada();

    reset_fields(&mut user, &["name", "age", "id"]);

    assert_eq!(user.name, "");
    assert_eq!(user.age, 0);
    // Read-only fields are not writable through reset either.
    assert_eq!(user.id, 1);
}

#[test]
fn fields_equal_is_vacuously_true_for_no_names() {
    let a = ada();
    let mut b = ada();
    b.email = "other@example.com".into();

    assert!(fields_equal(&a, &b, &[]));
    assert!(fields_equal(&a, &b, &["name", "age"]));
    assert!(!fields_equal(&a, &b, &["name", "email"]));
}

#[test]
fn changed_fields_preserves_the_requested_order() {
    let original = ada();
    let mut edited = ada();
    edited.email = "ada2@example.com".into();

    assert_eq!(
        changed_fields(&original, &edited, &["name", "email", "age"]),
        vec!["email"]
    );
    assert!(changed_fields(&original, &original, &["name", "email", "age"]).is_empty());

    edited.age = 37;
    assert_eq!(
        changed_fields(&original, &edited, &["age", "email"]),
        vec!["age", "email"]
    );
}

#[derive(Record, Default)]
struct Badge {
    name: String,
    color: String,
}

#[test]
fn missing_field_compares_equal_only_to_zero() {
    let user = ada();
    let badge = Badge {
        name: "Ada".into(),
        color: String::new(),
    };

    // `color` exists only on the badge and holds its zero value.
    assert!(fields_equal(&user, &badge, &["name", "color"]));

    let mut colored = Badge {
        name: "Ada".into(),
        color: "green".into(),
    };
    assert!(!fields_equal(&user, &colored, &["color"]));
    assert_eq!(changed_fields(&user, &colored, &["name", "color"]), vec!["color"]);

    // Missing on both sides compares equal.
    assert!(fields_equal(&user, &colored, &["elevation"]));

    colored.color.clear();
    assert!(fields_equal(&user, &colored, &["name", "color"]));
}

#[derive(Record, Default, Debug, PartialEq)]
struct Triple {
    a: u32,
    b: u32,
    c: u32,
}

#[test]
fn copy_fields_copies_only_the_named_ones() {
    let source = Triple { a: 1, b: 2, c: 3 };

    let copied: Triple = copy_fields(&source, &["a", "c"]).unwrap();
    assert_eq!(copied, Triple { a: 1, b: 0, c: 3 });
}

#[test]
fn copy_fields_with_no_names_yields_nothing() {
    let source = Triple { a: 1, b: 2, c: 3 };

    assert_eq!(copy_fields::<Triple>(&source, &[]), None);
}

#[test]
fn copy_all_fields_reproduces_the_source() {
    let source = Triple { a: 1, b: 2, c: 3 };

    let copied: Triple = copy_all_fields(&source).unwrap();
    assert_eq!(copied, source);
}

#[test]
fn copy_between_shapes_matches_by_name() {
    let user = ada();

    let badge: Badge = copy_all_fields(&user).unwrap();
    assert_eq!(badge.name, "Ada");
    assert_eq!(badge.color, "");
}

#[test]
fn readonly_fields_survive_as_zero_in_copies() {
    let user = ada();

    let copied: User = copy_all_fields(&user).unwrap();
    assert_eq!(copied.name, user.name);
    // The id cannot be written on the target, so it stays zero.
    assert_eq!(copied.id, 0);
}
