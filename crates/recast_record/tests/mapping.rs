use recast_record::access::{
    convert_to, convert_to_dyn, convert_to_scalar, from_mapping, from_mapping_dyn, get_field,
    to_mapping,
};
use recast_record::derive::Record;
use recast_record::registry::RecordRegistry;
use recast_record::{FieldMap, Value};

#[derive(Record, Default, Debug, PartialEq, Clone)]
struct Employee {
    name: String,
    department: String,
    age: u32,
}

#[derive(Record, Default, Debug, PartialEq)]
struct Contact {
    name: String,
    phone: String,
    age: u32,
}

fn sample() -> Employee {
    Employee {
        name: "Grace".into(),
        department: "Compilers".into(),
        age: 49,
    }
}

#[test]
fn to_mapping_keeps_declaration_order() {
    let mapping = to_mapping(&sample());

    let names: Vec<_> = mapping.iter().map(|(name, _)| name.to_string()).collect();
    assert_eq!(names, ["name", "department", "age"]);
    assert_eq!(mapping.target_info().unwrap().type_name(), "Employee");
}

#[test]
fn mapping_round_trip_reproduces_the_record() {
    let source = sample();

    let rebuilt: Employee = from_mapping(&to_mapping(&source));
    assert_eq!(rebuilt, source);
}

#[test]
fn from_mapping_skips_what_it_cannot_apply() {
    let mut mapping = FieldMap::new();
    mapping.insert("name", String::from("Grace"));
    mapping.insert("floor", 3_u32); // no such field
    mapping.insert("age", String::from("forty-nine")); // not coercible

    let employee: Employee = from_mapping(&mapping);
    assert_eq!(employee.name, "Grace");
    assert_eq!(employee.age, 0);
}

#[test]
fn convert_between_shapes_copies_shared_fields() {
    let source: Box<dyn recast_record::Record> = Box::new(sample());

    let contact: Contact = convert_to(source);
    assert_eq!(contact.name, "Grace");
    assert_eq!(contact.age, 49);
    assert_eq!(contact.phone, "");
}

#[test]
fn convert_to_the_same_type_is_identity() {
    let source: Box<dyn recast_record::Record> = Box::new(sample());

    let employee: Employee = convert_to(source);
    assert_eq!(employee, sample());
}

#[test]
fn convert_to_scalar_falls_back_to_zero() {
    let age: &dyn Value = &49_u32;

    assert_eq!(convert_to_scalar::<String>(Some(age)), "49");
    assert_eq!(convert_to_scalar::<u32>(None), 0);
    assert_eq!(convert_to_scalar::<u32>(Some(&String::from("nope"))), 0);
}

#[test]
fn registry_constructs_by_short_name() {
    let mut registry = RecordRegistry::new();
    registry.register::<Employee>();

    let blank = registry.create("Employee").unwrap();
    assert!(blank.is::<Employee>());
    assert_eq!(get_field::<String>(blank.as_ref(), "name"), "");

    assert!(registry.create("Manager").is_none());
}

#[test]
fn dynamic_construction_resolves_the_target_by_name() {
    let mut registry = RecordRegistry::new();
    registry.register::<Employee>();
    registry.register::<Contact>();

    let mapping = to_mapping(&sample());
    let contact = from_mapping_dyn(&registry, "Contact", &mapping).unwrap();
    assert_eq!(get_field::<String>(contact.as_ref(), "name"), "Grace");
    assert_eq!(get_field::<String>(contact.as_ref(), "phone"), "");

    assert!(from_mapping_dyn(&registry, "Manager", &mapping).is_none());
}

#[test]
fn dynamic_conversion_round_trips() {
    let mut registry = RecordRegistry::new();
    registry.register::<Employee>();

    let source = sample();
    let copy = convert_to_dyn(&registry, "Employee", &source).unwrap();
    assert_eq!(copy.downcast_ref::<Employee>(), Some(&source));
}

#[cfg(feature = "auto_register")]
#[test]
fn derived_types_auto_register() {
    let registry = RecordRegistry::with_auto_registered();

    assert!(registry.get_with_name("Employee").is_some());
    assert!(registry.get_with_path(concat!(module_path!(), "::Contact")).is_some());
}
