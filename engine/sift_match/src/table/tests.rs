use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_keyed_lowering_preserves_insertion_order() {
    let table = CaseTable::keyed()
        .on("Ok", |v| v)
        .on("Err", |_| Value::Int(0))
        .on("pending", |v| v)
        .build();

    assert_eq!(table.len(), 3);
    assert!(matches!(table.entries()[0].0, Pattern::OkTok));
    assert!(matches!(table.entries()[1].0, Pattern::ErrTok));
    assert!(matches!(
        &table.entries()[2].0,
        Pattern::Literal(Value::Str(_))
    ));
}

#[test]
fn test_default_key_is_forced_last() {
    // `_` registered first must still act as the trailing wildcard
    let table = CaseTable::keyed()
        .on("_", |_| Value::string("default"))
        .on("Some", |v| v)
        .build();

    assert_eq!(table.len(), 1);
    assert!(matches!(table.entries()[0].0, Pattern::SomeTok));
    assert!(table.default_handler().is_some());
}

#[test]
fn test_keyed_shape_records_reserved_entries() {
    let table = CaseTable::keyed()
        .on("status", |v| v)
        .on("Some", |v| v)
        .on("None", |_| Value::Int(0))
        .build();

    let shape = table.keyed_shape().unwrap_or_default();
    assert_eq!(shape.some, Some(1));
    assert_eq!(shape.none, Some(2));
    assert_eq!(shape.ok, None);
    assert_eq!(shape.err, None);
}

#[test]
fn test_ordered_table_has_no_keyed_shape() {
    let table = CaseTable::ordered()
        .case(Pattern::Wildcard, |v| v)
        .build();
    assert!(table.keyed_shape().is_none());
    assert_eq!(table.len(), 1);
}

#[test]
fn test_empty_table() {
    let table = CaseTable::ordered().build();
    assert!(table.is_empty());
    let with_default = CaseTable::ordered().default(|v| v).build();
    assert!(!with_default.is_empty());
}
