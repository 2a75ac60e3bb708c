use super::{FlowVarType, TableProperty};
use pretty_assertions::assert_eq;

#[test]
fn table_property_round_trips_by_name() {
    for prop in TableProperty::ALL {
        assert_eq!(TableProperty::from_name(prop.name()), Some(prop));
    }
}

#[test]
fn table_property_rejects_unknown_names() {
    assert_eq!(TableProperty::from_name("ROWNUM"), None);
    assert_eq!(TableProperty::from_name(""), None);
    // Case-sensitive.
    assert_eq!(TableProperty::from_name("RowIndex"), None);
    assert_eq!(TableProperty::from_name("rowindex"), None);
}

#[test]
fn table_property_display_is_canonical_name() {
    assert_eq!(TableProperty::RowIndex.to_string(), "ROWINDEX");
    assert_eq!(TableProperty::RowCount.to_string(), "ROWCOUNT");
    assert_eq!(TableProperty::RowId.to_string(), "ROWID");
}

#[test]
fn flow_var_type_round_trips_by_tag() {
    for ty in FlowVarType::ALL {
        assert_eq!(FlowVarType::from_tag(ty.tag()), Some(ty));
    }
}

#[test]
fn flow_var_type_rejects_unknown_tags() {
    assert_eq!(FlowVarType::from_tag('X'), None);
    assert_eq!(FlowVarType::from_tag('s'), None);
    assert_eq!(FlowVarType::from_tag(' '), None);
}

#[test]
fn flow_var_type_display_is_the_tag() {
    assert_eq!(FlowVarType::String.to_string(), "S");
    assert_eq!(FlowVarType::Double.to_string(), "D");
    assert_eq!(FlowVarType::Integer.to_string(), "I");
}
