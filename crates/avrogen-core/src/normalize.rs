//! Schema normalization: description shorthand to canonical schema.

use crate::builders::{shell_of, BuildContext, TypeBuilder};
use crate::canonical::CanonicalSchema;
use crate::description::{SchemaDescription, TypeDescription, NULLABLE_SUFFIX};
use crate::error::NormalizeError;

/// Expands shorthand in a [`SchemaDescription`] into a [`CanonicalSchema`].
///
/// Dispatch is on the shape of the node's `type`:
///
/// - a name: the nullability suffix is stripped and the matching
///   [`TypeBuilder`] expands the node. Non-nullable nodes lose their
///   `default`.
/// - a list: treated as an anonymous union.
/// - a nested description: normalized and embedded as the type.
///
/// The input is never modified.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaNormalizer;

impl SchemaNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one description node and everything below it.
    pub fn normalize(&self, desc: &SchemaDescription) -> Result<CanonicalSchema, NormalizeError> {
        match &desc.ty {
            TypeDescription::Name(declared) => {
                let (type_name, nullable) = match declared.strip_suffix(NULLABLE_SUFFIX) {
                    Some(stripped) => (stripped, true),
                    None => (declared.as_str(), false),
                };
                let builder = TypeBuilder::for_type(type_name)
                    .ok_or_else(|| NormalizeError::UnknownType(type_name.to_string()))?;

                tracing::debug!(
                    "Normalizing {:?} as {type_name} (nullable: {nullable})",
                    desc.name.as_deref().unwrap_or("<anonymous>")
                );

                builder.build(
                    self,
                    BuildContext {
                        node: desc,
                        type_name,
                        nullable,
                        default: if nullable { desc.default.clone() } else { None },
                    },
                )
            }
            TypeDescription::Union(variants) => {
                let synthesized =
                    SchemaDescription::of_type("union").with_variants(variants.iter().cloned());
                let union = self.normalize(&synthesized)?;
                Ok(shell_of(desc, union.ty, None))
            }
            TypeDescription::Nested(nested) => {
                let inner = self.normalize(nested)?;
                Ok(shell_of(desc, inner.into_type(), None))
            }
        }
    }
}

/// Normalize a description without parsing the result.
///
/// Useful for inspecting what a description expands to.
pub fn prepare_schema(desc: &SchemaDescription) -> Result<CanonicalSchema, NormalizeError> {
    SchemaNormalizer::new().normalize(desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::CanonicalType;
    use serde_json::json;

    const PRIMITIVES: &[&str] = &[
        "null", "boolean", "int", "long", "float", "double", "bytes", "string",
    ];

    fn union_of(names: &[&str]) -> CanonicalType {
        CanonicalType::Union(names.iter().map(|n| CanonicalType::name(*n)).collect())
    }

    #[test]
    fn test_primitive_unchanged() {
        for name in PRIMITIVES {
            let schema = prepare_schema(&SchemaDescription::of_type(*name)).unwrap();
            assert_eq!(schema.type_name(), Some(*name));
            assert!(schema.default.is_none());
        }
    }

    #[test]
    fn test_non_nullable_default_is_dropped() {
        let desc = SchemaDescription::of_type("int")
            .with_name("count")
            .with_default(json!(5));
        let schema = prepare_schema(&desc).unwrap();
        assert_eq!(schema.type_name(), Some("int"));
        assert!(schema.default.is_none());
    }

    #[test]
    fn test_nullable_primitive_ordering() {
        for name in PRIMITIVES.iter().filter(|n| **n != "null") {
            let without_default =
                prepare_schema(&SchemaDescription::of_type(format!("{name}*"))).unwrap();
            assert_eq!(without_default.ty, union_of(&["null", name]));
            assert!(without_default.default.is_none());

            let with_default = prepare_schema(
                &SchemaDescription::of_type(format!("{name}*")).with_default(json!("x")),
            )
            .unwrap();
            assert_eq!(with_default.ty, union_of(&[name, "null"]));
            assert_eq!(with_default.default, Some(json!("x")));
        }
    }

    #[test]
    fn test_explicit_null_default_counts_as_default() {
        let desc = SchemaDescription::of_type("string*").with_default(serde_json::Value::Null);
        let schema = prepare_schema(&desc).unwrap();
        assert_eq!(schema.ty, union_of(&["string", "null"]));
    }

    #[test]
    fn test_nullable_array() {
        let desc = SchemaDescription::of_type("array*")
            .with_name("tags")
            .with_items(SchemaDescription::of_type("int"));
        let schema = prepare_schema(&desc).unwrap();

        assert_eq!(schema.name.as_deref(), Some("tags"));
        assert_eq!(schema.default, Some(json!([])));
        let members = schema.ty.as_union().unwrap();
        assert_eq!(members[0], CanonicalType::name("null"));
        let inner = members[1].as_declaration().unwrap();
        assert_eq!(inner.type_name(), Some("array"));
        assert_eq!(inner.name.as_deref(), Some("tags"));
        assert_eq!(inner.items.as_deref(), Some(&CanonicalType::name("int")));
    }

    #[test]
    fn test_nullable_map() {
        let desc = SchemaDescription::of_type("map*").with_values("string");
        let schema = prepare_schema(&desc).unwrap();

        assert_eq!(schema.default, Some(json!({})));
        let inner = schema.ty.as_union().unwrap()[1].as_declaration().unwrap();
        assert_eq!(inner.values.as_deref(), Some(&CanonicalType::name("string")));
    }

    #[test]
    fn test_plain_array_and_map() {
        let array = prepare_schema(&SchemaDescription::of_type("array").with_items("long")).unwrap();
        assert_eq!(array.type_name(), Some("array"));
        assert!(array.default.is_none());

        let map = prepare_schema(
            &SchemaDescription::of_type("map").with_values(SchemaDescription::of_type("double*")),
        )
        .unwrap();
        assert_eq!(map.values.as_deref(), Some(&union_of(&["null", "double"])));
    }

    #[test]
    fn test_unknown_type() {
        let err = prepare_schema(&SchemaDescription::of_type("bogus")).unwrap_err();
        assert_eq!(err, NormalizeError::UnknownType("bogus".to_string()));

        let err = prepare_schema(&SchemaDescription::of_type("bogus*")).unwrap_err();
        assert_eq!(err, NormalizeError::UnknownType("bogus".to_string()));
    }

    #[test]
    fn test_unknown_type_deep_inside_record() {
        let desc = SchemaDescription::of_type("record")
            .with_name("Outer")
            .with_fields(vec![SchemaDescription::of_type("array")
                .with_name("list")
                .with_items("widget")]);
        assert_eq!(
            prepare_schema(&desc).unwrap_err(),
            NormalizeError::UnknownType("widget".to_string())
        );
    }

    #[test]
    fn test_record_fields_normalized_in_order() {
        let desc = SchemaDescription::of_type("record").with_name("User").with_fields(vec![
            SchemaDescription::of_type("string").with_name("id"),
            SchemaDescription::of_type("int*").with_name("age"),
            SchemaDescription::of_type("long")
                .with_name("seen")
                .with_default(json!(0)),
        ]);
        let schema = prepare_schema(&desc).unwrap();
        let fields = schema.fields.unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name.as_deref(), Some("id"));
        assert_eq!(fields[1].ty, union_of(&["null", "int"]));
        assert!(fields[2].default.is_none());
    }

    #[test]
    fn test_named_and_complex_fields_embed_their_declaration() {
        let desc = SchemaDescription::of_type("record").with_name("Thing").with_fields(vec![
            SchemaDescription::of_type("fixed")
                .with_name("hash")
                .with_attribute("size", json!(4)),
            SchemaDescription::of_type("enum")
                .with_name("color")
                .with_attribute("symbols", json!(["RED"]))
                .with_attribute("doc", json!("paint")),
            SchemaDescription::of_type("long")
                .with_name("t")
                .with_attribute("logicalType", json!("timestamp-millis")),
            SchemaDescription::of_type("array").with_name("tags").with_items("int"),
        ]);
        let schema = prepare_schema(&desc).unwrap();

        assert_eq!(
            schema.to_json().unwrap()["fields"],
            json!([
                {"name": "hash", "type": {"name": "hash", "type": "fixed", "size": 4}},
                {"name": "color", "doc": "paint", "type": {"name": "color", "type": "enum", "symbols": ["RED"]}},
                {"name": "t", "type": {"type": "long", "logicalType": "timestamp-millis"}},
                {"name": "tags", "type": {"type": "array", "items": "int"}}
            ])
        );
    }

    #[test]
    fn test_nullable_union_variant_is_flattened() {
        let desc = SchemaDescription::of_type("union")
            .with_name("value")
            .with_variants(vec![
                crate::description::Variant::from("int"),
                SchemaDescription::of_type("string*").into(),
                crate::description::Variant::from("null"),
            ]);
        let schema = prepare_schema(&desc).unwrap();
        assert_eq!(schema.ty, union_of(&["int", "null", "string"]));
    }

    #[test]
    fn test_nullable_record_suffix_ignored() {
        let desc = SchemaDescription::of_type("record*")
            .with_name("Maybe")
            .with_fields(vec![]);
        let schema = prepare_schema(&desc).unwrap();
        assert_eq!(schema.type_name(), Some("record"));
    }

    #[test]
    fn test_record_without_fields() {
        let err = prepare_schema(&SchemaDescription::of_type("record").with_name("R")).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MissingAttribute {
                category: "record",
                attribute: "fields"
            }
        );
    }

    #[test]
    fn test_inline_union_variants_are_normalized() {
        let desc = SchemaDescription::union_of(["null", "string"])
            .with_name("nick")
            .with_default(json!("ignored"));
        let schema = prepare_schema(&desc).unwrap();

        assert_eq!(schema.name.as_deref(), Some("nick"));
        assert_eq!(schema.ty, union_of(&["null", "string"]));
        assert!(schema.default.is_none());
    }

    #[test]
    fn test_explicit_union_node() {
        let desc = SchemaDescription::of_type("union")
            .with_name("value")
            .with_variants(vec![
                crate::description::Variant::from("int"),
                SchemaDescription::of_type("array").with_items("string").into(),
            ]);
        let schema = prepare_schema(&desc).unwrap();
        let members = schema.ty.as_union().unwrap();

        assert_eq!(members[0], CanonicalType::name("int"));
        assert_eq!(members[1].as_declaration().unwrap().type_name(), Some("array"));
    }

    #[test]
    fn test_nested_declaration() {
        let address = SchemaDescription::of_type("record")
            .with_name("Address")
            .with_fields(vec![SchemaDescription::of_type("string").with_name("city")]);
        let desc = SchemaDescription::nested(address)
            .with_name("address")
            .with_default(json!({}));
        let schema = prepare_schema(&desc).unwrap();

        assert_eq!(schema.name.as_deref(), Some("address"));
        assert!(schema.default.is_none());
        let inner = schema.ty.as_declaration().unwrap();
        assert_eq!(inner.name.as_deref(), Some("Address"));
        assert_eq!(inner.type_name(), Some("record"));
    }

    #[test]
    fn test_nested_bare_type_collapses() {
        let desc = SchemaDescription::nested(SchemaDescription::of_type("long")).with_name("n");
        let schema = prepare_schema(&desc).unwrap();
        assert_eq!(schema.type_name(), Some("long"));
    }

    #[test]
    fn test_nullable_enum_embeds_declaration() {
        let desc = SchemaDescription::of_type("enum*")
            .with_name("Color")
            .with_attribute("symbols", json!(["RED", "GREEN"]))
            .with_attribute("doc", json!("paint"));
        let schema = prepare_schema(&desc).unwrap();

        let members = schema.ty.as_union().unwrap();
        assert_eq!(members[0], CanonicalType::name("null"));
        let declaration = members[1].as_declaration().unwrap();
        assert_eq!(declaration.name.as_deref(), Some("Color"));
        assert_eq!(declaration.attributes.get("symbols"), Some(&json!(["RED", "GREEN"])));
        assert!(!schema.attributes.contains_key("symbols"));
        assert_eq!(schema.attributes.get("doc"), Some(&json!("paint")));
    }

    #[test]
    fn test_nullable_logical_primitive_embeds_declaration() {
        let desc = SchemaDescription::of_type("long*")
            .with_name("created")
            .with_attribute("logicalType", json!("timestamp-millis"));
        let schema = prepare_schema(&desc).unwrap();

        assert_eq!(
            schema.to_json().unwrap(),
            json!({
                "name": "created",
                "type": ["null", {"type": "long", "logicalType": "timestamp-millis"}]
            })
        );
    }

    #[test]
    fn test_input_is_not_modified() {
        let desc = SchemaDescription::of_type("int").with_default(json!(1));
        let before = desc.clone();
        prepare_schema(&desc).unwrap();
        assert_eq!(desc, before);
    }
}
