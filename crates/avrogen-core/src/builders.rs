//! Per-category expansion of shorthand declarations.
//!
//! Each [`TypeBuilder`] knows how to turn one category of description
//! (primitive, record, array, map, union) into its canonical form. The
//! [`SchemaNormalizer`] picks the builder and hands it a [`BuildContext`];
//! builders call back into the normalizer for substructure.

use crate::canonical::{CanonicalSchema, CanonicalType};
use crate::description::SchemaDescription;
use crate::error::NormalizeError;
use crate::normalize::SchemaNormalizer;
use serde_json::{json, Map, Value};

/// Attributes that describe a field rather than its type. They stay on the
/// outer node when a declaration is embedded into a nullable union.
const FIELD_LEVEL_ATTRIBUTES: &[&str] = &["doc", "aliases", "order"];

/// Builder strategy for one schema category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeBuilder {
    Primitive,
    Record,
    Array,
    Map,
    Union,
}

/// Everything a builder needs to know about the node being expanded.
#[derive(Debug)]
pub struct BuildContext<'a> {
    /// The description node
    pub node: &'a SchemaDescription,
    /// Type name with the nullability suffix stripped
    pub type_name: &'a str,
    /// Whether the suffix was present
    pub nullable: bool,
    /// The default that survives normalization (only nullable nodes keep one)
    pub default: Option<Value>,
}

impl TypeBuilder {
    /// Look up the builder for a type name.
    pub fn for_type(type_name: &str) -> Option<Self> {
        match type_name {
            "null" | "boolean" | "int" | "long" | "float" | "double" | "bytes" | "string"
            | "fixed" | "enum" => Some(TypeBuilder::Primitive),
            "record" => Some(TypeBuilder::Record),
            "array" => Some(TypeBuilder::Array),
            "map" => Some(TypeBuilder::Map),
            "union" => Some(TypeBuilder::Union),
            _ => None,
        }
    }

    /// Expand the node described by `ctx`.
    pub fn build(
        self,
        normalizer: &SchemaNormalizer,
        ctx: BuildContext<'_>,
    ) -> Result<CanonicalSchema, NormalizeError> {
        match self {
            TypeBuilder::Primitive => Ok(build_primitive(ctx)),
            TypeBuilder::Record => build_record(normalizer, ctx),
            TypeBuilder::Array => build_array(normalizer, ctx),
            TypeBuilder::Map => build_map(normalizer, ctx),
            TypeBuilder::Union => build_union(normalizer, ctx),
        }
    }
}

impl BuildContext<'_> {
    /// Canonical node carrying this node's name, attributes and surviving
    /// default, with the given type.
    fn shell(&self, ty: CanonicalType) -> CanonicalSchema {
        shell_of(self.node, ty, self.default.clone())
    }
}

/// Canonical node with the description's name and attributes.
pub(crate) fn shell_of(
    node: &SchemaDescription,
    ty: CanonicalType,
    default: Option<Value>,
) -> CanonicalSchema {
    CanonicalSchema {
        name: node.name.clone(),
        ty,
        fields: None,
        items: None,
        values: None,
        default,
        attributes: node.attributes.clone(),
    }
}

fn build_primitive(ctx: BuildContext<'_>) -> CanonicalSchema {
    let type_name = ctx.type_name;
    if !ctx.nullable {
        return ctx.shell(CanonicalType::name(type_name));
    }

    // Named types and annotated primitives cannot be referenced by bare
    // name inside a union, so their declaration is embedded instead.
    let embed = matches!(type_name, "fixed" | "enum")
        || ctx
            .node
            .attributes
            .keys()
            .any(|key| !FIELD_LEVEL_ATTRIBUTES.contains(&key.as_str()));

    let member = if embed {
        let mut declaration = shell_of(ctx.node, CanonicalType::name(type_name), None);
        if !matches!(type_name, "fixed" | "enum") {
            declaration.name = None;
        }
        CanonicalType::Declaration(Box::new(declaration))
    } else {
        CanonicalType::name(type_name)
    };

    let null = CanonicalType::name("null");
    let members = if ctx.default.is_some() {
        vec![member, null]
    } else {
        vec![null, member]
    };

    let mut schema = ctx.shell(CanonicalType::Union(members));
    if embed {
        schema.attributes = field_level_attributes(&ctx.node.attributes);
    }
    schema
}

fn build_record(
    normalizer: &SchemaNormalizer,
    ctx: BuildContext<'_>,
) -> Result<CanonicalSchema, NormalizeError> {
    let fields = ctx
        .node
        .fields
        .as_ref()
        .ok_or(NormalizeError::MissingAttribute {
            category: "record",
            attribute: "fields",
        })?
        .iter()
        .map(|field| normalizer.normalize(field).map(as_field))
        .collect::<Result<Vec<_>, _>>()?;

    if ctx.nullable {
        tracing::warn!(
            "Nullable suffix on record {:?} is ignored",
            ctx.node.name.as_deref().unwrap_or("<anonymous>")
        );
    }

    let mut schema = ctx.shell(CanonicalType::name(ctx.type_name));
    schema.fields = Some(fields);
    Ok(schema)
}

fn build_array(
    normalizer: &SchemaNormalizer,
    ctx: BuildContext<'_>,
) -> Result<CanonicalSchema, NormalizeError> {
    let items = ctx
        .node
        .items
        .as_ref()
        .ok_or(NormalizeError::MissingAttribute {
            category: "array",
            attribute: "items",
        })?;
    let items = normalizer.normalize(&items.to_description())?.into_type();

    let mut schema = ctx.shell(CanonicalType::name(ctx.type_name));
    schema.items = Some(Box::new(items));

    if ctx.nullable {
        Ok(make_nullable(schema, json!([])))
    } else {
        Ok(schema)
    }
}

fn build_map(
    normalizer: &SchemaNormalizer,
    ctx: BuildContext<'_>,
) -> Result<CanonicalSchema, NormalizeError> {
    let values = ctx
        .node
        .values
        .as_ref()
        .ok_or(NormalizeError::MissingAttribute {
            category: "map",
            attribute: "values",
        })?;
    let values = normalizer.normalize(&values.to_description())?.into_type();

    let mut schema = ctx.shell(CanonicalType::name(ctx.type_name));
    schema.values = Some(Box::new(values));

    if ctx.nullable {
        Ok(make_nullable(schema, json!({})))
    } else {
        Ok(schema)
    }
}

fn build_union(
    normalizer: &SchemaNormalizer,
    ctx: BuildContext<'_>,
) -> Result<CanonicalSchema, NormalizeError> {
    let variants = ctx
        .node
        .variants
        .as_ref()
        .ok_or(NormalizeError::MissingAttribute {
            category: "union",
            attribute: "variants",
        })?;

    // Nullable variants normalize to unions of their own; their members are
    // spliced in since unions may not nest.
    let mut members: Vec<CanonicalType> = Vec::with_capacity(variants.len());
    for variant in variants {
        let member = normalizer.normalize(&variant.to_description())?.into_type();
        for member in union_members(member) {
            if member.as_name().is_some() && members.contains(&member) {
                continue;
            }
            members.push(member);
        }
    }

    if ctx.nullable {
        tracing::debug!("Nullable suffix on union is ignored");
    }

    Ok(ctx.shell(CanonicalType::Union(members)))
}

fn union_members(member: CanonicalType) -> Vec<CanonicalType> {
    match member {
        CanonicalType::Union(nested) => nested,
        CanonicalType::Declaration(declaration) if declaration.ty.as_union().is_some() => declaration
            .ty
            .as_union()
            .map(<[CanonicalType]>::to_vec)
            .unwrap_or_default(),
        other => vec![other],
    }
}

/// Shape a normalized record field so its type is valid in field position.
///
/// A field's `type` must itself be a schema, so named types, complex
/// categories and annotated primitives move into an embedded declaration.
/// Field-level attributes and the default stay on the field.
pub fn as_field(schema: CanonicalSchema) -> CanonicalSchema {
    let Some(type_name) = schema.type_name() else {
        return schema;
    };
    let named = matches!(type_name, "fixed" | "enum" | "record");
    let embed = named
        || matches!(type_name, "array" | "map")
        || schema
            .attributes
            .keys()
            .any(|key| !FIELD_LEVEL_ATTRIBUTES.contains(&key.as_str()));
    if !embed {
        return schema;
    }

    let CanonicalSchema {
        name,
        ty,
        fields,
        items,
        values,
        default,
        attributes,
    } = schema;
    let (field_attributes, type_attributes): (Map<String, Value>, Map<String, Value>) = attributes
        .into_iter()
        .partition(|(key, _)| FIELD_LEVEL_ATTRIBUTES.contains(&key.as_str()));

    let declaration = CanonicalSchema {
        name: if named { name.clone() } else { None },
        ty,
        fields,
        items,
        values,
        default: None,
        attributes: type_attributes,
    };
    CanonicalSchema {
        name,
        ty: CanonicalType::Declaration(Box::new(declaration)),
        fields: None,
        items: None,
        values: None,
        default,
        attributes: field_attributes,
    }
}

/// Wrap a declaration as `[null, declaration]` with a category-specific
/// empty default. The embedded copy keeps its own name and type.
pub fn make_nullable(declaration: CanonicalSchema, default: Value) -> CanonicalSchema {
    CanonicalSchema {
        name: declaration.name.clone(),
        ty: CanonicalType::Union(vec![
            CanonicalType::name("null"),
            CanonicalType::Declaration(Box::new(declaration)),
        ]),
        fields: None,
        items: None,
        values: None,
        default: Some(default),
        attributes: Map::new(),
    }
}

fn field_level_attributes(attributes: &Map<String, Value>) -> Map<String, Value> {
    attributes
        .iter()
        .filter(|(key, _)| FIELD_LEVEL_ATTRIBUTES.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
