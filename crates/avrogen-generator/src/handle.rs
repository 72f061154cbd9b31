//! Prepared schema handle.

use crate::error::GenerationError;
use crate::generator::{GeneratorConfig, ValueGenerator};
use avrogen_core::{
    prepare_schema, CanonicalParser, GeneratedValue, ParsedSchema, SchemaDescription, SchemaError,
    SchemaParser,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A schema description that has been normalized and parsed, ready to
/// produce values.
///
/// The handle is immutable; every generation call brings its own RNG.
#[derive(Debug, Clone)]
pub struct SchemaHandle {
    schema: ParsedSchema,
    config: GeneratorConfig,
}

impl SchemaHandle {
    /// Normalize `desc` and parse the result with the built-in parser.
    pub fn new(desc: &SchemaDescription) -> Result<Self, SchemaError> {
        Self::with_parser(desc, &CanonicalParser)
    }

    /// Normalize `desc` and parse the result with `parser`.
    pub fn with_parser<P: SchemaParser + ?Sized>(
        desc: &SchemaDescription,
        parser: &P,
    ) -> Result<Self, SchemaError> {
        let canonical = prepare_schema(desc)?;
        let json = canonical.to_json_string()?;
        tracing::debug!("Canonical schema: {json}");
        Ok(Self::from_parsed(parser.parse(&json)?))
    }

    /// Wrap an already parsed schema.
    pub fn from_parsed(schema: ParsedSchema) -> Self {
        Self {
            schema,
            config: GeneratorConfig::default(),
        }
    }

    /// Parse canonical schema JSON directly, skipping normalization.
    pub fn from_canonical_json(json: &str) -> Result<Self, SchemaError> {
        Ok(Self::from_parsed(ParsedSchema::parse_str(json)?))
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// The parsed schema.
    pub fn schema(&self) -> &ParsedSchema {
        &self.schema
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one value for the schema root using a fresh,
    /// entropy-seeded RNG.
    pub fn generate_value(&self) -> Result<GeneratedValue, GenerationError> {
        let mut rng = StdRng::from_entropy();
        self.generate_value_with(&mut rng)
    }

    /// Generate one value for the schema root using `rng` and the current
    /// time.
    pub fn generate_value_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GeneratedValue, GenerationError> {
        self.generate_value_at(rng, Utc::now())
    }

    /// Generate one value for the schema root using `rng` and a fixed
    /// clock instant.
    pub fn generate_value_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<GeneratedValue, GenerationError> {
        ValueGenerator::new(&self.schema, rng)
            .with_clock(now)
            .with_config(self.config)
            .generate_root()
    }
}

/// Normalize and parse a schema description.
pub fn construct(desc: &SchemaDescription) -> Result<SchemaHandle, SchemaError> {
    SchemaHandle::new(desc)
}
