//! Configuration for enum analysis and Go emission.

use std::fmt;
use std::str::FromStr;

use enumgen_core::utils::{to_kebab_case, to_lower_camel_case, to_pascal_case, to_snake_case};

/// Partitions-per-member ratio above which a sparse map replaces range dispatch.
pub const DEFAULT_SPARSE_RATIO: f64 = 0.5;

/// How constant identifiers become display names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformMode {
    /// Keep the identifier as written
    #[default]
    None,
    /// `EnumFirst` → `ENUMFIRST`
    Upper,
    /// `EnumFirst` → `enumfirst`
    Lower,
    /// `EnumFirst` → `enum_first`
    Snake,
    /// `EnumFirst` → `ENUM_FIRST`
    SnakeUpper,
    /// `EnumFirst` → `enum-first`
    Kebab,
    /// `EnumFirst` → `ENUM-FIRST`
    KebabUpper,
    /// `EnumFirst` → `enumFirst`
    JsonCamel,
    /// `enum_first` → `EnumFirst`
    Pascal,
}

impl TransformMode {
    pub const ALL: [TransformMode; 9] = [
        TransformMode::None,
        TransformMode::Upper,
        TransformMode::Lower,
        TransformMode::Snake,
        TransformMode::SnakeUpper,
        TransformMode::Kebab,
        TransformMode::KebabUpper,
        TransformMode::JsonCamel,
        TransformMode::Pascal,
    ];

    /// CLI spelling of the mode.
    pub fn name(self) -> &'static str {
        match self {
            TransformMode::None => "none",
            TransformMode::Upper => "upper",
            TransformMode::Lower => "lower",
            TransformMode::Snake => "snake",
            TransformMode::SnakeUpper => "snake-upper",
            TransformMode::Kebab => "kebab",
            TransformMode::KebabUpper => "kebab-upper",
            TransformMode::JsonCamel => "json-camel",
            TransformMode::Pascal => "pascal",
        }
    }

    /// Reassemble an identifier according to this mode.
    pub fn apply(self, ident: &str) -> String {
        match self {
            TransformMode::None => ident.to_string(),
            TransformMode::Upper => ident.to_uppercase(),
            TransformMode::Lower => ident.to_lowercase(),
            TransformMode::Snake => to_snake_case(ident),
            TransformMode::SnakeUpper => to_snake_case(ident).to_uppercase(),
            TransformMode::Kebab => to_kebab_case(ident),
            TransformMode::KebabUpper => to_kebab_case(ident).to_uppercase(),
            TransformMode::JsonCamel => to_lower_camel_case(ident),
            TransformMode::Pascal => to_pascal_case(ident),
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let normalized = match normalized.as_str() {
            "" | "noop" => "none",
            "json" | "camel" => "json-camel",
            other => other,
        };
        TransformMode::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| format!("unknown transform mode: {s}"))
    }
}

/// Configuration for one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Stripped from each constant name before transformation
    pub(crate) trim_prefix: String,
    /// Prepended to each display name after transformation
    pub(crate) add_prefix: String,
    /// Display name transformation
    pub(crate) transform: TransformMode,
    /// Reverse lookup retries case-insensitively
    pub(crate) ignore_case: bool,
    /// Reverse lookup accepts decimal member values
    pub(crate) allow_numeric: bool,
    pub(crate) include_json: bool,
    pub(crate) include_text: bool,
    pub(crate) include_yaml: bool,
    pub(crate) include_sql: bool,
    /// Density threshold for the sparse map strategy
    pub(crate) sparse_ratio: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            trim_prefix: String::new(),
            add_prefix: String::new(),
            transform: TransformMode::default(),
            ignore_case: false,
            allow_numeric: false,
            include_json: false,
            include_text: false,
            include_yaml: false,
            include_sql: false,
            sparse_ratio: DEFAULT_SPARSE_RATIO,
        }
    }
}

impl GenerationConfig {
    /// Create a new GenerationConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix stripped from constant names.
    pub fn trim_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trim_prefix = prefix.into();
        self
    }

    /// Set the prefix added to display names.
    pub fn add_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.add_prefix = prefix.into();
        self
    }

    /// Set the name transformation.
    pub fn transform(mut self, mode: TransformMode) -> Self {
        self.transform = mode;
        self
    }

    /// Set whether parsing ignores case.
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    /// Set whether parsing accepts decimal values.
    pub fn allow_numeric(mut self, value: bool) -> Self {
        self.allow_numeric = value;
        self
    }

    /// Set whether to emit JSON marshal/unmarshal methods.
    pub fn json(mut self, value: bool) -> Self {
        self.include_json = value;
        self
    }

    /// Set whether to emit text marshal/unmarshal methods.
    pub fn text(mut self, value: bool) -> Self {
        self.include_text = value;
        self
    }

    /// Set whether to emit YAML marshal/unmarshal methods.
    pub fn yaml(mut self, value: bool) -> Self {
        self.include_yaml = value;
        self
    }

    /// Set whether to emit SQL Value/Scan methods.
    pub fn sql(mut self, value: bool) -> Self {
        self.include_sql = value;
        self
    }

    /// Set the sparse map threshold.
    ///
    /// The map strategy is chosen when `partitions > ratio * members`.
    /// Non-finite or negative ratios fall back to the default.
    pub fn sparse_ratio(mut self, ratio: f64) -> Self {
        self.sparse_ratio = if ratio.is_finite() && ratio >= 0.0 {
            ratio
        } else {
            DEFAULT_SPARSE_RATIO
        };
        self
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn is_allow_numeric(&self) -> bool {
        self.allow_numeric
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.transform
    }
}
