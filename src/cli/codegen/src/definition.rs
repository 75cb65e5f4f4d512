/* src/cli/codegen/src/definition.rs */

// Icon definition type shared between ingestion and the snippet generators.

/// One discovered SVG input plus the naming metadata derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDefinition {
  /// Identifier-safe name for the generated constant, e.g. `navArrowLeft`.
  pub variable_name: String,
  /// Name used in the generated type union, e.g. `arrow-left`.
  pub type_name: String,
  /// Source filename without the `.svg` ending.
  pub filename: String,
  /// Grouping tag prepended to output filenames, e.g. `nav`.
  pub prefix: String,
  /// Raw SVG markup.
  pub data: String,
}

impl SvgDefinition {
  /// Derive naming metadata for one SVG file.
  pub fn new(prefix: &str, stem: &str, data: String) -> Self {
    Self {
      variable_name: to_camel_case(&format!("{prefix}-{stem}")),
      type_name: stem.to_string(),
      filename: stem.to_string(),
      prefix: prefix.to_string(),
      data,
    }
  }

  /// Output filename without extension: `{prefix}-{stem}.icon`.
  pub fn output_name(&self) -> String {
    format!("{}-{}.icon", self.prefix, self.filename)
  }

  /// Copy of this definition with the variable name uppercased at the first
  /// character (component naming convention for TSX output). The original
  /// definition is left untouched.
  pub fn component_cased(&self) -> Self {
    Self { variable_name: capitalize_first(&self.variable_name), ..self.clone() }
  }
}

/// Convert a file-ish name (`nav-arrow_left`) to camelCase (`navArrowLeft`).
/// Any non-alphanumeric character acts as a word separator.
pub fn to_camel_case(name: &str) -> String {
  let mut out = String::with_capacity(name.len());
  let mut upper_next = false;
  for c in name.chars() {
    if c.is_ascii_alphanumeric() {
      if upper_next && !out.is_empty() {
        out.extend(c.to_uppercase());
      } else {
        out.extend(c.to_lowercase());
      }
      upper_next = false;
    } else {
      upper_next = true;
    }
  }
  out
}

/// Uppercase the first character, leaving the rest as-is.
pub fn capitalize_first(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
