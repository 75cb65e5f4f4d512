/* src/cli/codegen/src/typescript/snippets.rs */

// Pure string producers for the generated TypeScript sources. Nothing in
// here touches the filesystem; callers decide where the snippets land.

use std::sync::LazyLock;

use regex::Regex;

use crate::definition::{SvgDefinition, capitalize_first, to_camel_case};

// Attribute names containing `-` or `:` (stroke-linecap, xlink:href) must be
// camelized for JSX; `class` is reserved and becomes `className`.
static JSX_ATTR_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"([a-zA-Z][a-zA-Z0-9]*(?:[-:][a-zA-Z0-9]+)+)=").unwrap());
static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bclass=").unwrap());

/// Rewrite raw SVG markup into JSX-compatible markup.
fn to_jsx_markup(svg: &str) -> String {
  let camelized = JSX_ATTR_RE.replace_all(svg, |caps: &regex::Captures| {
    let name = &caps[1];
    // data-* and aria-* attributes keep their hyphenated form in JSX.
    if name.starts_with("data-") || name.starts_with("aria-") {
      format!("{name}=")
    } else {
      format!("{}=", to_camel_case(name))
    }
  });
  CLASS_ATTR_RE.replace_all(&camelized, "className=").into_owned()
}

/// Escape a value for a single-quoted TypeScript string literal.
fn quote_single(value: &str) -> String {
  value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Icon constant for SVG mode: the raw markup as a string payload.
pub fn svg_constant(def: &SvgDefinition) -> String {
  format!(
    "export const {} = {{\n  name: '{}',\n  data: '{}',\n}};\n",
    def.variable_name,
    def.type_name,
    quote_single(&def.data)
  )
}

/// Icon constant for TSX mode: the markup as an inline JSX element.
/// Expects a component-cased definition (see `SvgDefinition::component_cased`).
pub fn tsx_constant(def: &SvgDefinition) -> String {
  format!(
    "export const {} = {{\n  name: '{}',\n  data: (\n    {}\n  ),\n}};\n",
    def.variable_name,
    def.type_name,
    to_jsx_markup(&def.data)
  )
}

/// Union of all icon names: `export type IconNameType = 'a' | 'b';`.
/// Falls back to `string` for an empty icon set (an empty union is not
/// valid TypeScript).
pub fn type_definition(interface_name: &str, defs: &[SvgDefinition]) -> String {
  let union = if defs.is_empty() {
    "string".to_string()
  } else {
    defs.iter().map(|d| format!("'{}'", d.type_name)).collect::<Vec<_>>().join(" | ")
  };
  format!("export type {interface_name}NameType = {union};\n")
}

/// Shape of one icon constant. The `name` member narrows to the generated
/// name union only when the type alias is also being generated.
pub fn interface_definition(interface_name: &str, generate_type: bool, tsx: bool) -> String {
  let name_type =
    if generate_type { format!("{interface_name}NameType") } else { "string".to_string() };
  let data_type = if tsx { "JSX.Element" } else { "string" };
  format!("export interface {interface_name} {{\n  name: {name_type};\n  data: {data_type};\n}}\n")
}

/// Enum mapping constant-style members to icon names.
pub fn enum_definition(interface_name: &str, defs: &[SvgDefinition]) -> String {
  let mut out = format!("export enum {interface_name}Name {{\n");
  for def in defs {
    out.push_str(&format!("  {} = '{}',\n", capitalize_first(&def.variable_name), def.type_name));
  }
  out.push_str("}\n");
  out
}

/// Barrel re-export line for one generated file in the icons folder.
pub fn export_statement(file_name: &str, icons_folder: &str) -> String {
  format!("export * from './{icons_folder}/{file_name}';\n")
}

/// Type-helper header of the barrel file: imports the icon interface and
/// exports a subset helper over icon name literals.
pub fn type_helper(interface_name: &str, icons_folder: &str, model_file_name: &str) -> String {
  format!(
    "import {{ {interface_name} }} from './{icons_folder}/{model_file_name}';\nexport type {interface_name}NameSubset<T extends Readonly<{interface_name}[]>> = T[number]['name'];\n"
  )
}

/// Aggregate file referencing every icon constant. Import paths resolve
/// within the icons folder; names are component-cased in TSX mode to match
/// the generated constants.
pub fn complete_icon_set(
  defs: &[SvgDefinition],
  interface_name: Option<&str>,
  model_file_name: &str,
  tsx: bool,
) -> String {
  let mut out = String::new();
  if let Some(interface) = interface_name {
    out.push_str(&format!("import {{ {interface} }} from './{model_file_name}';\n"));
  }
  let names: Vec<String> = defs
    .iter()
    .map(|d| if tsx { capitalize_first(&d.variable_name) } else { d.variable_name.clone() })
    .collect();
  for (def, name) in defs.iter().zip(&names) {
    out.push_str(&format!("import {{ {name} }} from './{}';\n", def.output_name()));
  }
  out.push('\n');
  let annotation = interface_name.map(|i| format!(": {i}[]")).unwrap_or_default();
  out.push_str(&format!("export const completeIconSet{annotation} = [{}];\n", names.join(", ")));
  out
}
