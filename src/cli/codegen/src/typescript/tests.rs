/* src/cli/codegen/src/typescript/tests.rs */

use crate::definition::SvgDefinition;

use super::snippets::{
  complete_icon_set, enum_definition, export_statement, interface_definition, svg_constant,
  tsx_constant, type_definition, type_helper,
};

fn defs() -> Vec<SvgDefinition> {
  vec![
    SvgDefinition::new("nav", "home", "<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>".to_string()),
    SvgDefinition::new("nav", "arrow-left", "<svg><path/></svg>".to_string()),
  ]
}

#[test]
fn svg_constant_wraps_markup_as_string() {
  let ts = svg_constant(&defs()[0]);
  assert_eq!(
    ts,
    "export const navHome = {\n  name: 'home',\n  data: '<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>',\n};\n"
  );
}

#[test]
fn svg_constant_escapes_single_quotes() {
  let def = SvgDefinition::new("ui", "quote", "<svg aria-label='q'/>".to_string());
  let ts = svg_constant(&def);
  assert!(ts.contains("data: '<svg aria-label=\\'q\\'/>'"));
}

#[test]
fn tsx_constant_embeds_jsx_element() {
  let def = defs()[0].component_cased();
  let ts = tsx_constant(&def);
  assert_eq!(
    ts,
    "export const NavHome = {\n  name: 'home',\n  data: (\n    <svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>\n  ),\n};\n"
  );
}

#[test]
fn tsx_constant_camelizes_kebab_attributes() {
  let def = SvgDefinition::new(
    "ui",
    "pin",
    "<svg stroke-width=\"2\" stroke-linecap=\"round\"><use xlink:href=\"#p\"/></svg>".to_string(),
  )
  .component_cased();
  let ts = tsx_constant(&def);
  assert!(ts.contains("strokeWidth=\"2\""));
  assert!(ts.contains("strokeLinecap=\"round\""));
  assert!(ts.contains("xlinkHref=\"#p\""));
  assert!(!ts.contains("stroke-width"));
}

#[test]
fn tsx_constant_preserves_data_and_aria_attributes() {
  let def = SvgDefinition::new(
    "ui",
    "tag",
    "<svg aria-hidden=\"true\" data-testid=\"tag\"/>".to_string(),
  )
  .component_cased();
  let ts = tsx_constant(&def);
  assert!(ts.contains("aria-hidden=\"true\""));
  assert!(ts.contains("data-testid=\"tag\""));
}

#[test]
fn tsx_constant_rewrites_class_attribute() {
  let def = SvgDefinition::new("ui", "dot", "<svg class=\"spin\"/>".to_string()).component_cased();
  assert!(tsx_constant(&def).contains("className=\"spin\""));
}

#[test]
fn tsx_constant_leaves_camel_attributes_alone() {
  let def = SvgDefinition::new("ui", "box", "<svg viewBox=\"0 0 16 16\"/>".to_string())
    .component_cased();
  assert!(tsx_constant(&def).contains("viewBox=\"0 0 16 16\""));
}

#[test]
fn type_definition_unions_names() {
  let ts = type_definition("Icon", &defs());
  assert_eq!(ts, "export type IconNameType = 'home' | 'arrow-left';\n");
}

#[test]
fn type_definition_empty_set_falls_back_to_string() {
  assert_eq!(type_definition("Icon", &[]), "export type IconNameType = string;\n");
}

#[test]
fn interface_definition_narrowed_name() {
  let ts = interface_definition("Icon", true, false);
  assert_eq!(ts, "export interface Icon {\n  name: IconNameType;\n  data: string;\n}\n");
}

#[test]
fn interface_definition_without_type_alias() {
  let ts = interface_definition("Icon", false, false);
  assert_eq!(ts, "export interface Icon {\n  name: string;\n  data: string;\n}\n");
}

#[test]
fn interface_definition_tsx_data_is_element() {
  let ts = interface_definition("Icon", true, true);
  assert!(ts.contains("data: JSX.Element;"));
}

#[test]
fn enum_definition_members() {
  let ts = enum_definition("Icon", &defs());
  assert_eq!(
    ts,
    "export enum IconName {\n  NavHome = 'home',\n  NavArrowLeft = 'arrow-left',\n}\n"
  );
}

#[test]
fn export_statement_resolves_against_icons_folder() {
  assert_eq!(
    export_statement("nav-home.icon", "icons"),
    "export * from './icons/nav-home.icon';\n"
  );
}

#[test]
fn type_helper_imports_interface_from_model() {
  let ts = type_helper("Icon", "icons", "icons.model");
  assert_eq!(
    ts,
    "import { Icon } from './icons/icons.model';\nexport type IconNameSubset<T extends Readonly<Icon[]>> = T[number]['name'];\n"
  );
}

#[test]
fn complete_icon_set_typed() {
  let ts = complete_icon_set(&defs(), Some("Icon"), "icons.model", false);
  assert_eq!(
    ts,
    "import { Icon } from './icons.model';\n\
     import { navHome } from './nav-home.icon';\n\
     import { navArrowLeft } from './nav-arrow-left.icon';\n\n\
     export const completeIconSet: Icon[] = [navHome, navArrowLeft];\n"
  );
}

#[test]
fn complete_icon_set_untyped_has_no_model_import() {
  let ts = complete_icon_set(&defs(), None, "icons.model", false);
  assert!(!ts.contains("icons.model"));
  assert!(ts.contains("export const completeIconSet = [navHome, navArrowLeft];"));
}

#[test]
fn complete_icon_set_tsx_uses_component_names() {
  let ts = complete_icon_set(&defs(), Some("Icon"), "icons.model", true);
  assert!(ts.contains("import { NavHome } from './nav-home.icon';"));
  assert!(ts.contains("export const completeIconSet: Icon[] = [NavHome, NavArrowLeft];"));
}
