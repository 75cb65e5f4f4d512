/* src/cli/codegen/src/lib.rs */

mod typescript;

pub mod definition;

pub use definition::{SvgDefinition, capitalize_first, to_camel_case};
pub use typescript::{
  complete_icon_set, enum_definition, export_statement, interface_definition, svg_constant,
  tsx_constant, type_definition, type_helper,
};
