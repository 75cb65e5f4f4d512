/* src/cli/codegen/src/typescript/mod.rs */

mod snippets;

#[cfg(test)]
mod tests;

pub use snippets::{
  complete_icon_set, enum_definition, export_statement, interface_definition, svg_constant,
  tsx_constant, type_definition, type_helper,
};
