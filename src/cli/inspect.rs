use super::utils::{to_json, write_output};
use crate::ast::{self, Node};
use crate::error::Result;
use crate::markup;

/// Run the inspect command: dump the lowered node tree as JSON
pub fn inspect(input_path: &std::path::Path) -> Result<()> {
    let root = markup::parse_file(input_path)?;

    let nodes = root
        .children
        .iter()
        .map(ast::lower)
        .collect::<Result<Vec<Node>>>()?;

    write_output(&to_json(&nodes)?, None)
}
