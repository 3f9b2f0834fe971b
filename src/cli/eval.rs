use super::utils::write_output;
use crate::error::Result;
use crate::expr::{evaluate_source, ConstantTable};

/// Arguments for the eval command
#[derive(Debug, Clone)]
pub struct EvalArgs {
    pub expression: String,
    pub defines: Vec<(String, i64)>,
}

/// Parse a `name=value` definition from the command line
pub fn parse_define(raw: &str) -> std::result::Result<(String, i64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("constant name must not be empty".to_string());
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid value for `{}`: {}", name, e))?;
    Ok((name.to_string(), value))
}

/// Run the eval command
pub fn eval(args: &EvalArgs) -> Result<()> {
    let mut constants = ConstantTable::new();
    for (name, value) in &args.defines {
        constants.define(name, *value)?;
    }
    let value = evaluate_source(&args.expression, &constants)?;
    write_output(&value.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_define() {
        assert_eq!(parse_define("x=10").unwrap(), ("x".to_string(), 10));
        assert_eq!(parse_define(" y = -5 ").unwrap(), ("y".to_string(), -5));
        assert!(parse_define("x").is_err());
        assert!(parse_define("=1").is_err());
        assert!(parse_define("x=ten").is_err());
    }
}
