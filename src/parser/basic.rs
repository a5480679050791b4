//! Minimal fallback strategy.
//!
//! Recognizes the subset the recipe headers use in practice:
//! - `key: value` scalars (bool, integer, quoted or bare string)
//! - `key: [a, b]` inline lists
//! - block lists (`key:` followed by `- item` lines)
//!
//! Capability limitation, by contract: no nested mappings and no multi-line
//! scalars. Anything outside the subset is a parse error, not a silent
//! best-effort.

use super::FrontMatterParser;
use serde_yaml::{Mapping, Value};

pub struct BasicParser;

fn scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    match trimmed {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    Value::String(trimmed.trim_matches('"').to_string())
}

fn inline_list(raw: &str) -> Value {
    let inner = raw.trim().trim_start_matches('[').trim_end_matches(']');
    let items: Vec<Value> = inner
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(scalar)
        .collect();
    Value::Sequence(items)
}

impl FrontMatterParser for BasicParser {
    fn parse(&self, fm_lines: &[&str]) -> Result<Value, String> {
        let mut map = Mapping::new();
        let mut pending_list: Option<(String, Vec<Value>)> = None;

        for (idx, raw) in fm_lines.iter().enumerate() {
            let line_no = idx + 1;
            let stripped = raw.trim();
            if stripped.is_empty() {
                continue;
            }

            if let Some(item) = stripped.strip_prefix("- ") {
                match pending_list.as_mut() {
                    Some((_, items)) => {
                        items.push(scalar(item));
                        continue;
                    }
                    None => {
                        return Err(format!(
                            "Invalid YAML front matter: invalid line {}",
                            line_no
                        ))
                    }
                }
            }

            // Any non-item line closes an open block list
            if let Some((key, items)) = pending_list.take() {
                map.insert(Value::String(key), Value::Sequence(items));
            }

            let Some((key, value)) = stripped.split_once(':') else {
                return Err(format!(
                    "Invalid YAML front matter: invalid line {}",
                    line_no
                ));
            };
            let key = key.trim().to_string();
            let value = value.trim();

            if value.is_empty() {
                pending_list = Some((key, Vec::new()));
            } else if value.starts_with('[') && value.ends_with(']') {
                map.insert(Value::String(key), inline_list(value));
            } else {
                map.insert(Value::String(key), scalar(value));
            }
        }

        if let Some((key, items)) = pending_list {
            map.insert(Value::String(key), Value::Sequence(items));
        }

        Ok(Value::Mapping(map))
    }
}
