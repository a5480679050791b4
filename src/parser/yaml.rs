//! Full YAML strategy backed by serde_yaml.

use super::FrontMatterParser;
use serde_yaml::Value;

pub struct YamlParser;

impl FrontMatterParser for YamlParser {
    fn parse(&self, fm_lines: &[&str]) -> Result<Value, String> {
        let blob = fm_lines.join("\n");
        match serde_yaml::from_str::<Value>(&blob) {
            // An empty or comment-only block parses to null; normalize to
            // an empty mapping so schema checks see "everything missing"
            // rather than "not a mapping".
            Ok(Value::Null) => Ok(Value::Mapping(serde_yaml::Mapping::new())),
            Ok(value) => Ok(value),
            Err(err) => Err(format!("Invalid YAML front matter: {}", err)),
        }
    }
}
