//! Parameter contracts for catalog endpoints
//!
//! A [`ParamSpec`] is the single description of one tool argument. The same
//! value drives argument validation and the advertised JSON Schema, so the
//! two can never disagree.

use serde_json::{json, Map, Number, Value};

/// Path values rejected because URL normalization would rewrite the path
const DOT_SEGMENTS: &[&str] = &[".", ".."];

/// Primitive type tag of a parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamType {
    /// One URL path segment: non-blank and never a `.`/`..` dot segment
    Segment,
    String,
    Number { min: Option<f64>, max: Option<f64> },
    Boolean,
    StringArray,
    /// One value out of a closed set
    Enum(&'static [&'static str]),
    /// One or more values out of a closed set
    EnumArray(&'static [&'static str]),
}

/// Declaration of a single tool argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamType,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    const fn new(name: &'static str, kind: ParamType, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }

    /// Path segment parameter; always a required string
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Segment, description).required()
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::String, description)
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Number { min: None, max: None }, description)
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Boolean, description)
    }

    pub const fn string_array(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::StringArray, description)
    }

    pub const fn one_of(
        name: &'static str,
        values: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self::new(name, ParamType::Enum(values), description)
    }

    pub const fn any_of(
        name: &'static str,
        values: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self::new(name, ParamType::EnumArray(values), description)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Lower bound for a number parameter; no-op for other types
    pub const fn min(mut self, min: f64) -> Self {
        if let ParamType::Number { max, .. } = self.kind {
            self.kind = ParamType::Number {
                min: Some(min),
                max,
            };
        }
        self
    }

    /// Upper bound for a number parameter; no-op for other types
    pub const fn max(mut self, max: f64) -> Self {
        if let ParamType::Number { min, .. } = self.kind {
            self.kind = ParamType::Number {
                min,
                max: Some(max),
            };
        }
        self
    }

    /// JSON Schema fragment advertised for this parameter
    pub fn json_schema(&self) -> Value {
        let mut schema = match self.kind {
            ParamType::Segment => json!({
                "type": "string",
                "minLength": 1,
                "pattern": "\\S",
                "not": { "enum": DOT_SEGMENTS }
            }),
            ParamType::String => json!({ "type": "string" }),
            ParamType::Number { min, max } => {
                let mut s = json!({ "type": "number" });
                if let Some(min) = min {
                    s["minimum"] = bound(min);
                }
                if let Some(max) = max {
                    s["maximum"] = bound(max);
                }
                s
            }
            ParamType::Boolean => json!({ "type": "boolean" }),
            ParamType::StringArray => json!({
                "type": "array",
                "items": { "type": "string" }
            }),
            ParamType::Enum(values) => json!({
                "type": "string",
                "enum": values
            }),
            ParamType::EnumArray(values) => json!({
                "type": "array",
                "items": { "type": "string", "enum": values }
            }),
        };
        schema["description"] = Value::String(self.description.to_string());
        schema
    }

    /// Check a present, non-null argument against this declaration
    pub fn check(&self, value: &Value) -> Result<QueryValue, String> {
        match self.kind {
            ParamType::Segment => self.check_segment(value).map(QueryValue::Text),
            ParamType::String => value
                .as_str()
                .map(|s| QueryValue::Text(s.to_string()))
                .ok_or_else(|| self.type_error("a string", value)),
            ParamType::Number { min, max } => {
                let number = match value {
                    Value::Number(n) => n,
                    _ => return Err(self.type_error("a number", value)),
                };
                let as_f64 = number.as_f64().unwrap_or(f64::NAN);
                if let Some(min) = min {
                    if as_f64 < min {
                        return Err(format!("argument '{}' must be >= {}", self.name, min));
                    }
                }
                if let Some(max) = max {
                    if as_f64 > max {
                        return Err(format!("argument '{}' must be <= {}", self.name, max));
                    }
                }
                Ok(QueryValue::Number(number.clone()))
            }
            ParamType::Boolean => value
                .as_bool()
                .map(QueryValue::Bool)
                .ok_or_else(|| self.type_error("a boolean", value)),
            ParamType::StringArray => self.check_string_array(value, None),
            ParamType::Enum(allowed) => {
                let s = value
                    .as_str()
                    .ok_or_else(|| self.type_error("a string", value))?;
                if allowed.contains(&s) {
                    Ok(QueryValue::Text(s.to_string()))
                } else {
                    Err(self.enum_error(s, allowed))
                }
            }
            ParamType::EnumArray(allowed) => self.check_string_array(value, Some(allowed)),
        }
    }

    /// Check a value bound for a path segment
    pub fn check_segment(&self, value: &Value) -> Result<String, String> {
        let text = value
            .as_str()
            .ok_or_else(|| self.type_error("a string", value))?;
        if text.trim().is_empty() {
            return Err(format!("argument '{}' must not be empty", self.name));
        }
        // URL parsers collapse dot segments, which would change the endpoint
        if DOT_SEGMENTS.contains(&text) {
            return Err(format!("argument '{}' must not be '{}'", self.name, text));
        }
        Ok(text.to_string())
    }

    fn check_string_array(
        &self,
        value: &Value,
        allowed: Option<&'static [&'static str]>,
    ) -> Result<QueryValue, String> {
        let items = value
            .as_array()
            .ok_or_else(|| self.type_error("an array of strings", value))?;

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let s = item
                .as_str()
                .ok_or_else(|| self.type_error("an array of strings", value))?;
            if let Some(allowed) = allowed {
                if !allowed.contains(&s) {
                    return Err(self.enum_error(s, allowed));
                }
            }
            out.push(s.to_string());
        }
        Ok(QueryValue::List(out))
    }

    fn type_error(&self, expected: &str, got: &Value) -> String {
        format!(
            "argument '{}' must be {}, got {}",
            self.name,
            expected,
            json_type_name(got)
        )
    }

    fn enum_error(&self, got: &str, allowed: &[&str]) -> String {
        format!(
            "argument '{}' has unsupported value '{}' (expected one of: {})",
            self.name,
            got,
            allowed.join(", ")
        )
    }
}

/// A validated query argument
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Number(Number),
    Bool(bool),
    List(Vec<String>),
}

impl QueryValue {
    /// Append `key=value` pairs; lists become one repeated key per element
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            QueryValue::Text(s) => out.push((key.to_string(), s.clone())),
            QueryValue::Number(n) => out.push((key.to_string(), n.to_string())),
            QueryValue::Bool(b) => out.push((key.to_string(), b.to_string())),
            QueryValue::List(items) => {
                out.extend(items.iter().map(|item| (key.to_string(), item.clone())));
            }
        }
    }
}

/// Arguments of one invocation after validation against its endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArgs {
    /// Path parameter values in declaration order
    pub path: Vec<(&'static str, String)>,

    /// Query parameter values in declaration order; absent and null omitted
    pub query: Vec<(&'static str, QueryValue)>,
}

impl ValidatedArgs {
    /// Flatten the query arguments into wire pairs
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.query {
            value.push_pairs(key, &mut pairs);
        }
        pairs
    }
}

/// Borrow the argument object, treating absent/null arguments as empty
pub(crate) fn argument_object(args: &Value) -> Result<Option<&Map<String, Value>>, String> {
    match args {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(format!(
            "arguments must be an object, got {}",
            json_type_name(other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Whole-number bounds are advertised as integers (100, not 100.0)
fn bound(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        json!(v as i64)
    } else {
        json!(v)
    }
}
