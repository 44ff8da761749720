//! Endpoint catalog
//!
//! Maps tool names to REST path templates and parameter contracts. This is
//! the only place endpoint shapes are described; tool discovery and
//! argument validation both read from here.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use crate::api::endpoints::ENDPOINTS;
use crate::api::params::{argument_object, ParamSpec, ValidatedArgs};
use crate::error::{CatalogError, McpError};

/// One REST endpoint exposed as a tool
#[derive(Debug)]
pub struct EndpointSpec {
    /// Unique tool name
    pub name: &'static str,

    /// Human-readable description shown to the agent
    pub description: &'static str,

    /// Path with `{name}` placeholders, relative to the API origin
    pub path: &'static str,

    /// Parameters substituted into `path`, in template order
    pub path_params: &'static [ParamSpec],

    /// Parameters forwarded as the query string
    pub query_params: &'static [ParamSpec],
}

impl EndpointSpec {
    /// All parameters, path first
    pub fn params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.path_params.iter().chain(self.query_params.iter())
    }

    fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params().find(|p| p.name == name)
    }

    /// Validate raw tool arguments into a typed argument record.
    ///
    /// Rejects unknown names, missing required values, type mismatches,
    /// out-of-range numbers and non-whitelisted enum values. `null` is
    /// treated as absent.
    pub fn validate(&self, args: &Value) -> Result<ValidatedArgs, McpError> {
        let empty = Map::new();
        let map = argument_object(args)
            .map_err(McpError::invalid_arguments)?
            .unwrap_or(&empty);

        let mut unknown: Vec<&str> = map
            .keys()
            .map(String::as_str)
            .filter(|key| self.param(key).is_none())
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(McpError::invalid_arguments(format!(
                "unknown argument(s) for {}: {}",
                self.name,
                unknown.join(", ")
            )));
        }

        let mut validated = ValidatedArgs::default();

        for spec in self.path_params {
            let value = present(map, spec.name).ok_or_else(|| missing(spec))?;
            let text = spec
                .check_segment(value)
                .map_err(McpError::invalid_arguments)?;
            validated.path.push((spec.name, text));
        }

        for spec in self.query_params {
            match present(map, spec.name) {
                Some(value) => {
                    let checked = spec.check(value).map_err(McpError::invalid_arguments)?;
                    validated.query.push((spec.name, checked));
                }
                None if spec.required => return Err(missing(spec)),
                None => {}
            }
        }

        Ok(validated)
    }

    /// Substitute path values into the template, escaping each segment
    pub fn resolve_path(&self, args: &ValidatedArgs) -> String {
        let mut path = self.path.to_string();
        for (name, value) in &args.path {
            let placeholder = format!("{{{}}}", name);
            path = path.replace(&placeholder, &urlencoding::encode(value));
        }
        path
    }

    /// JSON Schema for the tool's input, built from the same parameter specs
    /// used by [`EndpointSpec::validate`]
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params()
            .map(|p| (p.name.to_string(), p.json_schema()))
            .collect();

        let required: Vec<&str> = self
            .params()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let mut schema = json!({
            "type": "object",
            "properties": properties,
            "additionalProperties": false
        });
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }

    /// Check that placeholders and declared path parameters match exactly
    fn check_template(&self) -> Result<(), CatalogError> {
        let placeholders = placeholders(self.path).ok_or_else(|| {
            CatalogError::UnterminatedPlaceholder {
                tool: self.name.to_string(),
                template: self.path.to_string(),
            }
        })?;

        for placeholder in &placeholders {
            if !self.path_params.iter().any(|p| p.name == *placeholder) {
                return Err(CatalogError::UndeclaredPlaceholder {
                    tool: self.name.to_string(),
                    placeholder: placeholder.to_string(),
                });
            }
        }

        for param in self.path_params {
            if !placeholders.contains(&param.name) {
                return Err(CatalogError::UnusedPathParam {
                    tool: self.name.to_string(),
                    param: param.name.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn present<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    map.get(name).filter(|v| !v.is_null())
}

fn missing(spec: &ParamSpec) -> McpError {
    McpError::invalid_arguments(format!("missing required argument '{}'", spec.name))
}

/// Names inside `{...}` in a template; `None` if a brace is left open
fn placeholders(template: &str) -> Option<Vec<&str>> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let end = after.find('}')?;
        names.push(&after[..end]);
        rest = &after[end + 1..];
    }
    Some(names)
}

/// Read-only index of endpoints by tool name
#[derive(Debug)]
pub struct Catalog {
    endpoints: &'static [EndpointSpec],
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// The full Unusual Whales endpoint catalog
    pub fn builtin() -> crate::error::Result<Self> {
        Ok(Self::from_specs(ENDPOINTS)?)
    }

    /// Build a catalog, checking name uniqueness and path templates
    pub fn from_specs(endpoints: &'static [EndpointSpec]) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(endpoints.len());
        for (i, endpoint) in endpoints.iter().enumerate() {
            endpoint.check_template()?;
            if index.insert(endpoint.name, i).is_some() {
                return Err(CatalogError::DuplicateTool {
                    name: endpoint.name.to_string(),
                });
            }
        }
        Ok(Self { endpoints, index })
    }

    /// Look up an endpoint by tool name
    pub fn get(&self, name: &str) -> Option<&'static EndpointSpec> {
        let endpoints = self.endpoints;
        self.index.get(name).map(|&i| &endpoints[i])
    }

    /// Endpoints in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &'static EndpointSpec> {
        let endpoints: &'static [EndpointSpec] = self.endpoints;
        endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
