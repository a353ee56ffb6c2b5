//! XDatenfelder 2.0 schema parsing.
//!
//! The lint pipeline only talks to [`SchemaParser`]. [`XDatenfelderParser`]
//! is the bundled implementation: it reads a `stammdatenschema` document,
//! walks its data fields, data groups and rules in document order and records
//! shallow completeness findings as [`Warning`]s. It does not implement the
//! full XDatenfelder rule set.

use std::collections::HashSet;

use roxmltree::{Document, Node};
use serde::Deserialize;

use crate::error::{CollaboratorError, ParserError};
use crate::warning::{Warning, WarningBuckets, WarningCollection};

pub const ROOT_ELEMENT: &str = "xdatenfelder.stammdatenschema.0102";

/// A parsed document: what was found, and what was wrong with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMessage {
    pub schema: SchemaSummary,
    pub warnings: WarningCollection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSummary {
    pub identifier: String,
    pub data_fields: usize,
    pub data_groups: usize,
    pub rules: usize,
}

/// Turns raw document text into a [`SchemaMessage`].
///
/// Returning [`CollaboratorError::Parse`] means no document could be produced.
/// [`CollaboratorError::Internal`] is reserved for faults outside that
/// contract and aborts a lint run.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<SchemaMessage, CollaboratorError>;
}

/// Content of a `praezisierung` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConstraints {
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub pattern: Option<String>,
}

impl InputConstraints {
    pub fn parse(value: &str) -> Option<Self> {
        serde_json::from_str(value).ok()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XDatenfelderParser;

impl XDatenfelderParser {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaParser for XDatenfelderParser {
    fn parse(&self, text: &str) -> Result<SchemaMessage, CollaboratorError> {
        let document = Document::parse(text).map_err(|e| ParserError::new(e.to_string()))?;

        let root = document.root_element();
        if root.tag_name().name() != ROOT_ELEMENT {
            return Err(ParserError::new(format!(
                "Expected root element <{}>, found <{}>",
                ROOT_ELEMENT,
                root.tag_name().name()
            ))
            .into());
        }

        let schema = first_child(root, "stammdatenschema")
            .ok_or_else(|| ParserError::new("Missing element <stammdatenschema>"))?;

        let mut walker = Walker::default();
        let summary = walker.visit_schema(schema)?;

        Ok(SchemaMessage {
            schema: summary,
            warnings: walker.warnings,
        })
    }
}

#[derive(Default)]
struct Walker {
    warnings: WarningCollection,
    seen_fields: HashSet<String>,
    seen_groups: HashSet<String>,
    seen_rules: HashSet<String>,
}

impl Walker {
    fn visit_schema(&mut self, schema: Node) -> Result<SchemaSummary, ParserError> {
        let identifier = identifier_of(schema)?;

        for attribute in ["name", "bezeichnungEingabe"] {
            if text_of(schema, attribute).is_none() {
                self.warnings
                    .schema_warnings
                    .push(Warning::missing_attribute(&identifier, attribute));
            }
        }

        self.visit_rules(schema)?;
        self.visit_structure(schema)?;

        Ok(SchemaSummary {
            identifier,
            data_fields: self.seen_fields.len(),
            data_groups: self.seen_groups.len(),
            rules: self.seen_rules.len(),
        })
    }

    /// Descend into `struktur/enthaelt` of a schema or group.
    fn visit_structure(&mut self, parent: Node) -> Result<(), ParserError> {
        for structure in children(parent, "struktur") {
            for contained in children(structure, "enthaelt") {
                for element in contained.children().filter(Node::is_element) {
                    match element.tag_name().name() {
                        "datenfeld" => self.visit_field(element)?,
                        "datenfeldgruppe" => self.visit_group(element)?,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    fn visit_field(&mut self, field: Node) -> Result<(), ParserError> {
        let identifier = identifier_of(field)?;
        if !self.seen_fields.insert(identifier.clone()) {
            return Ok(());
        }

        let bucket = &mut self.warnings.data_field_warnings;
        push_missing(bucket, field, &identifier, &["name", "bezeichnungEingabe"]);

        if let Some(value) = text_of(field, "praezisierung")
            && InputConstraints::parse(value).is_none()
        {
            bucket.push(
                &identifier,
                Warning::invalid_input_constraints(&identifier, value),
            );
        }

        self.visit_rules(field)
    }

    fn visit_group(&mut self, group: Node) -> Result<(), ParserError> {
        let identifier = identifier_of(group)?;
        if !self.seen_groups.insert(identifier.clone()) {
            return Ok(());
        }

        push_missing(
            &mut self.warnings.data_group_warnings,
            group,
            &identifier,
            &["name", "bezeichnungEingabe"],
        );

        self.visit_rules(group)?;
        self.visit_structure(group)
    }

    fn visit_rules(&mut self, parent: Node) -> Result<(), ParserError> {
        for rule in children(parent, "regel") {
            let identifier = identifier_of(rule)?;
            if !self.seen_rules.insert(identifier.clone()) {
                continue;
            }

            push_missing(
                &mut self.warnings.rule_warnings,
                rule,
                &identifier,
                &["name", "script"],
            );
        }
        Ok(())
    }
}

fn push_missing(bucket: &mut WarningBuckets, node: Node, identifier: &str, attributes: &[&str]) {
    for attribute in attributes {
        if text_of(node, attribute).is_none() {
            bucket.push(identifier, Warning::missing_attribute(identifier, *attribute));
        }
    }
}

/// `identifikation/id`, suffixed with `V<version>` when a version is given.
fn identifier_of(node: Node) -> Result<String, ParserError> {
    let element = node.tag_name().name();
    let identification = first_child(node, "identifikation").ok_or_else(|| {
        ParserError::new(format!("Missing element <identifikation> in <{}>", element))
    })?;
    let id = text_of(identification, "id")
        .ok_or_else(|| ParserError::new(format!("Missing element <id> in <{}>", element)))?;

    Ok(match text_of(identification, "version") {
        Some(version) => format!("{}V{}", id, version),
        None => id.to_string(),
    })
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn first_child<'a, 'input: 'a>(node: Node<'a, 'input>, name: &'a str) -> Option<Node<'a, 'input>> {
    children(node, name).next()
}

/// Trimmed text of a child element, `None` when absent or blank.
fn text_of<'a, 'input: 'a>(node: Node<'a, 'input>, name: &'a str) -> Option<&'a str> {
    first_child(node, name)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
