//! Row-to-document compiler
//!
//! Walks a schema table once, top to bottom, and assembles one JSON-LD
//! object tree per `@id` boundary. Trees are serialized only at render
//! time, so the emitted JSON never carries dangling commas.

mod node;
mod render;


pub use node::{Node, Object};
pub use render::{close_marker, open_marker, to_pretty_json};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Config, OutputFormat, Row, Table};

/// Non-fatal notices produced while compiling. The document is still
/// produced; these explain what was dropped or rearranged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("row {row}: reference '{property}' has no following row with a Type; @type omitted")]
    MissingReferenceType { row: usize, property: String },

    #[error("row {row}: nested '{property}' closed '{open}' first; only one level is supported")]
    NestingLimit {
        row: usize,
        open: String,
        property: String,
    },

    #[error("row {row}: value '{value}' has no property and was skipped")]
    OrphanValue { row: usize, value: String },

    #[error("row {row}: '{key}' was already set in this object; the later value wins")]
    DuplicateKey { row: usize, key: String },

    #[error("row {row}: '{property}' list had {dropped} empty item(s), which were dropped")]
    EmptyListItems {
        row: usize,
        property: String,
        dropped: usize,
    },
}

impl Diagnostic {
    pub fn row(&self) -> usize {
        match self {
            Self::MissingReferenceType { row, .. }
            | Self::NestingLimit { row, .. }
            | Self::OrphanValue { row, .. }
            | Self::DuplicateKey { row, .. }
            | Self::EmptyListItems { row, .. } => *row,
        }
    }
}

/// Result of compiling a table: the finished blocks plus any notices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    blocks: Vec<Object>,
    diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn blocks(&self) -> &[Object] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Pretty-printed JSON for each block, tab-indented
    pub fn json_blocks(&self) -> serde_json::Result<Vec<String>> {
        self.blocks.iter().map(to_pretty_json).collect()
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        Ok(render::render(&self.json_blocks()?, format))
    }
}

/// Compile `table` and render it in the configured output format
pub fn compile_to_string(table: &Table, config: &Config) -> serde_json::Result<String> {
    Compiler::new(config)
        .compile(table)
        .render(config.output.format)
}

pub struct Compiler<'a> {
    config: &'a Config,
}

impl<'a> Compiler<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn compile(&self, table: &Table) -> Compilation {
        let mut session = Session::new(self.config);

        for (number, row) in table.numbered() {
            // Only lookahead in the model: a reference may read the next row's Type
            session.apply(number, row, table.get(number + 1));
        }

        let compilation = session.finish();
        info!(
            "Compiled {} rows into {} block(s) with {} diagnostic(s)",
            table.len(),
            compilation.blocks.len(),
            compilation.diagnostics.len()
        );
        compilation
    }
}

/// Where the current block is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    /// The block has its `@context` preamble but no `@id` yet
    NoBlockOpen,
    /// An `@id` was written; the next id starts a new block
    BlockOpen,
}

/// The single nested object a property-only row opens
#[derive(Debug)]
struct NestedObject {
    property: String,
    object: Object,
}

struct Session<'a> {
    config: &'a Config,
    blocks: Vec<Object>,
    root: Object,
    nested: Option<NestedObject>,
    state: BlockState,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Session<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            config,
            blocks: Vec::new(),
            root: Self::preamble(config),
            nested: None,
            state: BlockState::NoBlockOpen,
            diagnostics: Vec::new(),
        }
    }

    fn preamble(config: &Config) -> Object {
        let mut root = Object::new();
        root.insert("@context".to_string(), Node::string(&config.context));
        root
    }

    fn apply(&mut self, number: usize, row: &Row, next: Option<&Row>) {
        if row.is_blank() {
            return;
        }

        if let Some(id) = row.id() {
            if self.state == BlockState::BlockOpen {
                self.close_block();
            } else {
                self.close_nested();
            }
            debug!("row {number}: @id {id}");
            self.insert_root(number, "@id", Node::string(id));
            self.state = BlockState::BlockOpen;
        }

        if let Some(type_name) = row.type_name() {
            self.insert(number, "@type", Node::string(type_name));
        }

        match (row.property(), row.value()) {
            (property, Some(value)) if row.is_reference() => {
                self.reference(number, property, value, next);
            }
            (Some(property), None) => self.open_nested(number, property),
            (Some(property), Some(value)) => self.property_value(number, property, value),
            (None, Some(value)) => self.diagnose(Diagnostic::OrphanValue {
                row: number,
                value: value.to_string(),
            }),
            (None, None) => {}
        }
    }

    fn reference(
        &mut self,
        number: usize,
        property: Option<&str>,
        value: &str,
        next: Option<&Row>,
    ) {
        let Some(property) = property else {
            self.diagnose(Diagnostic::OrphanValue {
                row: number,
                value: value.to_string(),
            });
            return;
        };

        let mut pointer = Object::new();
        if self.config.references.include_type {
            match next.and_then(Row::type_name) {
                Some(type_name) => {
                    pointer.insert("@type".to_string(), Node::string(type_name));
                }
                None => self.diagnose(Diagnostic::MissingReferenceType {
                    row: number,
                    property: property.to_string(),
                }),
            }
        }
        pointer.insert("@id".to_string(), Node::string(value));

        debug!("row {number}: {property} -> {value}");
        self.insert(number, property, pointer.into());
    }

    fn open_nested(&mut self, number: usize, property: &str) {
        if let Some(open) = self.nested.as_ref().map(|nested| nested.property.clone()) {
            self.diagnose(Diagnostic::NestingLimit {
                row: number,
                open,
                property: property.to_string(),
            });
            self.close_nested();
        }

        debug!("row {number}: open {property}");
        self.nested = Some(NestedObject {
            property: property.to_string(),
            object: Object::new(),
        });
    }

    fn property_value(&mut self, number: usize, property: &str, value: &str) {
        if !self.config.is_array_property(property) {
            self.insert(number, property, Node::string(value));
            return;
        }

        let (items, empty): (Vec<&str>, Vec<&str>) = value
            .split(',')
            .map(str::trim)
            .partition(|item| !item.is_empty());
        if !empty.is_empty() {
            self.diagnose(Diagnostic::EmptyListItems {
                row: number,
                property: property.to_string(),
                dropped: empty.len(),
            });
        }
        self.insert(number, property, Node::strings(items));
    }

    /// Insert into the open nested object, or the block root if none is open
    fn insert(&mut self, number: usize, key: &str, value: Node) {
        let target = match &mut self.nested {
            Some(nested) => &mut nested.object,
            None => &mut self.root,
        };
        if target.insert(key.to_string(), value).is_some() {
            self.diagnose(Diagnostic::DuplicateKey {
                row: number,
                key: key.to_string(),
            });
        }
    }

    fn insert_root(&mut self, number: usize, key: &str, value: Node) {
        if self.root.insert(key.to_string(), value).is_some() {
            self.diagnose(Diagnostic::DuplicateKey {
                row: number,
                key: key.to_string(),
            });
        }
    }

    fn close_nested(&mut self) {
        if let Some(NestedObject { property, object }) = self.nested.take() {
            // A property written before the object opened loses to the object
            self.root.insert(property, object.into());
        }
    }

    fn close_block(&mut self) {
        self.close_nested();
        let finished = std::mem::replace(&mut self.root, Self::preamble(self.config));
        self.blocks.push(finished);
        self.state = BlockState::NoBlockOpen;
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> Compilation {
        self.close_block();
        Compilation {
            blocks: self.blocks,
            diagnostics: self.diagnostics,
        }
    }
}
