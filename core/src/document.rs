use crate::error::{Result, TfidfError};
use crate::ranking::ResultTable;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One submitted document. Both fields may be missing; JSON `null` counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl DocumentDescriptor {
    pub fn new<F: Into<String>, C: Into<String>>(filename: F, content: C) -> Self {
        Self { filename: Some(filename.into()), content: Some(content.into()) }
    }

    /// Filename, or `unnamed_doc_<index>` when none was supplied.
    pub fn name_or_placeholder(&self, index: usize) -> String {
        self.filename.clone().unwrap_or_else(|| placeholder_name(index))
    }

    pub fn content_or_empty(&self) -> &str { self.content.as_deref().unwrap_or("") }
}

pub fn placeholder_name(index: usize) -> String { format!("unnamed_doc_{index}") }

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    Single(DocumentDescriptor),
    Batch(Vec<DocumentDescriptor>),
}

fn descriptor_from_value(value: Value, position: Option<usize>) -> Result<DocumentDescriptor> {
    let at = || position.map(|i| format!(" at index {i}")).unwrap_or_default();
    if !value.is_object() {
        return Err(TfidfError::input_shape(format!("expected a document object{}, got {}", at(), json_kind(&value))));
    }
    serde_json::from_value(value).map_err(|e| TfidfError::input_shape(format!("malformed document{}: {e}", at())))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<Value> for DocumentInput {
    type Error = TfidfError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => Ok(DocumentInput::Single(descriptor_from_value(value, None)?)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, v)| descriptor_from_value(v, Some(i)))
                .collect::<Result<Vec<_>>>()
                .map(DocumentInput::Batch),
            other => Err(TfidfError::input_shape(format!(
                "input must be a document object or an array of document objects, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for DocumentInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        DocumentInput::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl From<DocumentDescriptor> for DocumentInput {
    fn from(doc: DocumentDescriptor) -> Self { DocumentInput::Single(doc) }
}

impl From<Vec<DocumentDescriptor>> for DocumentInput {
    fn from(docs: Vec<DocumentDescriptor>) -> Self { DocumentInput::Batch(docs) }
}

/// A bare table for single-document input, a filename -> table mapping for batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessOutput {
    Table(ResultTable),
    Batch(BTreeMap<String, ResultTable>),
}

impl ProcessOutput {
    pub fn as_table(&self) -> Option<&ResultTable> {
        match self {
            ProcessOutput::Table(t) => Some(t),
            ProcessOutput::Batch(_) => None,
        }
    }

    pub fn as_batch(&self) -> Option<&BTreeMap<String, ResultTable>> {
        match self {
            ProcessOutput::Batch(b) => Some(b),
            ProcessOutput::Table(_) => None,
        }
    }
}
