use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::dom_model::{Document, NodeId};
use crate::error::{PresetError, Result};

// ============================================================================
// Page snapshot: JSON form of a page's DOM, as produced by DOM extraction
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub root: SnapshotNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<SnapshotNode>,
    },
    Text {
        text: String,
    },
}

impl Document {
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Result<Document> {
        let mut doc = Document::new(&snapshot.url, &snapshot.title);
        match &snapshot.root {
            SnapshotNode::Element { tag, .. } if tag.trim().is_empty() => {
                return Err(PresetError::Snapshot("root element has an empty tag".into()));
            }
            SnapshotNode::Text { .. } => {
                return Err(PresetError::Snapshot("root must be an element".into()));
            }
            SnapshotNode::Element { .. } => {}
        }
        let root = doc.root();
        build_node(&mut doc, root, &snapshot.root)?;
        Ok(doc)
    }

    /// Serialize the document back, writing live state into attributes so the
    /// snapshot reflects what the page currently shows.
    pub fn to_snapshot(&self) -> Result<PageSnapshot> {
        let top = self
            .children(self.root())
            .first()
            .copied()
            .ok_or_else(|| PresetError::Snapshot("document has no root element".into()))?;
        Ok(PageSnapshot {
            url: self.url().to_string(),
            title: self.title().to_string(),
            root: snapshot_node(self, top),
        })
    }
}

fn build_node(doc: &mut Document, parent: NodeId, node: &SnapshotNode) -> Result<()> {
    match node {
        SnapshotNode::Text { text } => {
            doc.append_text(parent, text);
        }
        SnapshotNode::Element {
            tag,
            attrs,
            children,
        } => {
            if tag.trim().is_empty() {
                return Err(PresetError::Snapshot("element with an empty tag".into()));
            }
            let id = doc.append_element(parent, tag.trim(), attrs.clone());
            for child in children {
                build_node(doc, id, child)?;
            }
            doc.init_textarea_value(id);
        }
    }
    Ok(())
}

fn snapshot_node(doc: &Document, node: NodeId) -> SnapshotNode {
    let Some(el) = doc.element(node) else {
        return SnapshotNode::Text {
            text: doc.text_of(node).unwrap_or_default().to_string(),
        };
    };

    let mut attrs = el.attrs.clone();
    let mut children: Vec<SnapshotNode> = doc
        .children(node)
        .iter()
        .map(|child| snapshot_node(doc, *child))
        .collect();

    match el.tag.as_str() {
        "input" => match doc.input_type(node).as_str() {
            "checkbox" | "radio" => set_flag(&mut attrs, "checked", el.checked),
            _ => {
                if !el.value.is_empty() || attrs.contains_key("value") {
                    attrs.insert("value".into(), el.value.clone());
                }
            }
        },
        "option" => set_flag(&mut attrs, "selected", el.selected),
        "textarea" => {
            children = if el.value.is_empty() {
                Vec::new()
            } else {
                vec![SnapshotNode::Text {
                    text: el.value.clone(),
                }]
            };
        }
        _ => {}
    }

    SnapshotNode::Element {
        tag: el.tag.clone(),
        attrs,
        children,
    }
}

fn set_flag(attrs: &mut BTreeMap<String, String>, name: &str, on: bool) {
    if on {
        attrs.entry(name.to_string()).or_default();
    } else {
        attrs.remove(name);
    }
}

// ============================================================================
// File helpers
// ============================================================================

pub fn parse_page(json: &str) -> Result<Document> {
    let snapshot: PageSnapshot = serde_json::from_str(json).map_err(|e| PresetError::Json {
        context: "page snapshot".into(),
        source: e,
    })?;
    Document::from_snapshot(&snapshot)
}

pub fn load_page(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| PresetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc = parse_page(&content)?;
    debug!(path = %path.display(), url = doc.url(), "loaded page snapshot");
    Ok(doc)
}

pub fn render_page(doc: &Document) -> Result<String> {
    let snapshot = doc.to_snapshot()?;
    serde_json::to_string_pretty(&snapshot).map_err(|e| PresetError::Json {
        context: "page snapshot".into(),
        source: e,
    })
}

pub fn write_page(doc: &Document, path: &Path) -> Result<()> {
    let json = render_page(doc)?;
    std::fs::write(path, json).map_err(|e| PresetError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
