use std::collections::BTreeMap;

use serde::Serialize;

// ============================================================================
// Arena DOM: nodes addressed by NodeId, live form-control state on elements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// An element with its static attributes and the live state a page would see
/// through `.value`, `.checked` and `option.selected`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub value: String,
    pub checked: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Input,
    Change,
}

/// A notification synthesized after a field was mutated programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchedEvent {
    pub target: NodeId,
    pub kind: EventKind,
}

const INPUT_TYPES: &[&str] = &[
    "button",
    "checkbox",
    "color",
    "date",
    "datetime-local",
    "email",
    "file",
    "hidden",
    "image",
    "month",
    "number",
    "password",
    "radio",
    "range",
    "reset",
    "search",
    "submit",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "h7"];

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    url: String,
    title: String,
    events: Vec<DispatchedEvent>,
}

impl Document {
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
            root: NodeId(0),
            url: url.to_string(),
            title: title.to_string(),
            events: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append an element under `parent`. Tag and attribute names are
    /// lowercased; `value`, `checked` and `selected` seed the live state.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: BTreeMap<String, String>,
    ) -> NodeId {
        let attrs: BTreeMap<String, String> = attrs
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        let element = Element {
            tag: tag.to_ascii_lowercase(),
            value: attrs.get("value").cloned().unwrap_or_default(),
            checked: attrs.contains_key("checked"),
            selected: attrs.contains_key("selected"),
            attrs,
        };
        self.push_node(parent, NodeKind::Element(element))
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push_node(parent, NodeKind::Text(text.to_string()))
    }

    /// Textareas take their initial value from their text content.
    pub(crate) fn init_textarea_value(&mut self, node: NodeId) {
        if self.tag(node) != Some("textarea") {
            return;
        }
        let text = self.text_content(node);
        if let Some(el) = self.element_mut(node) {
            el.value = text;
        }
    }

    // ------------------------------------------------------------------------
    // Tree access
    // ------------------------------------------------------------------------

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node.0)?.kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attrs.get(name))
            .map(String::as_str)
    }

    /// Attribute value, treating an empty attribute as absent.
    pub fn non_empty_attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attr(node, name).filter(|v| !v.is_empty())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    /// Parent element, `None` when the parent is the document node.
    pub fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node).filter(|p| self.element(*p).is_some())
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn text_content(&self, node: NodeId) -> String {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Text(text)) => text.clone(),
            Some(_) => self
                .children(node)
                .iter()
                .map(|child| self.text_content(*child))
                .collect(),
            None => String::new(),
        }
    }

    pub(crate) fn text_of(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Element descendants of `scope` in document order, excluding `scope`.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(scope, &mut out);
        out
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(node) {
            if self.element(*child).is_some() {
                out.push(*child);
            }
            self.collect_descendants(*child, out);
        }
    }

    fn descendants_with_tags(&self, scope: NodeId, tags: &[&str]) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| self.tag(*n).is_some_and(|t| tags.contains(&t)))
            .collect()
    }

    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.parent(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// First element carrying `id="<id>"` in document order.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.attr(*n, "id") == Some(id))
    }

    pub fn forms(&self) -> Vec<NodeId> {
        self.descendants_with_tags(self.root, &["form"])
    }

    /// Nearest ancestor-or-self with the given tag.
    pub fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if self.tag(current) == Some(tag) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    pub fn closest_form(&self, node: NodeId) -> Option<NodeId> {
        self.closest(node, "form")
    }

    /// `input`, `select` and `textarea` elements under `scope`, document order.
    pub fn form_controls(&self, scope: NodeId) -> Vec<NodeId> {
        self.descendants_with_tags(scope, &["input", "select", "textarea"])
    }

    /// Heading elements (h1 through h7) under `scope`, document order.
    pub fn headings(&self, scope: NodeId) -> Vec<NodeId> {
        self.descendants_with_tags(scope, HEADING_TAGS)
    }

    /// First `<label for="<id>">` in the document.
    pub fn label_for(&self, id: &str) -> Option<NodeId> {
        self.descendants_with_tags(self.root, &["label"])
            .into_iter()
            .find(|n| self.attr(*n, "for") == Some(id))
    }

    // ------------------------------------------------------------------------
    // Form-control state
    // ------------------------------------------------------------------------

    /// The control's type as a page script would read it from `.type`.
    pub fn input_type(&self, node: NodeId) -> String {
        match self.tag(node) {
            Some("textarea") => "textarea".to_string(),
            Some("select") if self.is_multiple(node) => "select-multiple".to_string(),
            Some("select") => "select-one".to_string(),
            Some("input") => {
                let declared = self
                    .attr(node, "type")
                    .map(|t| t.trim().to_ascii_lowercase())
                    .unwrap_or_default();
                if INPUT_TYPES.contains(&declared.as_str()) {
                    declared
                } else {
                    "text".to_string()
                }
            }
            Some("button") => self
                .attr(node, "type")
                .map(|t| t.to_ascii_lowercase())
                .filter(|t| t == "reset" || t == "button")
                .unwrap_or_else(|| "submit".to_string()),
            _ => String::new(),
        }
    }

    pub fn is_multiple(&self, node: NodeId) -> bool {
        self.tag(node) == Some("select") && self.attr(node, "multiple").is_some()
    }

    pub fn value(&self, node: NodeId) -> String {
        if self.tag(node) == Some("select") {
            return self.select_value(node);
        }
        self.element(node).map(|el| el.value.clone()).unwrap_or_default()
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.value = value.to_string();
        }
    }

    pub fn checked(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|el| el.checked)
    }

    /// The other radios sharing `node`'s group: same `name` within the same
    /// form, or within the document when the radio has no form. Empty for
    /// non-radios and unnamed radios.
    pub fn radio_group(&self, node: NodeId) -> Vec<NodeId> {
        if self.input_type(node) != "radio" {
            return Vec::new();
        }
        let Some(name) = self.non_empty_attr(node, "name") else {
            return Vec::new();
        };
        let form = self.closest_form(node);
        self.form_controls(form.unwrap_or(self.root))
            .into_iter()
            .filter(|n| {
                *n != node
                    && self.input_type(*n) == "radio"
                    && self.attr(*n, "name") == Some(name)
                    && self.closest_form(*n) == form
            })
            .collect()
    }

    /// Checking a radio unchecks the rest of its [`radio_group`](Self::radio_group).
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if checked {
            for other in self.radio_group(node) {
                if let Some(el) = self.element_mut(other) {
                    el.checked = false;
                }
            }
        }
        if let Some(el) = self.element_mut(node) {
            el.checked = checked;
        }
    }

    /// Options of a select, including those nested in optgroups.
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants_with_tags(select, &["option"])
    }

    /// An option's `value` attribute, or its text when the attribute is absent.
    pub fn option_value(&self, option: NodeId) -> String {
        match self.attr(option, "value") {
            Some(v) => v.to_string(),
            None => self.text_content(option),
        }
    }

    /// Index of the first selected option. A single select with no explicit
    /// selection shows its first option.
    pub fn selected_index(&self, select: NodeId) -> Option<usize> {
        let options = self.options(select);
        let explicit = options
            .iter()
            .position(|o| self.element(*o).is_some_and(|el| el.selected));
        match explicit {
            Some(i) => Some(i),
            None if !self.is_multiple(select) && !options.is_empty() => Some(0),
            None => None,
        }
    }

    pub fn selected_values(&self, select: NodeId) -> Vec<String> {
        let options = self.options(select);
        if !self.is_multiple(select) {
            return self
                .selected_index(select)
                .map(|i| vec![self.option_value(options[i])])
                .unwrap_or_default();
        }
        options
            .into_iter()
            .filter(|o| self.element(*o).is_some_and(|el| el.selected))
            .map(|o| self.option_value(o))
            .collect()
    }

    fn select_value(&self, select: NodeId) -> String {
        let options = self.options(select);
        self.selected_index(select)
            .map(|i| self.option_value(options[i]))
            .unwrap_or_default()
    }

    /// Select the first option whose value equals `value` and deselect the
    /// rest. Leaves the select untouched and returns false when no option
    /// matches.
    pub fn select_option_value(&mut self, select: NodeId, value: &str) -> bool {
        let options = self.options(select);
        let Some(target) = options
            .iter()
            .copied()
            .find(|o| self.option_value(*o) == value)
        else {
            return false;
        };
        for option in options {
            if let Some(el) = self.element_mut(option) {
                el.selected = option == target;
            }
        }
        true
    }

    /// Set each option's selected state to its membership in `values`.
    pub fn set_selected_values(&mut self, select: NodeId, values: &[String]) {
        for option in self.options(select) {
            let wanted = values.contains(&self.option_value(option));
            if let Some(el) = self.element_mut(option) {
                el.selected = wanted;
            }
        }
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) {
        self.events.push(DispatchedEvent { target, kind });
    }

    pub fn events(&self) -> &[DispatchedEvent] {
        &self.events
    }

    pub fn events_for(&self, target: NodeId) -> Vec<EventKind> {
        self.events
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.kind)
            .collect()
    }
}
