//! Minimal page document model.
//!
//! This is the DOM contract the host hands to the redirector at page-ready
//! time: an element tree where the logout container carries the redirect URL
//! as an attribute and iframe elements carry a [`Frame`] load handle.

use std::collections::HashMap;

use crate::frame::Frame;

/// One node in the page tree.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    id: Option<String>,
    attributes: HashMap<String, String>,
    children: Vec<Element>,
    frame: Option<Frame>,
}

impl Element {
    /// Creates an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            attributes: HashMap::new(),
            children: Vec::new(),
            frame: None,
        }
    }

    /// Creates an `iframe` element with its load handle attached.
    #[must_use]
    pub fn iframe(frame: Frame) -> Self {
        let mut element = Self::new("iframe");
        element.frame = Some(frame);
        element
    }

    /// Sets the element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets a string attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element id, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Snapshots the frames of this element and all its descendants, in
    /// document order. The returned set is fixed at call time.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        self.collect_frames(&mut frames);
        frames
    }

    fn collect_frames(&self, out: &mut Vec<Frame>) {
        if let Some(frame) = &self.frame {
            out.push(frame.clone());
        }
        for child in &self.children {
            child.collect_frames(out);
        }
    }

    fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }
}

/// A page document with a single root element.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wraps a root element as a document.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Depth-first lookup of an element by id.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }
}
