//! Trie vertex for one HTTP method's routing tree.
//!
//! Each node represents one path segment. Children are kept per segment kind so
//! that lookup never scans: static children are found by exact key, and there
//! is at most one regex child, one parameter child and one wildcard child.
//!
//! Lookup precedence at every node:
//!
//! 1. exact static match
//! 2. regex parameter (`:name(expr)`) whose expression matches the segment
//! 3. path parameter (`:name`), which matches any segment
//! 4. wildcard (`*`), which consumes the rest of the path
//!
//! Matching is not backtracking: once a child is chosen it is never revisited.

use regex::Regex;
use std::collections::HashMap;

use super::error::RouteError;
use super::pattern::Segment;

/// Kind of segment a [`Node`] matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Literal segment; also the kind of every root node
    #[default]
    Static,
    /// `:name(expr)` segment
    Regex,
    /// `:name` segment
    Param,
    /// `*` segment
    Wildcard,
}

/// Node in a per-method routing tree
#[derive(Debug, Clone)]
pub struct Node<H> {
    kind: NodeKind,
    /// Literal text for static nodes, raw pattern text for the others
    segment: String,
    static_children: HashMap<String, Node<H>>,
    regex_child: Option<Box<Node<H>>>,
    param_child: Option<Box<Node<H>>>,
    wildcard_child: Option<Box<Node<H>>>,
    /// Set on regex and param nodes
    param_name: Option<String>,
    /// Set on regex nodes, anchored at both ends
    regex: Option<Regex>,
    handler: Option<H>,
    /// Full pattern the handler was registered under
    route: Option<String>,
}

/// The child chosen for one path segment during lookup
pub(crate) enum Step<'n, H> {
    /// Static child; nothing to bind
    Exact(&'n Node<H>),
    /// Regex or param child; binds its parameter name to the segment
    Bind(&'n Node<H>),
    /// Wildcard child; the rest of the path is consumed
    Rest(&'n Node<H>),
}

impl<H> Node<H> {
    fn new(kind: NodeKind, segment: &str) -> Self {
        Self {
            kind,
            segment: segment.to_owned(),
            static_children: HashMap::new(),
            regex_child: None,
            param_child: None,
            wildcard_child: None,
            param_name: None,
            regex: None,
            handler: None,
            route: None,
        }
    }

    /// Create the root of a method tree
    pub(crate) fn root() -> Self {
        Self::new(NodeKind::Static, "/")
    }

    fn param(name: &str) -> Self {
        let mut node = Self::new(NodeKind::Param, &format!(":{name}"));
        node.param_name = Some(name.to_owned());
        node
    }

    fn regex(raw: &str, name: &str, regex: Regex) -> Self {
        let mut node = Self::new(NodeKind::Regex, raw);
        node.param_name = Some(name.to_owned());
        node.regex = Some(regex);
        node
    }

    /// Segment kind of this node
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Literal text (static) or raw pattern text (`:id`, `:id(\d+)`, `*`)
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Parameter bound by this node, if it is a regex or param node
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// Handler registered at this node; `None` for pass-through nodes
    #[must_use]
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// Pattern the handler was registered under
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    #[must_use]
    pub fn static_child(&self, literal: &str) -> Option<&Node<H>> {
        self.static_children.get(literal)
    }

    #[must_use]
    pub fn regex_child(&self) -> Option<&Node<H>> {
        self.regex_child.as_deref()
    }

    #[must_use]
    pub fn param_child(&self) -> Option<&Node<H>> {
        self.param_child.as_deref()
    }

    #[must_use]
    pub fn wildcard_child(&self) -> Option<&Node<H>> {
        self.wildcard_child.as_deref()
    }

    /// Number of static children
    #[must_use]
    pub fn static_len(&self) -> usize {
        self.static_children.len()
    }

    /// Resolve the child for `segment`, creating it when absent.
    ///
    /// Only one parameter identity may live at a position: a param and a regex
    /// child must agree on the name, and neither may share a node with a
    /// wildcard. Conflicts can only surface on nodes that already existed, so a
    /// failed registration never leaves fresh nodes behind.
    pub(crate) fn child_or_create(
        &mut self,
        segment: Segment<'_>,
        pattern: &str,
    ) -> Result<&mut Node<H>, RouteError> {
        match segment {
            Segment::Static(text) => Ok(self
                .static_children
                .entry(text.to_owned())
                .or_insert_with(|| Node::new(NodeKind::Static, text))),
            Segment::Param { name } => {
                self.claim_param(name, &format!(":{name}"), pattern)?;
                let child = self
                    .param_child
                    .get_or_insert_with(|| Box::new(Node::param(name)));
                Ok(child.as_mut())
            }
            Segment::Regex { raw, name, regex } => {
                self.claim_param(name, raw, pattern)?;
                if let Some(existing) = self.regex_child.as_deref() {
                    if existing.segment != raw {
                        return Err(RouteError::ParamConflict {
                            pattern: pattern.to_owned(),
                            existing: existing.segment.clone(),
                            requested: raw.to_owned(),
                        });
                    }
                }
                let child = self
                    .regex_child
                    .get_or_insert_with(|| Box::new(Node::regex(raw, name, regex)));
                Ok(child.as_mut())
            }
            Segment::Wildcard => {
                if self.param_child.is_some() || self.regex_child.is_some() {
                    return Err(RouteError::WildcardConflict {
                        pattern: pattern.to_owned(),
                    });
                }
                let child = self
                    .wildcard_child
                    .get_or_insert_with(|| Box::new(Node::new(NodeKind::Wildcard, "*")));
                Ok(child.as_mut())
            }
        }
    }

    fn claim_param(&self, name: &str, raw: &str, pattern: &str) -> Result<(), RouteError> {
        if self.wildcard_child.is_some() {
            return Err(RouteError::WildcardConflict {
                pattern: pattern.to_owned(),
            });
        }
        let existing = [self.regex_child.as_deref(), self.param_child.as_deref()];
        for node in existing.into_iter().flatten() {
            if node.param_name.as_deref() != Some(name) {
                return Err(RouteError::ParamConflict {
                    pattern: pattern.to_owned(),
                    existing: node.segment.clone(),
                    requested: raw.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Attach a handler, failing if one is already registered here
    pub(crate) fn set_handler(
        &mut self,
        handler: H,
        method: &str,
        pattern: &str,
    ) -> Result<(), RouteError> {
        if self.handler.is_some() {
            return Err(RouteError::Duplicate {
                method: method.to_owned(),
                pattern: pattern.to_owned(),
            });
        }
        self.handler = Some(handler);
        self.route = Some(pattern.to_owned());
        Ok(())
    }

    /// Pick the child for one path segment using the fixed precedence
    pub(crate) fn child_of(&self, segment: &str) -> Option<Step<'_, H>> {
        if let Some(child) = self.static_children.get(segment) {
            return Some(Step::Exact(child));
        }
        if let Some(child) = self.regex_child.as_deref() {
            if child.regex.as_ref().is_some_and(|re| re.is_match(segment)) {
                return Some(Step::Bind(child));
            }
        }
        if let Some(child) = self.param_child.as_deref() {
            return Some(Step::Bind(child));
        }
        self.wildcard_child.as_deref().map(Step::Rest)
    }

    /// Collect the pattern and handler of every endpoint below (and including) this node
    pub(crate) fn collect_routes<'n>(&'n self, out: &mut Vec<(&'n str, &'n H)>) {
        if let (Some(route), Some(handler)) = (self.route.as_deref(), self.handler.as_ref()) {
            out.push((route, handler));
        }
        for child in self.static_children.values() {
            child.collect_routes(out);
        }
        let dynamic = [
            self.regex_child.as_deref(),
            self.param_child.as_deref(),
            self.wildcard_child.as_deref(),
        ];
        for child in dynamic.into_iter().flatten() {
            child.collect_routes(out);
        }
    }
}

/// Structural equality: static children compare as an unordered keyed set and
/// regex nodes compare by source text.
impl<H: PartialEq> PartialEq for Node<H> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.segment == other.segment
            && self.param_name == other.param_name
            && self.regex.as_ref().map(Regex::as_str) == other.regex.as_ref().map(Regex::as_str)
            && self.handler == other.handler
            && self.route == other.route
            && self.static_children == other.static_children
            && self.regex_child == other.regex_child
            && self.param_child == other.param_child
            && self.wildcard_child == other.wildcard_child
    }
}
