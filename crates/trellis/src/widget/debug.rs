//! Human-readable dumps of a widget tree.
//!
//! ```
//! use trellis::widget::{Panel, TreeDebug, WidgetTree};
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.insert_named("window", Panel::new());
//! let child = tree.insert_named("toolbar", Panel::new());
//! tree.add_child(root, child, None).unwrap();
//!
//! let dump = TreeDebug::new(&tree).format_subtree(root);
//! assert!(dump.contains("window"));
//! assert!(dump.contains("toolbar"));
//! ```

use std::fmt::{self, Write};

use super::interaction::InteractionContext;
use super::tree::{NodeId, WidgetTree};

/// Style of tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Indentation only.
    Compact,
}

/// What a tree dump shows for each node.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    pub style: TreeStyle,
    pub show_ids: bool,
    /// Show the short type name of each widget.
    pub show_types: bool,
    /// Show each node's rectangle as `x,y wxh`.
    pub show_geometry: bool,
    /// Show the visibility, enabled and interaction flags.
    pub show_flags: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_types: true,
            show_geometry: true,
            show_flags: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Everything, ids included.
    pub fn detailed() -> Self {
        Self {
            show_ids: true,
            ..Default::default()
        }
    }

    /// Names only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            show_geometry: false,
            show_flags: false,
            ..Default::default()
        }
    }
}

/// Formats a [`WidgetTree`] for debugging.
#[derive(Debug, Clone)]
pub struct TreeDebug<'a> {
    tree: &'a WidgetTree,
    interaction: Option<&'a InteractionContext>,
    options: TreeFormatOptions,
}

impl<'a> TreeDebug<'a> {
    pub fn new(tree: &'a WidgetTree) -> Self {
        Self::with_options(tree, TreeFormatOptions::default())
    }

    pub fn with_options(tree: &'a WidgetTree, options: TreeFormatOptions) -> Self {
        Self {
            tree,
            interaction: None,
            options,
        }
    }

    /// Marks the focus holder and the drag source of `cx` in the output.
    pub fn with_interaction(mut self, cx: &'a InteractionContext) -> Self {
        self.interaction = Some(cx);
        self
    }

    /// Formats every tree in the arena.
    pub fn format_all(&self) -> String {
        let roots = self.tree.roots();
        let mut output = String::new();
        writeln!(output, "Widget Tree ({} nodes):", self.tree.len()).expect("write to String");
        if roots.is_empty() {
            writeln!(output, "  (empty)").expect("write to String");
        }
        for root in roots {
            self.format_node(root, 0, &mut String::new(), true, &mut output);
        }
        output
    }

    /// Formats the subtree rooted at `root`. Empty for a dead id.
    pub fn format_subtree(&self, root: NodeId) -> String {
        let mut output = String::new();
        if self.tree.is_alive(root) {
            self.format_node(root, 0, &mut String::new(), true, &mut output);
        }
        output
    }

    /// `lead` is the continuation prefix inherited from the ancestors.
    fn format_node(&self, id: NodeId, depth: usize, lead: &mut String, is_last: bool, output: &mut String) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        output.push_str(lead);
        if depth > 0 {
            output.push_str(self.connector(is_last));
        }
        self.format_label(id, output);
        output.push('\n');

        let children = self.tree.children(id);
        let mark = lead.len();
        if depth > 0 {
            self.push_continuation(lead, is_last);
        }
        for (i, &child) in children.iter().enumerate() {
            self.format_node(child, depth + 1, lead, i + 1 == children.len(), output);
        }
        lead.truncate(mark);
    }

    fn connector(&self, is_last: bool) -> &'static str {
        match (self.options.style, is_last) {
            (TreeStyle::Ascii, false) => "+-- ",
            (TreeStyle::Ascii, true) => "`-- ",
            (TreeStyle::Unicode, false) => "\u{251c}\u{2500}\u{2500} ",
            (TreeStyle::Unicode, true) => "\u{2514}\u{2500}\u{2500} ",
            (TreeStyle::Compact, _) => "- ",
        }
    }

    fn push_continuation(&self, lead: &mut String, is_last: bool) {
        match (self.options.style, is_last) {
            (TreeStyle::Compact, _) => lead.extend(std::iter::repeat_n(' ', self.options.indent_size)),
            (_, true) => lead.push_str("    "),
            (TreeStyle::Ascii, false) => lead.push_str("|   "),
            (TreeStyle::Unicode, false) => lead.push_str("\u{2502}   "),
        }
    }

    fn format_label(&self, id: NodeId, output: &mut String) {
        let name = self.tree.name(id).unwrap_or_default();
        output.push_str(if name.is_empty() { "(unnamed)" } else { name });

        if self.options.show_ids {
            write!(output, " [{:?}]", id).expect("write to String");
        }
        if self.options.show_types {
            let type_name = self.tree.type_name(id).unwrap_or("?");
            let short = type_name.rsplit("::").next().unwrap_or(type_name);
            write!(output, " ({short})").expect("write to String");
        }
        if self.options.show_geometry {
            if let Some(r) = self.tree.rect(id) {
                write!(output, " @ {},{} {}x{}", r.left(), r.top(), r.width(), r.height())
                    .expect("write to String");
            }
        }
        if self.options.show_flags {
            let flags = self.flags(id);
            if !flags.is_empty() {
                write!(output, " {{{}}}", flags.join(", ")).expect("write to String");
            }
        }
    }

    fn flags(&self, id: NodeId) -> Vec<&'static str> {
        let tree = self.tree;
        let mut flags = Vec::new();
        if !tree.is_visible(id) {
            flags.push("hidden");
        }
        if !tree.is_enabled(id) {
            flags.push("disabled");
        }
        if tree.has_pointer(id) {
            flags.push("pointer");
        }
        if tree.is_pushed(id) {
            flags.push("pushed");
        }
        if tree.is_selected(id) {
            flags.push("selected");
        }
        if let Some(cx) = self.interaction {
            if cx.focus() == Some(id) {
                flags.push("focus");
            }
            if cx.drag_source() == Some(id) {
                flags.push("drag-source");
            }
        }
        flags
    }
}

impl fmt::Display for TreeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_all())
    }
}
