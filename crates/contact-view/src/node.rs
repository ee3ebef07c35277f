//! Accessible element tree produced by rendering a form.

use contact_model::Field;

/// Element kind, roughly the HTML tag a browser host would emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Form,
    Heading { level: u8 },
    Group,
    Label,
    Input,
    TextArea,
    Paragraph,
    Bold,
    Button,
    Section,
}

/// ARIA role exposed to role queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Form,
    Heading,
    Textbox,
    Button,
    Region,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Heading => "heading",
            Self::Textbox => "textbox",
            Self::Button => "button",
            Self::Region => "region",
        }
    }
}

/// What an interactive node does when it receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Text entry bound to a form field.
    Input(Field),
    /// Submits the form.
    Submit,
}

/// One element of the rendered tree.
///
/// `text` is the element's own text. When an element has both children and
/// own text, the own text follows the children in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: Tag,
    pub role: Option<Role>,
    pub text: String,
    pub test_id: Option<String>,
    pub aria_label: Option<String>,
    /// Field whose control this label names.
    pub label_for: Option<Field>,
    pub control: Option<Control>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            role: None,
            text: String::new(),
            test_id: None,
            aria_label: None,
            label_for: None,
            control: None,
            value: None,
            placeholder: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn label_for(mut self, field: Field) -> Self {
        self.label_for = Some(field);
        self
    }

    #[must_use]
    pub fn control(mut self, control: Control) -> Self {
        self.control = Some(control);
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Concatenated text of all descendants followed by the own text.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
        out.push_str(&self.text);
    }

    /// The field this node edits, if it is a text control.
    pub fn field(&self) -> Option<Field> {
        match self.control {
            Some(Control::Input(field)) => Some(field),
            _ => None,
        }
    }

    /// This node and all descendants in document order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in &self.children {
            child.collect_descendants(out);
        }
    }
}

/// A rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Every node in document order, root first.
    pub fn nodes(&self) -> Vec<&Node> {
        self.root.descendants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_puts_children_before_own_text() {
        let node = Node::new(Tag::Paragraph)
            .child(Node::new(Tag::Bold).text("First Name: "))
            .text("Blade");
        assert_eq!(node.text_content(), "First Name: Blade");
    }

    #[test]
    fn descendants_are_preorder() {
        let tree = Node::new(Tag::Form)
            .child(Node::new(Tag::Group).child(Node::new(Tag::Label).text("a")))
            .child(Node::new(Tag::Button).text("b"));
        let tags: Vec<Tag> = tree.descendants().iter().map(|node| node.tag).collect();
        assert_eq!(tags, vec![Tag::Form, Tag::Group, Tag::Label, Tag::Button]);
    }
}
