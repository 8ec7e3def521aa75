//! Reading a `<methodResponse>` document into a [`Response`].
//!
//! Requires the _parse_ feature.
//!
//! The document is read into a DOM with [`roxmltree`] and walked once to build the envelope.
//! Scalar text is kept as it appears on the wire; coercion into typed values happens when
//! decoding. Text that did not need entity expansion borrows from the input string.
//!
//! [`Response`]: crate::Response
use crate::ds::*;
use roxmltree::{Document, Node, StringStorage};
use std::borrow::Cow;

mod err;

pub use self::err::Error;

/// Attempt to parse an XML-RPC response document.
///
/// The root must be `<methodResponse>`, holding either `<params>` or `<fault>`. Value type tags
/// outside the XML-RPC set are rejected; untyped `<value>` content is kept as [`Value::Raw`].
///
/// # Example
/// ```rust
/// # use xmlrpc_de::*;
/// use xmlrpc_de::parse::parse;
///
/// let xml = r#"<?xml version="1.0"?>
/// <methodResponse>
///   <params>
///     <param><value><string>South Dakota</string></value></param>
///   </params>
/// </methodResponse>"#;
///
/// let response = parse(xml).unwrap();
/// assert_eq!(response.params, vec![Value::string("South Dakota")]);
/// assert_eq!(response.fault, None);
/// ```
///
/// [`Value::Raw`]: crate::Value::Raw
pub fn parse(s: &str) -> Result<Response<'_>, Error> {
    let doc = Document::parse(s)?;
    let root = doc.root_element();

    if !root.has_tag_name("methodResponse") {
        return Err(Error::NotResponse(root.tag_name().name().to_string()));
    }

    let mut response = Response::default();

    for child in elements(root) {
        match child.tag_name().name() {
            "params" => {
                for param in elements(child).filter(|n| n.has_tag_name("param")) {
                    let value = required(param, "value", "param")?;
                    response.params.push(value_node(value)?);
                }
            }
            "fault" => {
                if let Some(value) = child_element(child, "value") {
                    response.fault = Some(value_node(value)?);
                }
            }
            _ => (),
        }
    }

    Ok(response)
}

fn value_node<'input>(node: Node<'_, 'input>) -> Result<Value<'input>, Error> {
    let typed = match elements(node).next() {
        Some(typed) => typed,
        None => return Ok(Value::Raw(text(node))),
    };

    let value = match typed.tag_name().name() {
        "int" | "i4" => Value::Int(text(typed)),
        "double" => Value::Double(text(typed)),
        "string" => Value::Str(text(typed)),
        "boolean" => Value::Bool(text(typed)),
        "dateTime.iso8601" => Value::DateTime(text(typed)),
        "base64" => Value::Base64(text(typed)),
        "nil" => Value::Nil,
        "struct" => Value::Struct(
            elements(typed)
                .filter(|n| n.has_tag_name("member"))
                .map(member)
                .collect::<Result<_, _>>()?,
        ),
        "array" => Value::Array(
            elements(required(typed, "data", "array")?)
                .filter(|n| n.has_tag_name("value"))
                .map(value_node)
                .collect::<Result<_, _>>()?,
        ),
        other => return Err(Error::UnknownType(other.to_string())),
    };

    Ok(value)
}

fn member<'input>(node: Node<'_, 'input>) -> Result<Member<'input>, Error> {
    let name = text(required(node, "name", "member")?);
    let value = value_node(required(node, "value", "member")?)?;
    Ok(Member { name, value })
}

////// HELPERS /////////////////////////////////////////////////////////////////

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    elements(node).find(|n| n.has_tag_name(name))
}

fn required<'a, 'input>(
    node: Node<'a, 'input>,
    element: &'static str,
    parent: &'static str,
) -> Result<Node<'a, 'input>, Error> {
    child_element(node, element).ok_or(Error::Missing { element, parent })
}

/// The node's text content, borrowed from the input when it is a single text child.
///
/// Comments and processing instructions split the text into several children; those are joined.
fn text<'input>(node: Node<'_, 'input>) -> Cow<'input, str> {
    let mut texts = node.children().filter(|n| n.is_text()).map(storage);

    let first = match texts.next() {
        Some(first) => first,
        None => return Cow::Borrowed(""),
    };

    match texts.next() {
        None => first,
        Some(second) => {
            let mut joined = first.into_owned();
            joined.push_str(&second);
            texts.for_each(|t| joined.push_str(&t));
            Cow::Owned(joined)
        }
    }
}

fn storage<'input>(node: Node<'_, 'input>) -> Cow<'input, str> {
    match node.text_storage() {
        Some(StringStorage::Borrowed(s)) => Cow::Borrowed(*s),
        Some(StringStorage::Owned(s)) => Cow::Owned(s.to_string()),
        None => Cow::Borrowed(""),
    }
}
