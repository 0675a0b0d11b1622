use super::*;
use crate::dom::Tag;

fn paragraph(text: &str) -> (Document, NodeId, NodeId, NodeId) {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let t = doc.create_text(text);
    doc.append(host, p);
    doc.append(p, t);
    (doc, host, p, t)
}

#[test]
fn plain_space_between_words() {
    let (doc, _, _, t) = paragraph("ab");
    assert_eq!(appropriate_whitespace(&doc, Boundary::new(t, 1)), ' ');
}

#[test]
fn nbsp_next_to_existing_whitespace() {
    let (doc, _, _, t) = paragraph("a b");
    // behind the space
    assert_eq!(appropriate_whitespace(&doc, Boundary::new(t, 2)), NBSP);
    // in front of the space
    assert_eq!(appropriate_whitespace(&doc, Boundary::new(t, 1)), NBSP);
}

#[test]
fn text_edges_without_neighbour_whitespace_get_plain_space() {
    let (doc, _, _, t) = paragraph("ab");
    assert_eq!(appropriate_whitespace(&doc, Boundary::new(t, 0)), ' ');
    assert_eq!(appropriate_whitespace(&doc, Boundary::new(t, 2)), ' ');
}

#[test]
fn element_boundary_in_an_empty_block_gets_nbsp() {
    // the backtrace from <p> hits the editing host before any text
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    doc.append(host, p);
    assert_eq!(appropriate_whitespace(&doc, Boundary::new(p, 0)), NBSP);
}

#[test]
fn empty_inline_between_words_gets_plain_space() {
    // <p>"a"<b></b>"b"</p>, caret inside the empty <b>
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let ta = doc.create_text("a");
    let bold = doc.create_element(Tag::B);
    let tb = doc.create_text("b");
    doc.append(host, p);
    doc.append(p, ta);
    doc.append(p, bold);
    doc.append(p, tb);

    assert_eq!(appropriate_whitespace(&doc, Boundary::new(bold, 0)), ' ');
}

#[test]
fn empty_inline_after_trailing_space_gets_nbsp() {
    // <p>"a "<b></b>"b"</p>, caret inside the empty <b>
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let ta = doc.create_text("a ");
    let bold = doc.create_element(Tag::B);
    let tb = doc.create_text("b");
    doc.append(host, p);
    doc.append(p, ta);
    doc.append(p, bold);
    doc.append(p, tb);

    assert_eq!(appropriate_whitespace(&doc, Boundary::new(bold, 0)), NBSP);
}

#[test]
fn empty_inline_at_block_edge_gets_nbsp() {
    // <p><b></b>"b"</p>: nothing but the block edge behind the caret
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let bold = doc.create_element(Tag::B);
    let tb = doc.create_text("b");
    doc.append(host, p);
    doc.append(p, bold);
    doc.append(p, tb);

    assert_eq!(appropriate_whitespace(&doc, Boundary::new(bold, 0)), NBSP);
}
