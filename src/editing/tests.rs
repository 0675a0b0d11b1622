use super::*;
use crate::overrides::Style;

fn two_paragraphs() -> (Document, NodeId, NodeId, NodeId, NodeId, NodeId) {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p1 = doc.create_element(Tag::P);
    let t1 = doc.create_text("ab");
    let p2 = doc.create_element(Tag::P);
    let t2 = doc.create_text("cd");
    doc.append(host, p1);
    doc.append(p1, t1);
    doc.append(host, p2);
    doc.append(p2, t2);
    (doc, host, p1, t1, p2, t2)
}

#[test]
fn split_text_divides_chars() {
    let mut doc = Document::new();
    let p = doc.create_element(Tag::P);
    let t = doc.create_text("abcd");
    doc.append(p, t);
    let (first, second) = split_text(&mut doc, t, 2).unwrap();
    assert_eq!(doc.text(first), Some("ab"));
    assert_eq!(doc.text(second), Some("cd"));
    assert_eq!(doc.children(p), &[first, second]);
}

#[test]
fn split_at_clones_partial_ancestors() {
    // <p>a<b>xy</b>b</p>, split inside "xy" up to <p>
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let ta = doc.create_text("a");
    let bold = doc.create_element(Tag::B);
    let txy = doc.create_text("xy");
    let tb = doc.create_text("b");
    doc.append(host, p);
    doc.append(p, ta);
    doc.append(p, bold);
    doc.append(bold, txy);
    doc.append(p, tb);

    let at = split_at(&mut doc, Boundary::new(txy, 1), p).unwrap();
    assert_eq!(at.node, p);
    assert_eq!(at.offset, 2);
    // p now has: "a", <b>x</b>, <b>y</b>, "b"
    assert_eq!(doc.children(p).len(), 4);
    assert_eq!(doc.text_content(doc.children(p)[1]), "x");
    assert_eq!(doc.text_content(doc.children(p)[2]), "y");
}

#[test]
fn remove_within_one_text_node() {
    let (mut doc, _host, _p1, t1, _p2, _t2) = two_paragraphs();
    let (s, e) = remove(&mut doc, Boundary::new(t1, 0), Boundary::new(t1, 1)).unwrap();
    assert_eq!(doc.text(t1), Some("b"));
    assert_eq!(s, e);
    assert_eq!(s, Boundary::new(t1, 0));
}

#[test]
fn remove_across_blocks_merges_them() {
    let (mut doc, host, p1, t1, p2, t2) = two_paragraphs();
    // from "ab|" to "|cd": nothing deleted, paragraphs merge
    let (s, _e) = remove(&mut doc, Boundary::new(t1, 2), Boundary::new(t2, 0)).unwrap();
    assert_eq!(doc.children(host), &[p1]);
    assert_eq!(doc.parent(p2), None);
    assert_eq!(doc.text_content(p1), "abcd");
    assert_eq!(s, Boundary::new(t1, 2));
}

#[test]
fn remove_across_blocks_with_partial_text() {
    let (mut doc, host, p1, t1, _p2, t2) = two_paragraphs();
    // from "a|b" to "c|d"
    remove(&mut doc, Boundary::new(t1, 1), Boundary::new(t2, 1)).unwrap();
    assert_eq!(doc.children(host), &[p1]);
    assert_eq!(doc.text_content(p1), "ad");
    assert_eq!(doc.text(t1), Some("a"));
    assert_eq!(doc.text(t2), Some("d"));
}

#[test]
fn remove_whole_host_content() {
    let (mut doc, host, _p1, _t1, _p2, _t2) = two_paragraphs();
    let start = Boundary::new(host, 0);
    let end = Boundary::new(host, 2);
    let (s, e) = remove(&mut doc, start, end).unwrap();
    assert!(doc.children(host).is_empty());
    assert_eq!((s, e), (Boundary::new(host, 0), Boundary::new(host, 0)));
}

#[test]
fn toggle_wraps_a_text_range() {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let t = doc.create_text("abcd");
    doc.append(host, p);
    doc.append(p, t);

    let (s, e) = toggle(&mut doc, Boundary::new(t, 1), Boundary::new(t, 3), Style::Bold).unwrap();
    // "a" <b>"bc"</b> "d"
    assert_eq!(doc.children(p).len(), 3);
    let bold = doc.children(p)[1];
    assert_eq!(doc.tag(bold), Some(Tag::B));
    assert_eq!(doc.text_content(bold), "bc");
    assert_eq!(doc.text_content(p), "abcd");
    // returned boundaries cover the same text
    assert_eq!(doc.text_content(s.node), "bc");
    assert_eq!(e.offset, 2);
}

#[test]
fn toggle_strips_an_already_styled_range() {
    // <p><b>"abcd"</b></p>, unbold "bc"
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let bold = doc.create_element(Tag::B);
    let t = doc.create_text("abcd");
    doc.append(host, p);
    doc.append(p, bold);
    doc.append(bold, t);

    toggle(&mut doc, Boundary::new(t, 1), Boundary::new(t, 3), Style::Bold).unwrap();
    assert_eq!(doc.text_content(p), "abcd");
    // the middle piece is no longer inside a <b>
    let pieces: Vec<String> = doc
        .children(p)
        .iter()
        .map(|&c| {
            let styled = doc.tag(c) == Some(Tag::B);
            format!("{}:{}", if styled { "b" } else { "t" }, doc.text_content(c))
        })
        .collect();
    assert_eq!(pieces, vec!["b:a", "t:bc", "b:d"]);
}

#[test]
fn toggle_spanning_inline_siblings() {
    // <p>"ab"<i>"cd"</i></p>, bold from "a|b" through "c|d"
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let t1 = doc.create_text("ab");
    let italic = doc.create_element(Tag::I);
    let t2 = doc.create_text("cd");
    doc.append(host, p);
    doc.append(p, t1);
    doc.append(p, italic);
    doc.append(italic, t2);

    toggle(&mut doc, Boundary::new(t1, 1), Boundary::new(t2, 1), Style::Bold).unwrap();
    assert_eq!(doc.text_content(p), "abcd");
    // "b" and "c" are now inside <b> wrappers, "a" and "d" are not
    let b_wrapped = doc.text_content(doc.children(p)[1]);
    assert_eq!(b_wrapped, "b");
    assert_eq!(doc.tag(doc.children(p)[1]), Some(Tag::B));
    let c_holder = doc.children(italic)[0];
    assert_eq!(doc.tag(c_holder), Some(Tag::B));
    assert_eq!(doc.text_content(c_holder), "c");
}

#[test]
fn breakline_br_inserts_a_soft_break() {
    let (mut doc, _host, p1, t1, _p2, _t2) = two_paragraphs();
    let (s, e) = breakline(&mut doc, Boundary::new(t1, 1), Tag::Br).unwrap();
    assert_eq!(s, e);
    // "a" <br> "b"
    assert_eq!(doc.children(p1).len(), 3);
    assert_eq!(doc.tag(doc.children(p1)[1]), Some(Tag::Br));
    assert_eq!(doc.text_content(p1), "ab");
    // caret lands at the start of the trailing text
    assert_eq!(doc.text(s.node), Some("b"));
    assert_eq!(s.offset, 0);
}

#[test]
fn breakline_block_splits_the_paragraph() {
    let (mut doc, host, p1, t1, _p2, _t2) = two_paragraphs();
    let (s, _e) = breakline(&mut doc, Boundary::new(t1, 1), Tag::P).unwrap();
    assert_eq!(doc.children(host).len(), 3);
    let new_block = doc.children(host)[1];
    assert_eq!(doc.tag(new_block), Some(Tag::P));
    assert_eq!(doc.text_content(p1), "a");
    assert_eq!(doc.text_content(new_block), "b");
    // caret at the start of the new block
    assert_eq!(boundary::closest_block(&doc, s.node), new_block);
    assert_eq!(s.offset, 0);
}

#[test]
fn breakline_at_block_end_props_the_empty_half() {
    let (mut doc, host, _p1, t1, _p2, _t2) = two_paragraphs();
    breakline(&mut doc, Boundary::new(t1, 2), Tag::P).unwrap();
    let new_block = doc.children(host)[1];
    // the empty new paragraph received a BR placeholder
    assert_eq!(doc.children(new_block).len(), 1);
    assert_eq!(doc.tag(doc.children(new_block)[0]), Some(Tag::Br));
}

#[test]
fn insert_text_into_text_node() {
    let (mut doc, _host, _p1, t1, _p2, _t2) = two_paragraphs();
    let after = insert_text_at_boundary(&mut doc, "xy", Boundary::new(t1, 1)).unwrap();
    assert_eq!(doc.text(t1), Some("axyb"));
    assert_eq!(after, Boundary::new(t1, 3));
}

#[test]
fn insert_text_at_element_boundary_creates_a_node() {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    doc.append(host, p);
    let after = insert_text_at_boundary(&mut doc, "hi", Boundary::new(p, 0)).unwrap();
    assert_eq!(doc.text_content(p), "hi");
    assert_eq!(after.offset, 2);
}

#[test]
fn remove_node_adjusts_boundaries() {
    let (mut doc, host, p1, t1, _p2, t2) = two_paragraphs();
    // boundary inside the removed subtree falls back to its position
    let [a, b] = remove_node(
        &mut doc,
        p1,
        [Boundary::new(t1, 1), Boundary::new(t2, 1)],
    );
    assert_eq!(a, Boundary::new(host, 0));
    assert_eq!(b, Boundary::new(t2, 1));
    // sibling offsets after the removed node shift down
    let first_child = doc.children(host)[0];
    let [c, _] = remove_node(
        &mut doc,
        first_child,
        [Boundary::new(host, 1), Boundary::new(host, 1)],
    );
    assert_eq!(c, Boundary::new(host, 0));
}

#[test]
fn prop_gives_empty_blocks_a_placeholder() {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    doc.append(host, p);
    prop(&mut doc, p);
    assert_eq!(doc.children(p).len(), 1);
    assert_eq!(doc.tag(doc.children(p)[0]), Some(Tag::Br));
    // idempotent
    prop(&mut doc, p);
    assert_eq!(doc.children(p).len(), 1);
}
