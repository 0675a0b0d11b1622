use super::*;

#[test]
fn state_reflects_last_entry_for_a_style() {
    let mut set = OverrideSet::new();
    assert_eq!(set.state(Style::Bold), None);
    set.set(Override { style: Style::Bold, active: true });
    assert_eq!(set.state(Style::Bold), Some(true));
    set.set(Override { style: Style::Bold, active: false });
    assert_eq!(set.state(Style::Bold), Some(false));
    assert_eq!(set.len(), 1);
}

#[test]
fn join_later_sets_win() {
    let mut a = OverrideSet::new();
    a.set(Override { style: Style::Bold, active: true });
    a.set(Override { style: Style::Italic, active: true });
    let mut b = OverrideSet::new();
    b.set(Override { style: Style::Bold, active: false });
    let joined = OverrideSet::join(&[&a, &b]);
    assert_eq!(joined.state(Style::Bold), Some(false));
    assert_eq!(joined.state(Style::Italic), Some(true));
}

#[test]
fn toggle_twice_restores_membership() {
    let set = OverrideSet::new();
    let once = set.toggle(Style::Underline, true);
    assert_eq!(once.state(Style::Underline), Some(true));
    let twice = once.toggle(Style::Underline, true);
    assert_eq!(twice.state(Style::Underline), Some(false));
    let thrice = twice.toggle(Style::Underline, true);
    assert_eq!(thrice.state(Style::Underline), Some(true));
}

#[test]
fn harvest_reads_styled_ancestors() {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let bold = doc.create_element(Tag::B);
    let italic = doc.create_element(Tag::I);
    let t = doc.create_text("x");
    doc.append(host, p);
    doc.append(p, bold);
    doc.append(bold, italic);
    doc.append(italic, t);

    let set = harvest(&doc, t);
    assert_eq!(set.state(Style::Bold), Some(true));
    assert_eq!(set.state(Style::Italic), Some(true));
    assert_eq!(set.state(Style::Underline), None);
}

#[test]
fn harvest_stops_at_the_editing_host() {
    let mut doc = Document::new();
    let outer = doc.create_element(Tag::B);
    let host = doc.create_editing_host(Tag::Div);
    let t = doc.create_text("x");
    doc.append(outer, host);
    doc.append(host, t);
    assert!(harvest(&doc, t).is_empty());
}

#[test]
fn consume_wraps_an_active_override() {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let t = doc.create_text("ab");
    doc.append(host, p);
    doc.append(p, t);

    let mut set = OverrideSet::new();
    set.set(Override { style: Style::Bold, active: true });
    let b = consume(&mut doc, Boundary::new(t, 1), &set).unwrap();
    // caret lands inside a fresh empty <b>
    assert_eq!(doc.tag(b.node), Some(Tag::B));
    assert_eq!(b.offset, 0);
    assert_eq!(doc.text_content(p), "ab");
}

#[test]
fn consume_splits_out_of_an_unwanted_style() {
    // caret inside <b>ab</b>, override says bold off
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let bold = doc.create_element(Tag::B);
    let t = doc.create_text("ab");
    doc.append(host, p);
    doc.append(p, bold);
    doc.append(bold, t);

    let mut set = OverrideSet::new();
    set.set(Override { style: Style::Bold, active: false });
    let b = consume(&mut doc, Boundary::new(t, 1), &set).unwrap();
    // caret sits between the two <b> halves
    assert_eq!(b.node, p);
    assert_eq!(b.offset, 1);
    assert_eq!(doc.children(p).len(), 2);
    assert_eq!(doc.text_content(p), "ab");
}

#[test]
fn consume_ignores_overrides_matching_the_ambient_style() {
    let mut doc = Document::new();
    let host = doc.create_editing_host(Tag::Div);
    let p = doc.create_element(Tag::P);
    let bold = doc.create_element(Tag::B);
    let t = doc.create_text("ab");
    doc.append(host, p);
    doc.append(p, bold);
    doc.append(bold, t);

    let mut set = OverrideSet::new();
    set.set(Override { style: Style::Bold, active: true });
    let b = consume(&mut doc, Boundary::new(t, 1), &set).unwrap();
    assert_eq!(b, Boundary::new(t, 1));
}
