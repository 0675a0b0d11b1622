use super::*;

#[test]
fn default_bindings_resolve() {
    let map = Keymap::default();
    let kd = EventKind::Keydown;
    assert_eq!(
        map.resolve(kd, Chord::plain(Key::Backspace)),
        Some(ActionName::DeleteBackward)
    );
    assert_eq!(
        map.resolve(kd, Chord::shift(Key::Enter)),
        Some(ActionName::BreakLine)
    );
    assert_eq!(
        map.resolve(kd, Chord::ctrl(Key::Char('b'))),
        Some(ActionName::FormatBold)
    );
    // meta aliases the ctrl shortcuts
    assert_eq!(
        map.resolve(kd, Chord::meta(Key::Char('z'))),
        Some(ActionName::Undo)
    );
    assert_eq!(
        map.resolve(kd, Chord::ctrl_shift(Key::Char('z'))),
        Some(ActionName::Redo)
    );
    assert_eq!(
        map.resolve(kd, Chord::plain(Key::ArrowLeft)),
        Some(ActionName::Navigate)
    );
    assert_eq!(
        map.resolve(kd, Chord::ctrl(Key::Char('1'))),
        Some(ActionName::Metaview(MetaviewPreset::Outline))
    );
}

#[test]
fn printable_keypress_falls_through_to_input() {
    let map = Keymap::default();
    assert_eq!(
        map.resolve(EventKind::Keypress, Chord::plain(Key::Char('x'))),
        Some(ActionName::InputText)
    );
    // shift does not block text input
    assert_eq!(
        map.resolve(EventKind::Keypress, Chord::shift(Key::Char('X'))),
        Some(ActionName::InputText)
    );
}

#[test]
fn modified_or_control_keypresses_do_not_insert() {
    let map = Keymap::default();
    assert_eq!(
        map.resolve(EventKind::Keypress, Chord::ctrl(Key::Char('x'))),
        None
    );
    assert_eq!(
        map.resolve(EventKind::Keypress, Chord::plain(Key::Char('\u{8}'))),
        None
    );
    assert_eq!(
        map.resolve(EventKind::Keypress, Chord::plain(Key::ArrowLeft)),
        None
    );
}

#[test]
fn unbound_keydown_resolves_to_nothing() {
    let map = Keymap::default();
    assert_eq!(
        map.resolve(EventKind::Keydown, Chord::plain(Key::Char('x'))),
        None
    );
    assert_eq!(map.resolve(EventKind::Keyup, Chord::plain(Key::Enter)), None);
}

#[test]
fn registration_overrides_a_default() {
    let mut map = Keymap::default();
    map.register(
        EventKind::Keydown,
        Chord::plain(Key::Enter),
        ActionName::BreakLine,
    );
    assert_eq!(
        map.resolve(EventKind::Keydown, Chord::plain(Key::Enter)),
        Some(ActionName::BreakLine)
    );
}
