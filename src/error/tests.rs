use super::*;

#[test]
fn display_includes_kind_and_message() {
    let err = EditError::boundary("offset 10 out of range");
    assert_eq!(err.kind, ErrorKind::Boundary);
    assert_eq!(err.to_string(), "Boundary: offset 10 out of range");
}

#[test]
fn from_str_is_internal() {
    let err: EditError = "bad state".into();
    assert_eq!(err.kind, ErrorKind::Internal);
    assert_eq!(err.message, "bad state");
}

#[test]
fn constructors_set_kind() {
    assert_eq!(EditError::mutation("x").kind, ErrorKind::Mutation);
    assert_eq!(EditError::parse("x").kind, ErrorKind::Parse);
    assert_eq!(
        EditError::new(ErrorKind::History, "x").kind,
        ErrorKind::History
    );
}
