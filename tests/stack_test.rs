//! Stack capture, frame formatting, and extended rendering

use errchain::{root_cause, with_message, with_stack, wrap, Error, CODE_NOT_DEFINED};

#[inline(never)]
fn innermost_capture() -> Error {
    Error::new("captured")
}

#[inline(never)]
fn middle_layer() -> Error {
    innermost_capture()
}

#[test]
fn leaf_errors_capture_a_stack() {
    let err = middle_layer();
    let stack = err.stack().expect("leaf errors capture a stack");
    assert!(!stack.is_empty());
    assert_eq!(stack.len(), stack.frames().len());
}

#[test]
fn frames_are_ordered_innermost_first() {
    let err = middle_layer();
    let rendered = format!("{:#}", err.stack().expect("leaf errors capture a stack"));
    // Both helpers are #[inline(never)], so a test build must be able to
    // resolve their frames; anything else means the capture went wrong.
    let inner = rendered
        .find("innermost_capture")
        .expect("inner call site should resolve in test builds");
    let outer = rendered
        .find("middle_layer")
        .expect("outer call site should resolve in test builds");
    assert!(
        inner < outer,
        "inner frame should precede outer frame:\n{rendered}"
    );
}

#[test]
fn frame_accessors_never_fail() {
    let err = Error::new("probe");
    let stack = err.stack().expect("leaf errors capture a stack");
    let frame = &stack.frames()[0];

    assert_ne!(frame.ip(), 0);
    assert!(!frame.name().is_empty());
    assert!(!frame.file().is_empty());

    let short = format!("{frame}");
    assert!(short.contains(':'), "short form is file:line, got {short}");

    let detailed = format!("{frame:#}");
    assert!(
        detailed.contains("\n\t"),
        "detailed form is function then tab-indented file:line, got {detailed}"
    );
}

#[test]
fn trace_short_form_is_a_bracketed_list() {
    let err = Error::new("probe");
    let rendered = err.stack().expect("leaf errors capture a stack").to_string();
    assert!(rendered.starts_with('['));
    assert!(rendered.ends_with(']'));
}

#[test]
fn with_stack_captures_its_own_trace() {
    let annotated = with_stack(Some(Error::new("base"))).expect("cause was present");
    assert!(annotated.stack().is_some());
    // The leaf keeps its own, separate capture.
    let root = root_cause(&annotated)
        .downcast_ref::<Error>()
        .expect("root is a leaf error");
    assert!(root.stack().is_some());
}

#[test]
fn message_only_annotation_captures_nothing() {
    let annotated = with_message(Some(Error::new("base")), "context").expect("cause was present");
    assert!(annotated.stack().is_none());
}

#[test]
fn wrap_adds_one_message_and_one_stack_layer() {
    let wrapped = wrap(Some(Error::new("inner")), "outer").expect("cause was present");
    assert!(wrapped.stack().is_some());
    assert_eq!(wrapped.message(), "outer");
    assert_eq!(wrapped.to_string(), "outer: inner");
}

#[test]
fn extended_form_renders_causes_before_annotations() {
    let wrapped = wrap(Some(Error::new("inner")), "outer").expect("cause was present");
    let rendered = format!("{wrapped:#}");

    let inner = rendered.find("inner").expect("inner message rendered");
    let outer = rendered.find("outer").expect("outer message rendered");
    assert!(inner < outer, "cause renders before its annotation");
    assert!(rendered.contains("\n\t"), "extended form includes frames");

    // Debug is the extended form as well.
    assert_eq!(rendered, format!("{wrapped:?}"));
}

#[test]
fn end_to_end_annotation_scenario() {
    let base = Error::new("file not found");
    let mid = with_message(Some(base), "open config").expect("cause was present");
    let outer = with_stack(Some(mid)).expect("cause was present");

    assert_eq!(outer.to_string(), "open config: file not found");
    assert_eq!(outer.message(), "open config");
    assert_eq!(outer.code(), CODE_NOT_DEFINED);
    assert_eq!(root_cause(&outer).to_string(), "file not found");

    let rendered = format!("{outer:#}");
    assert!(rendered.contains("open config"));
    assert!(rendered.contains("file not found"));
    assert!(rendered.contains("\n\t"), "extended form includes frames");
}
