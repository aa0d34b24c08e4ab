//! Tests for the derive macros (`Tagged` and `Record`).
//!
//! - `#[derive(Tagged)]`: constant tag, optional name and parent
//! - `#[derive(Record)]`: constructor, getters, copies and display

use casebox::container::Container;
use casebox::matching::{
    Matchable, StaticTagged, Tagged, TypeTag, evaluate, tags, type_tag_case, wildcard_case,
};
use casebox::{Record, Tagged};
use rstest::rstest;

// =============================================================================
// Tagged
// =============================================================================

const COMMAND: TypeTag = TypeTag::root("Command");

#[derive(Debug, Tagged)]
struct Plain;

#[derive(Debug, Tagged)]
#[tagged(name = "Shutdown")]
enum ShutdownCommand {
    Now,
    After(u32),
}

#[derive(Debug, PartialEq, Tagged)]
#[tagged(parent = COMMAND)]
struct RestartCommand {
    delay: u32,
}

#[derive(Debug, Tagged)]
#[tagged(parent = tags::ERROR)]
struct Wrapped<T> {
    inner: T,
}

#[rstest]
fn test_default_name_is_type_name() {
    assert_eq!(Plain::TYPE_TAG.name(), "Plain");
    assert_eq!(Plain::TYPE_TAG.parent(), None);
    assert_eq!(Tagged::type_tag(&Plain), Plain::TYPE_TAG);
}

#[rstest]
fn test_name_attribute_applies_to_every_variant() {
    assert_eq!(Tagged::type_tag(&ShutdownCommand::Now).name(), "Shutdown");
    assert_eq!(Tagged::type_tag(&ShutdownCommand::After(5)).name(), "Shutdown");
}

#[rstest]
fn test_parent_attribute() {
    let restart = RestartCommand { delay: 3 };
    assert!(Tagged::type_tag(&restart).is_a(&COMMAND));
    assert_eq!(RestartCommand::TYPE_TAG.parent(), Some(&COMMAND));
    assert_eq!(restart.delay, 3);
}

#[rstest]
fn test_generic_type() {
    let wrapped = Wrapped { inner: 1_u8 };
    assert!(Wrapped::<u8>::TYPE_TAG.is_a(&tags::ERROR));
    assert_eq!(Matchable::type_tag(&wrapped), Some(Wrapped::<u8>::TYPE_TAG));
    assert_eq!(wrapped.as_text(), None);
    assert_eq!(wrapped.inner, 1);
}

#[rstest]
fn test_derived_tag_drives_cases() {
    let cases = vec![
        type_tag_case(COMMAND, |command: &RestartCommand| command.delay),
        wildcard_case(|_: &RestartCommand| 0),
    ];
    assert_eq!(evaluate(&RestartCommand { delay: 7 }, &cases), Some(7));
}

// =============================================================================
// Record
// =============================================================================

#[derive(Clone, Debug, PartialEq, Record)]
struct EchoMessage {
    message: String,
    times: u32,
}

#[derive(Clone, Debug, PartialEq, Record)]
#[tagged(name = "Point", parent = COMMAND)]
struct Coordinates<T> {
    x: T,
    y: T,
}

#[rstest]
fn test_record_constructor_and_getters() {
    let echo = EchoMessage::new("hi".to_string(), 2);
    assert_eq!(echo.message(), "hi");
    assert_eq!(*echo.times(), 2);
}

#[rstest]
fn test_record_copy_with_leaves_receiver_unchanged() {
    let echo = EchoMessage::new("hi".to_string(), 2);
    let louder = echo.copy_with(|copy| copy.times = 5);

    assert_eq!(*louder.times(), 5);
    assert_eq!(louder.message(), "hi");
    assert_eq!(*echo.times(), 2);
}

#[rstest]
fn test_record_as_container() {
    let echo = EchoMessage::new("hi".to_string(), 2);
    assert_eq!(echo.as_container(), Container::new(echo.clone()));
}

#[rstest]
fn test_record_display() {
    let echo = EchoMessage::new("hi".to_string(), 2);
    assert_eq!(echo.to_string(), r#"EchoMessage { message: "hi", times: 2 }"#);
}

#[rstest]
fn test_generic_record_with_tag_attributes() {
    let point = Coordinates::new(1.5, -2.0);
    assert_eq!(*point.x(), 1.5);
    assert_eq!(point.to_string(), "Coordinates { x: 1.5, y: -2.0 }");
    assert_eq!(Coordinates::<f64>::TYPE_TAG.name(), "Point");
    assert!(Tagged::type_tag(&point).is_a(&COMMAND));
}
