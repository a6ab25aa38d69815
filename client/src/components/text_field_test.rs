use super::*;

#[test]
fn control_class_plain_without_icon() {
    assert_eq!(control_class(false), "text-field__control");
}

#[test]
fn control_class_pads_for_leading_icon() {
    assert_eq!(control_class(true), "text-field__control text-field__control--icon");
}
