use super::*;

#[test]
fn parse_house_id_accepts_positive_integers() {
    assert_eq!(parse_house_id(Some("42")), Ok(42));
    assert_eq!(parse_house_id(Some(" 7 ")), Ok(7));
}

#[test]
fn parse_house_id_rejects_garbage() {
    assert_eq!(parse_house_id(Some("abc")), Err("Unknown house \"abc\".".to_owned()));
    assert_eq!(parse_house_id(Some("0")), Err("Unknown house \"0\".".to_owned()));
    assert_eq!(parse_house_id(Some("-3")), Err("Unknown house \"-3\".".to_owned()));
    assert_eq!(parse_house_id(None), Err("Unknown house \"\".".to_owned()));
}

#[test]
fn responses_for_a_previous_route_id_are_stale() {
    assert!(is_current_house(7, Some("7")));
    assert!(is_current_house(7, Some(" 7 ")));
    assert!(!is_current_house(7, Some("8")));
    assert!(!is_current_house(7, Some("abc")));
    assert!(!is_current_house(7, None));
}
