use wordplaylist::cli::{SessionCommand, parse_command};

#[test]
fn test_bare_numbers_toggle() {
    assert_eq!(
        parse_command("2 5"),
        Some(SessionCommand::Toggle(vec![2, 5]))
    );
    assert_eq!(
        parse_command("toggle 1,3"),
        Some(SessionCommand::Toggle(vec![1, 3]))
    );
}

#[test]
fn test_search_keeps_raw_words() {
    assert_eq!(
        parse_command("search be my, valentine"),
        Some(SessionCommand::Search("be my, valentine".into()))
    );
    assert_eq!(
        parse_command("search"),
        Some(SessionCommand::Search(String::new()))
    );
}

#[test]
fn test_blank_and_unknown_lines() {
    assert_eq!(parse_command("   "), None);
    assert_eq!(
        parse_command("dance"),
        Some(SessionCommand::Unknown("dance".into()))
    );
    assert_eq!(
        parse_command("toggle x"),
        Some(SessionCommand::Unknown("toggle x".into()))
    );
}

#[test]
fn test_name_takes_rest_of_line() {
    assert_eq!(
        parse_command("name  Be My Valentine "),
        Some(SessionCommand::Name("Be My Valentine".into()))
    );
}
