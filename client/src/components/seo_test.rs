use super::*;

#[test]
fn page_title_appends_site_name() {
    assert_eq!(page_title("Contact"), "Contact | Brisk Farm Solutions & Construction Company");
}

#[test]
fn page_title_blank_is_site_name() {
    assert_eq!(page_title("  "), SITE_NAME);
    assert_eq!(page_title(SITE_NAME), SITE_NAME);
}
