use super::*;

#[test]
fn remote_defaults_to_loading() {
    let remote: Remote<Vec<u8>> = Remote::default();
    assert!(remote.is_loading());
    assert!(remote.items().is_empty());
    assert_eq!(remote.error(), None);
}

#[test]
fn remote_from_ok_is_ready() {
    let remote = Remote::from_result(Ok(vec![1, 2]));
    assert_eq!(remote.ready(), Some(&vec![1, 2]));
    assert_eq!(remote.items(), &[1, 2]);
}

#[test]
fn remote_from_err_keeps_display_message() {
    let remote: Remote<()> = Remote::from_result(Err(ApiError::Status { status: 404, message: "Not found".to_owned() }));
    assert_eq!(remote.error(), Some("Not found"));
    assert!(!remote.is_loading());
}
