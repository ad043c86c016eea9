use super::*;

#[test]
fn every_status_has_a_distinct_pill() {
    let classes: Vec<&str> = InquiryStatus::ALL.into_iter().map(status_pill_class).collect();
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("pill "));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn closed_inquiries_use_green_pill() {
    assert_eq!(status_pill_class(InquiryStatus::Closed), "pill pill--green");
}
