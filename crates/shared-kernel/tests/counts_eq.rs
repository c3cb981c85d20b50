// crates/shared-kernel/tests/counts_eq.rs
use line_counter_shared_kernel::LineCount;

#[test]
fn eq_with_usize_both_sides() {
    let count = LineCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}

#[test]
fn json_is_transparent() {
    let json = serde_json::to_string(&LineCount::from(255_361)).expect("serializes");
    assert_eq!(json, "255361");
    assert_eq!(LineCount::new(0).to_string(), "0");
}
