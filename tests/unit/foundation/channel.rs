use super::*;

#[test]
fn narrow_clamps_out_of_range() {
    assert_eq!(narrow(-12.0), 0);
    assert_eq!(narrow(300.5), 255);
    assert_eq!(narrow(f64::INFINITY), 255);
    assert_eq!(narrow(f64::NEG_INFINITY), 0);
    assert_eq!(narrow(f64::NAN), 0);
}

#[test]
fn narrow_rounds_half_to_even() {
    assert_eq!(narrow(100.215), 100);
    assert_eq!(narrow(88.995), 89);
    assert_eq!(narrow(2.5), 2);
    assert_eq!(narrow(3.5), 4);
    assert_eq!(narrow(254.999_999), 255);
}
