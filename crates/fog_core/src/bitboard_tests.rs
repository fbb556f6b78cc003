use super::*;

#[test]
fn test_center_mask() {
    let squares: Vec<u8> = Bitboard::CENTER.collect();
    assert_eq!(squares, vec![27, 28, 35, 36]); // d4 e4 d5 e5
}

#[test]
fn test_iterator_ascending() {
    let bb = Bitboard(0b1010);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3]);
}

#[test]
fn test_lsb_and_collect() {
    let bb: Bitboard = [5u8, 40, 17].into_iter().collect();
    assert_eq!(bb.lsb(), Some(5));
    assert_eq!(bb.popcount(), 3);
    assert_eq!(Bitboard::EMPTY.lsb(), None);
}

#[test]
fn test_set_and_clear() {
    let mut bb = Bitboard::EMPTY;
    bb.set(63);
    assert!(bb.contains(63));
    assert_eq!(bb.popcount(), 1);
    bb.clear(63);
    assert!(bb.is_empty());
}
