use xsum_core::{Alphabet, SubsetSumIndex};

fn dozenal() -> SubsetSumIndex {
    SubsetSumIndex::generate(Alphabet::new("0123456789XE").unwrap()).unwrap()
}

fn decimal() -> SubsetSumIndex {
    SubsetSumIndex::generate(Alphabet::default()).unwrap()
}

#[test]
fn dozenal_catalog_size() {
    assert_eq!(dozenal().len(), 2036);
}

#[test]
fn total_fifteen_includes_one_two_three_nine() {
    let view = dozenal().with_total(15);
    assert!(view
        .iter()
        .any(|e| e.digits().iter().collect::<Vec<_>>() == vec![1, 2, 3, 9]));
    assert!(view.iter().all(|e| e.total() == 15));
    assert!(!view.iter().any(|e| e.total() == 14 || e.total() == 16));
}

#[test]
fn chained_required_cardinality_total() {
    let view = dozenal()
        .with_digit_chars("23")
        .unwrap()
        .with_cardinality(5)
        .with_total_numeral("19")
        .unwrap();
    assert!(!view.is_empty());
    for entry in &view {
        assert!(entry.digits().contains(2) && entry.digits().contains(3));
        assert_eq!(entry.cardinality(), 5);
        assert_eq!(entry.total(), 21);
    }
    let first: Vec<u8> = view.iter().next().unwrap().digits().iter().collect();
    assert_eq!(first, vec![1, 2, 3, 4, 11]);
}

#[test]
fn decimal_max_total_is_forty_five() {
    assert_eq!(decimal().max_total().unwrap(), 45);
}

#[test]
fn ten_addends_in_decimal_is_empty() {
    assert!(decimal().with_cardinality(10).is_empty());
}

#[test]
fn zero_queries_are_not_ignored() {
    let index = decimal();
    assert!(index.with_total(0).is_empty());
    assert!(index.with_cardinality(0).is_empty());
    assert!(index.with_digits([0u8]).unwrap().is_empty());
    assert_eq!(index.with_digits(std::iter::empty::<u8>()).unwrap().len(), index.len());
}

#[test]
fn render_dozenal_entry() {
    let index = dozenal();
    let entry = index
        .with_total_numeral("1X")
        .unwrap()
        .with_digit_chars("XE")
        .unwrap();
    let entry = entry.iter().next().unwrap();
    let rendered = index.render(entry).unwrap();
    assert_eq!(rendered.total, "1X");
    assert_eq!(rendered.addends, vec!["1", "X", "E"]);
    assert_eq!(rendered.to_string(), "1X = 1 + X + E");
}

#[test]
fn max_total_renders_in_base() {
    let index = dozenal();
    let max = index.max_total().unwrap();
    assert_eq!(max, 66);
    assert_eq!(index.alphabet().format_numeral(max), "56");
}
