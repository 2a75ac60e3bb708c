use super::Operator;
use pretty_assertions::assert_eq;

#[test]
fn display_matches_canonical_text() {
    assert_eq!(Operator::Le.to_string(), "<=");
    assert_eq!(Operator::Missing.to_string(), "MISSING");
}

#[test]
fn all_and_match_order_cover_the_same_set() {
    let mut all = Operator::ALL.to_vec();
    let mut order = Operator::MATCH_ORDER.to_vec();
    all.sort_by_key(|op| op.text());
    order.sort_by_key(|op| op.text());
    assert_eq!(all, order);
}

#[test]
fn canonical_texts_are_unique() {
    for (i, a) in Operator::ALL.iter().enumerate() {
        for b in &Operator::ALL[i + 1..] {
            assert_ne!(a.text(), b.text(), "{a:?} and {b:?} share a text");
        }
    }
}

#[test]
fn match_order_never_shadows_a_longer_operator() {
    // If one operator's text is a strict prefix of another's, the longer
    // one must be tried first.
    for (i, shorter) in Operator::MATCH_ORDER.iter().enumerate() {
        for longer in &Operator::MATCH_ORDER[i + 1..] {
            assert!(
                !longer.text().starts_with(shorter.text()),
                "`{}` would shadow `{}`",
                shorter.text(),
                longer.text()
            );
        }
    }
}
