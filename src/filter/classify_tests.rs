use super::*;

use crate::config::StripConfig;

fn rules() -> RuleSet {
    RuleSet::from_config(&StripConfig::default()).unwrap()
}

#[test]
fn unmatched_line_is_kept_with_trailing_whitespace_stripped() {
    let set = rules();
    let classifier = LineClassifier::new(&set);
    assert_eq!(
        classifier.classify("\tcolumn 'Order Key'   "),
        LineDecision::Keep("\tcolumn 'Order Key'".to_string())
    );
}

#[test]
fn comments_are_kept_verbatim() {
    let set = rules();
    let classifier = LineClassifier::new(&set);
    assert_eq!(
        classifier.classify("  // annotations below were hand-written"),
        LineDecision::Keep("  // annotations below were hand-written".to_string())
    );
}

#[test]
fn simple_rule_drops_single_line() {
    let set = rules();
    let classifier = LineClassifier::new(&set);
    assert_eq!(
        classifier.classify("lineageTag: \"abc123\""),
        LineDecision::DropSingle("lineageTag")
    );
}

#[test]
fn block_starter_reports_line_delta() {
    let set = rules();
    let classifier = LineClassifier::new(&set);
    assert_eq!(
        classifier.classify("extendedProperties = {"),
        LineDecision::EnterBlock {
            rule: "extendedProperties",
            delta: 1
        }
    );
    assert_eq!(
        classifier.classify("extendedProperties = {}"),
        LineDecision::EnterBlock {
            rule: "extendedProperties",
            delta: 0
        }
    );
}

#[test]
fn first_match_wins_in_rule_order() {
    let set = rules();
    let classifier = LineClassifier::new(&set);
    // `annotation` is registered before the lineage rules; a line matching the
    // bare-prefix shape must be claimed by it even if later rules could match.
    assert_eq!(
        classifier.classify("annotation lineageTag = x"),
        LineDecision::EnterBlock {
            rule: "annotation",
            delta: 0
        }
    );
}
