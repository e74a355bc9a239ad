// File: crates/logo-core/tests/consensus.rs
// Purpose: Group arbitration at each threshold and the per-letter consensus color rules.

use logo_core::consensus::{letter_color, THRESHOLDS};
use logo_core::palette::{
    CONSENSUS_BLUE, CONSENSUS_CYAN, CONSENSUS_GLYCINE, CONSENSUS_GREEN, CONSENSUS_GREY,
    CONSENSUS_PROLINE, CONSENSUS_RED,
};
use logo_core::{
    arbitrate, Alphabet, Column, ConsensusColorMap, ConsensusTable, Group, GroupScores, HeightCalc,
    LogoData, LogoError,
};

fn aa_logo(probabilities: Vec<Vec<(char, f64)>>) -> LogoData {
    let n = probabilities.len();
    let columns = probabilities.iter().map(|p| Column::new(p.clone())).collect();
    LogoData::new(Alphabet::Aa, HeightCalc::Probability, columns, 4.32, 4.0, vec![0.0; n])
        .with_probabilities(probabilities.into_iter().map(Column::new).collect())
}

#[test]
fn score_at_threshold_qualifies_and_smaller_class_wins() {
    // H counts as both positive and hydrophobic.
    let s = GroupScores::from_probabilities(&[('H', 0.5), ('A', 0.5)]);
    assert_eq!(s.positive, 0.5);
    assert_eq!(s.hydrophobic, 1.0);

    // Both qualify at 0.50; '+' has 3 members against 11.
    assert_eq!(arbitrate(&s, 0.50), Group::Positive);
    assert_eq!(arbitrate(&s, 0.60), Group::Hydrophobic);
    assert_eq!(arbitrate(&s, 0.85).symbol(), 'h');
}

#[test]
fn equal_class_size_goes_to_higher_score_then_group_order() {
    let s = GroupScores::from_probabilities(&[('Q', 0.45), ('S', 0.55)]);
    assert_eq!(arbitrate(&s, 0.4), Group::Alcohol);

    let tie = GroupScores::from_probabilities(&[('N', 0.5), ('D', 0.5)]);
    assert_eq!(arbitrate(&tie, 0.5), Group::Polar);
}

#[test]
fn no_candidate_is_unclassified() {
    let s = GroupScores::from_probabilities(&[('G', 0.6), ('K', 0.2), ('D', 0.2)]);
    assert_eq!(arbitrate(&s, THRESHOLDS[0]), Group::Unclassified);
    assert_eq!(Group::Unclassified.symbol(), '.');
}

#[test]
fn table_rows_follow_thresholds() {
    let probs = vec![Column::new(vec![('K', 0.55), ('A', 0.45)])];
    let table = ConsensusTable::build(&probs);
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.column(1),
        Some([Group::Positive, Group::Unclassified, Group::Unclassified, Group::Unclassified])
    );
    assert_eq!(table.group(0, 1), Some(Group::Positive));
    assert_eq!(table.column(2), None);
    assert_eq!(table.group(0, 0), None);
}

#[test]
fn letter_rules_color_each_column() {
    let data = aa_logo(vec![
        vec![('D', 0.9), ('E', 0.1)],
        vec![('K', 0.55), ('A', 0.45)],
        vec![('L', 0.7), ('I', 0.3)],
        vec![('G', 0.5), ('P', 0.2), ('W', 0.3)],
    ]);
    let map = ConsensusColorMap::compute(&data).unwrap();
    assert_eq!(map.len(), 4);

    // Strongly negative column.
    assert_eq!(map.color(1, 'D'), CONSENSUS_RED);
    assert_eq!(map.color(1, 'E'), CONSENSUS_RED);
    assert_eq!(map.color(1, 'Q'), CONSENSUS_GREEN);
    assert_eq!(map.color(1, 'N'), CONSENSUS_GREY);

    // Positive only at the lowest threshold: K and R diverge.
    assert_eq!(map.color(2, 'K'), CONSENSUS_RED);
    assert_eq!(map.color(2, 'R'), CONSENSUS_GREY);
    assert_eq!(map.color(2, 'A'), CONSENSUS_GREY);

    // Hydrophobic at every threshold.
    assert_eq!(map.color(3, 'L'), CONSENSUS_BLUE);
    assert_eq!(map.color(3, 'A'), CONSENSUS_BLUE);
    assert_eq!(map.color(3, 'H'), CONSENSUS_CYAN);
    assert_eq!(map.color(3, 'Y'), CONSENSUS_CYAN);
    assert_eq!(map.color(3, 'S'), CONSENSUS_GREY);

    // P and G are colored regardless of the column.
    for col in 1..=4 {
        assert_eq!(map.color(col, 'P'), CONSENSUS_PROLINE);
        assert_eq!(map.color(col, 'G'), CONSENSUS_GLYCINE);
    }
    assert_eq!(map.color(4, 'W'), CONSENSUS_GREY);
}

#[test]
fn unknown_letters_and_columns_are_grey() {
    let groups = [Group::Hydrophobic; 4];
    assert_eq!(letter_color('X', &groups), CONSENSUS_GREY);
    assert_eq!(letter_color('L', &groups), CONSENSUS_BLUE);

    let map = ConsensusColorMap::compute(&aa_logo(vec![vec![('L', 1.0)]])).unwrap();
    assert_eq!(map.color(0, 'L'), CONSENSUS_GREY);
    assert_eq!(map.color(2, 'L'), CONSENSUS_GREY);
}

#[test]
fn compute_requires_probabilities() {
    let data = LogoData::new(
        Alphabet::Aa,
        HeightCalc::Probability,
        vec![Column::new(vec![('L', 1.0)])],
        4.32,
        4.0,
        vec![0.0],
    );
    match ConsensusColorMap::compute(&data) {
        Err(LogoError::Config { message }) => assert!(message.contains("probabilities")),
        other => panic!("expected config error, got {:?}", other.map(|m| m.len())),
    }
}
