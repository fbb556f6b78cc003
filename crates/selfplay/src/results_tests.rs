use super::*;

fn sample_report() -> MatchReport {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    MatchReport {
        engine1: "alphabeta".to_string(),
        engine2: "random:0".to_string(),
        config: SelfPlayConfig::default(),
        result,
        games: vec![
            GameRecord {
                outcome: GameOutcome::WhiteWins,
                plies: 3,
                moves: vec!["e2e4".into(), "e7e5".into(), "d1h5".into()],
            },
            GameRecord {
                outcome: GameOutcome::DrawByPlyCap,
                plies: 300,
                moves: Vec::new(),
            },
        ],
    }
}

#[test]
fn match_result_score() {
    let report = sample_report();
    assert_eq!(report.result.total_games(), 2);
    assert!((report.result.score() - 0.75).abs() < 1e-9);
    assert_eq!(MatchResult::new().score(), 0.5);
}

#[test]
fn report_counts_outcomes() {
    let report = sample_report();
    assert_eq!(report.count(GameOutcome::DrawByPlyCap), 1);
    assert_eq!(report.count(GameOutcome::DrawByBlockade), 0);
    let text = report.generate_report();
    assert!(text.contains("alphabeta vs random:0"));
    assert!(text.contains("Score: 75.0%"));
}

#[test]
fn report_json_layout() {
    let json = serde_json::to_value(sample_report()).unwrap();
    assert_eq!(json["games"][0]["outcome"], "white_wins");
    assert_eq!(json["games"][1]["outcome"], "draw_by_ply_cap");
    assert_eq!(json["config"]["white"], "alphabeta");
    assert_eq!(json["result"]["wins"], 1);
}

#[test]
fn report_saves_and_loads() {
    let path = std::env::temp_dir().join(format!("selfplay-report-{}.json", std::process::id()));
    let report = sample_report();
    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.result, report.result);
    assert_eq!(loaded.games, report.games);
    assert_eq!(loaded.config, report.config);
}

#[test]
fn missing_report_is_io_error() {
    let err = MatchReport::load(Path::new("/nonexistent/selfplay/report.json")).unwrap_err();
    assert!(matches!(err, SelfPlayError::Io { .. }));
}
