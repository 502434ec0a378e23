use mocap_rqa::Error;
use mocap_rqa::pipeline::{
    AutoRqaSegment, ColMeansSegment, CrossRqaSegment, GapFillSegment, Pipeline, Segment,
    ShiftSegment, WindowedCrossRqaSegment,
};
use mocap_rqa::rqa::{RqaConfig, RqaStats, WindowConfig, auto_rqa};
use mocap_rqa::table::{ColumnSelector, Table};
use ndarray::{Array2, array};

fn recording() -> Table {
    Table::from_columns(vec![
        ("hip_z", vec![1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 2.0, 2.0]),
        ("knee_z", vec![3.0, 3.0, 2.0, 2.0, 3.0, 3.0, 2.0, 2.0]),
    ])
    .unwrap()
}

#[test]
fn table_rejects_mismatched_columns() {
    let result = Table::from_columns(vec![("a", vec![1.0, 2.0]), ("b", vec![1.0])]);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn table_rejects_duplicate_names() {
    let data = Array2::zeros((2, 2));
    let result = Table::new(vec!["a".to_string(), "a".to_string()], data);
    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
}

#[test]
fn table_rejects_wrong_name_count() {
    let result = Table::new(vec!["a".to_string()], Array2::zeros((3, 2)));
    assert!(result.is_err());
}

#[test]
fn table_column_access() {
    let table = recording();
    assert_eq!(table.n_rows(), 8);
    assert_eq!(table.n_cols(), 2);
    assert_eq!(table.column_index(&"knee_z".into()).unwrap(), 1);
    assert_eq!(table.column(&ColumnSelector::Index(1)).unwrap()[0], 3.0);
}

#[test]
fn table_rows_are_clamped() {
    let table = recording();
    assert_eq!(table.rows(6, 20).n_rows(), 2);
    assert_eq!(table.rows(10, 20).n_rows(), 0);
    assert_eq!(table.rows(2, 4).column(&"hip_z".into()).unwrap().to_vec(), vec![2.0, 2.0]);
}

#[test]
fn table_with_column_appends_and_replaces() {
    let table = Table::empty().with_column("a", vec![1.0, 2.0]).unwrap();
    assert_eq!(table.n_rows(), 2);

    let table = table.with_column("b", vec![3.0, 4.0]).unwrap();
    assert_eq!(table.names(), ["a", "b"]);

    let table = table.with_column("a", vec![0.0, 0.0]).unwrap();
    assert_eq!(table.n_cols(), 2);
    assert_eq!(table.data().column(0).to_vec(), vec![0.0, 0.0]);

    assert!(table.with_column("c", vec![1.0]).is_err());
}

#[test]
fn column_selector_conversions() {
    assert_eq!(ColumnSelector::from(3usize), ColumnSelector::Index(3));
    assert_eq!(ColumnSelector::from("x"), ColumnSelector::Name("x".to_string()));
    assert_eq!(ColumnSelector::from(String::from("y")).to_string(), "y");
    assert_eq!(ColumnSelector::Index(2).to_string(), "#2");
}

#[test]
fn stats_serialize_with_column_names() {
    let x = array![1.0, 1.0, 2.0, 2.0];
    let out = auto_rqa(x.view(), &RqaConfig::default()).unwrap();
    let json = serde_json::to_value(out.rows()[0]).unwrap();

    for column in RqaStats::COLUMNS {
        assert!(json.get(column).is_some(), "missing {column}");
    }
    assert_eq!(json["recurrence_rate"], 0.5);

    let back: RqaStats = serde_json::from_value(json).unwrap();
    assert_eq!(back, out.rows()[0]);
}

#[test]
fn empty_pipeline_is_an_error() {
    assert!(matches!(
        Pipeline::new().run(recording()),
        Err(Error::EmptyPipeline)
    ));
}

#[test]
fn pipeline_runs_segments_in_order() {
    let pipeline = Pipeline::new()
        .with(ShiftSegment::new("shift", Some(vec!["hip_z".into()]), 1))
        .with(AutoRqaSegment::new(
            "auto",
            "hip_z_shift",
            RqaConfig::default().with_threshold(0.5),
        ));
    assert_eq!(pipeline.len(), 2);
    assert_eq!(pipeline.names(), vec!["shift", "auto"]);

    let out = pipeline.run(recording()).unwrap();
    assert_eq!(out.n_rows(), 1);
    assert_eq!(out.names(), RqaStats::COLUMNS);
}

#[test]
fn pipeline_propagates_segment_errors() {
    let pipeline =
        Pipeline::new().with(CrossRqaSegment::new("crqa", "hip_z", "ankle_z", RqaConfig::default()));
    assert!(matches!(
        pipeline.run(recording()),
        Err(Error::UnknownColumn(_))
    ));
}

#[test]
fn windowed_segment_matches_driver() {
    let cfg = RqaConfig::default();
    let windows = WindowConfig::new(4, 2);
    let segment = WindowedCrossRqaSegment::new("wcrqa", 0usize, 1usize, cfg, windows);
    assert_eq!(segment.name(), "wcrqa");

    let out = segment.process(recording()).unwrap();
    assert_eq!(out.n_rows(), 3);
    assert_eq!(out.column(&"recurrence_rate".into()).unwrap().to_vec(), vec![0.25; 3]);
}

#[test]
fn gap_fill_then_means() {
    let table = Table::from_columns(vec![("a", vec![1.0, f64::NAN, 5.0])]).unwrap();
    let mut pipeline = Pipeline::new();
    pipeline.push(GapFillSegment::new("fill"));
    pipeline.push(ColMeansSegment::new("means", None));

    let out = pipeline.run(table).unwrap();
    assert_eq!(out.data()[(0, 0)], 3.0);
}

#[test]
fn means_segment_selects_columns() {
    let table = Table::from_columns(vec![
        ("a", vec![1.0, 3.0]),
        ("b", vec![10.0, 20.0]),
        ("c", vec![-1.0, 1.0]),
    ])
    .unwrap();
    let columns = vec![ColumnSelector::from("b"), ColumnSelector::Index(0)];
    let segment = ColMeansSegment::new("means", Some(columns));

    let out = segment.process(table).unwrap();
    assert_eq!(out.names(), ["b", "a"]);
    assert_eq!(out.data().row(0).to_vec(), vec![15.0, 2.0]);
}

#[test]
fn auto_segment_on_empty_table() {
    let segment = AutoRqaSegment::new("auto", 0usize, RqaConfig::default());
    let out = segment.process(Table::empty()).unwrap();
    assert_eq!(out.n_rows(), 0);
    assert_eq!(out.names(), RqaStats::COLUMNS);
}
