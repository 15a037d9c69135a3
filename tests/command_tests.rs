use pretty_assertions::assert_eq;
use quantum_password_analyzer::commands::{
    execute_pipeline, execute_transform, execute_visualize, list_tables, select_table,
    validate_args, PipelineArgs, TransformArgs, VisualizeArgs,
};
use quantum_password_analyzer::utils::AnalyzerConfig;
use std::fs;
use std::path::{Path, PathBuf};

const INPUT: &str = "\
Number of Characters,Numbers Only,Lowercase Letters
4,Instantly,1 second
8,1 hour,1 week
10,1 day,3 years
";

fn config() -> AnalyzerConfig {
    let mut config = AnalyzerConfig::default();
    config.heatmap = config.heatmap.with_size(4.0, 3.0).with_dpi(40);
    config
}

fn transform_args(dir: &Path, factor: f64) -> TransformArgs {
    let input = dir.join("input.csv");
    fs::write(&input, INPUT).unwrap();

    TransformArgs {
        input,
        output_dir: dir.join("out"),
        factor,
        save_original: false,
    }
}

#[test]
fn test_transform_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = config();

    for factor in [500.0, 100.0] {
        let args = transform_args(temp_dir.path(), factor);
        validate_args(&args, &config).unwrap();
        execute_transform(&args, &config).unwrap();
    }

    let entries = list_tables(temp_dir.path().join("out")).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["100_output.csv", "500_output.csv"]);

    let factors: Vec<Option<f64>> = entries.iter().map(|e| e.factor).collect();
    assert_eq!(factors, vec![Some(100.0), Some(500.0)]);
}

#[test]
fn test_select_then_visualize() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = config();
    let args = transform_args(temp_dir.path(), 100.0);
    execute_transform(&args, &config).unwrap();

    let out_dir = temp_dir.path().join("out");
    let csv = select_table(&out_dir, |entries| {
        entries.iter().position(|e| e.name == "100_output.csv")
    })
    .unwrap()
    .unwrap();

    let image = execute_visualize(
        &VisualizeArgs {
            csv,
            output_dir: None,
            title_prefix: "Quantum".to_string(),
        },
        &config,
    )
    .unwrap();

    assert_eq!(image, out_dir.join("100_output_infographic.png"));
    assert!(image.exists());
}

#[test]
fn test_pipeline_writes_both_artifacts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = PipelineArgs {
        transform: transform_args(temp_dir.path(), 1000.0),
        title_prefix: "Quantum".to_string(),
    };

    let output = execute_pipeline(&args, &config()).unwrap();

    let out_dir: PathBuf = temp_dir.path().join("out");
    assert_eq!(output.table_path, out_dir.join("1000_output.csv"));
    assert_eq!(output.image_path, out_dir.join("1000_output_infographic.png"));
    assert!(output.table_path.exists());
    assert!(output.image_path.exists());
}

#[test]
fn test_pipeline_stops_on_bad_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = PipelineArgs {
        transform: transform_args(temp_dir.path(), 100.0),
        title_prefix: "Quantum".to_string(),
    };
    fs::write(&args.transform.input, "Number of Characters,A\n4,banana\n").unwrap();

    assert!(execute_pipeline(&args, &config()).is_err());
    assert!(list_tables(temp_dir.path().join("out")).unwrap().is_empty());
}

#[test]
fn test_validate_args_uses_configured_range() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = config();
    config.max_factor = 1000.0;

    assert!(validate_args(&transform_args(temp_dir.path(), 1000.0), &config).is_ok());
    assert!(validate_args(&transform_args(temp_dir.path(), 1000.5), &config).is_err());
}
