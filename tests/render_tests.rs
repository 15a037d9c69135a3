use quantum_password_analyzer::heatmap::{build_heatmap, render_infographic};
use quantum_password_analyzer::table::read_table;
use quantum_password_analyzer::utils::{AnalyzerConfig, RenderError};
use std::fs;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn small_config() -> AnalyzerConfig {
    let mut config = AnalyzerConfig::default();
    config.heatmap = config.heatmap.with_size(4.0, 3.0).with_dpi(50);
    config
}

/// Width and height from the IHDR chunk
fn png_size(path: &Path) -> (u32, u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

fn write_csv(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_renders_png_next_to_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv = write_csv(
        temp_dir.path(),
        "500_output.csv",
        "Number of Characters,Numbers Only,Lowercase Letters\n4,Instantly,Instantly\n8,2.3 seconds,20.16 minutes\n12,3.65 days,4.2k years\n",
    );

    let image = render_infographic(&csv, None, "Quantum", &small_config()).unwrap();

    assert_eq!(image, temp_dir.path().join("500_output_infographic.png"));
    assert_eq!(png_size(&image), (200, 150));
}

#[test]
fn test_flat_table_renders() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv = write_csv(
        temp_dir.path(),
        "100_output.csv",
        "Number of Characters,A,B\n4,1 day,1 day\n5,1 day,1 day\n",
    );

    let config = small_config();
    let image = render_infographic(&csv, None, "Flat", &config).unwrap();
    assert_eq!(png_size(&image), (200, 150));

    let table = read_table(&csv, &config.length_column).unwrap();
    let heatmap = build_heatmap(&table, &config.heatmap).unwrap();
    assert!(heatmap.flat);
    assert!(heatmap.cells.iter().flatten().all(|cell| cell.level == 0.5));
}

#[test]
fn test_output_dir_and_rerender_overwrites() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv = write_csv(
        temp_dir.path(),
        "100_output.csv",
        "Number of Characters,A\n4,Instantly\n8,3 weeks\n",
    );
    let images = temp_dir.path().join("images");

    let first = render_infographic(&csv, Some(&images), "Quantum", &small_config()).unwrap();
    assert_eq!(first, images.join("100_output_infographic.png"));

    let mut larger = small_config();
    larger.heatmap = larger.heatmap.with_dpi(100);
    let second = render_infographic(&csv, Some(&images), "Quantum", &larger).unwrap();

    assert_eq!(first, second);
    assert_eq!(png_size(&second), (400, 300));
    assert_eq!(fs::read_dir(&images).unwrap().count(), 1);
}

#[test]
fn test_header_only_table_is_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv = write_csv(temp_dir.path(), "1_output.csv", "Number of Characters,A,B\n");

    let err = render_infographic(&csv, None, "Quantum", &small_config()).unwrap_err();

    assert!(matches!(err, RenderError::EmptyTable { rows: 0, .. }));
    assert!(!temp_dir.path().join("1_output_infographic.png").exists());
}

#[test]
fn test_bad_cell_writes_no_image() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv = write_csv(
        temp_dir.path(),
        "2_output.csv",
        "Number of Characters,A\n4,banana\n",
    );

    let err = render_infographic(&csv, None, "Quantum", &small_config()).unwrap_err();

    assert!(matches!(err, RenderError::Cell { row: 1, .. }));
    assert!(!temp_dir.path().join("2_output_infographic.png").exists());
}

#[test]
fn test_missing_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = render_infographic(
        temp_dir.path().join("nope.csv"),
        None,
        "Quantum",
        &small_config(),
    )
    .unwrap_err();

    assert!(matches!(err, RenderError::Table(_)));
}
