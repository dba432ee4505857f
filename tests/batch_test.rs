use anyhow::Result;
use scan_weigh::{render_table, run_batch, OnInvalid, WeightFormat};
use std::io::BufReader;
use tempfile::TempDir;

#[test]
fn test_batch_from_file_renders_tally() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scans.txt");
    std::fs::write(&path, "1234567001289\n1234567001289\n]C1011234567890123431030012503\n??\n")?;

    let report = run_batch(BufReader::new(std::fs::File::open(&path)?), OnInvalid::Skip)?;
    assert_eq!(report.session.len(), 3);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line, 4);

    let table = render_table(&report.session, &WeightFormat::default());
    assert!(table.lines().last().unwrap_or("").ends_with("1.506 Kgs"));
    Ok(())
}
