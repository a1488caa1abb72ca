// src/output.rs
use crate::analytics::density::{Analysis, Curve};
use chrono::Local;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One row per bucket: `x` followed by every curve's value.
///
/// The x column comes from the first curve; every curve needs as many points.
pub fn write_curves_to_csv(filename: &Path, curves: &[Curve]) -> io::Result<()> {
    let xs: &[f64] = curves.first().map(|c| c.xs.as_slice()).unwrap_or(&[]);
    if let Some(curve) = curves
        .iter()
        .find(|c| c.xs.len() != xs.len() || c.ys.len() != xs.len())
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "curve '{}' has {} x and {} y values, expected {}",
                curve.name,
                curve.xs.len(),
                curve.ys.len(),
                xs.len()
            ),
        ));
    }

    let mut file = BufWriter::new(File::create(filename)?);
    let names: Vec<&str> = curves.iter().map(|c| c.name.as_str()).collect();
    writeln!(file, "x,{}", names.join(","))?;

    for (i, x) in xs.iter().enumerate() {
        write!(file, "{}", x)?;
        for curve in curves {
            write!(file, ",{}", curve.ys[i])?;
        }
        writeln!(file)?;
    }
    file.flush()
}

pub fn write_summary_to_csv(filename: &Path, summary_data: &[(String, String)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}

/// Key/value rows describing an analysis, stamped with the local time
pub fn summary_rows(analysis: &Analysis) -> Vec<(String, String)> {
    let mut rows = vec![("generated_at".to_string(), Local::now().to_rfc3339())];
    for curve in &analysis.curves {
        rows.push((
            format!("integral_{}", curve.name),
            format!("{:.6}", curve.integral()),
        ));
    }
    for s in &analysis.samplers {
        rows.push((
            format!("max_deviation_{}", s.kind.name()),
            format!("{:.6}", s.max_deviation),
        ));
        if let Some(fit) = &s.fit {
            rows.push((
                format!("chi2_{}", s.kind.name()),
                format!("{:.3}", fit.statistic),
            ));
            rows.push((
                format!("chi2_dof_{}", s.kind.name()),
                fit.degrees_of_freedom.to_string(),
            ));
            rows.push((
                format!("chi2_p_{}", s.kind.name()),
                format!("{:.6}", fit.p_value),
            ));
        }
    }
    rows
}
