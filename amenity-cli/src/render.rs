//! Plain-text and JSON renderings of extracted rows.

use std::io::{self, Write};

use amenity_core::{GeoPointRecordSet, PointRecordSet};

use crate::CliError;

/// Printed instead of a report when extraction produced no rows.
pub(crate) const NO_DATA: &str = "No data to display.";

const TABLE_HEADER: [&str; 5] = ["name", "amenity", "lat", "lon", "geometry"];
const COLUMN_GAP: &str = "  ";

/// Well-known-text form of a point, `POINT (lon lat)`.
pub(crate) fn point_wkt(point: &geo::Point<f64>) -> String {
    format!("POINT ({} {})", point.x(), point.y())
}

/// Write rows as a left-aligned table, or [`NO_DATA`] when there are none.
pub(crate) fn write_table(writer: &mut dyn Write, set: &GeoPointRecordSet) -> io::Result<()> {
    if set.is_empty() {
        return writeln!(writer, "{NO_DATA}");
    }
    let rows: Vec<[String; 5]> = set
        .iter()
        .map(|(record, point)| {
            [
                record.name.clone(),
                record.amenity.clone(),
                record.lat.to_string(),
                record.lon.to_string(),
                point_wkt(point),
            ]
        })
        .collect();
    let mut widths = TABLE_HEADER.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    write_row(writer, &TABLE_HEADER, &widths)?;
    for row in &rows {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row<S: AsRef<str>>(
    writer: &mut dyn Write,
    cells: &[S],
    widths: &[usize],
) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(writer, "{}", line.trim_end())
}

/// Write rows as a pretty-printed JSON array.
pub(crate) fn write_json(writer: &mut dyn Write, records: &PointRecordSet) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, records).map_err(CliError::SerialiseRows)?;
    writeln!(writer).map_err(CliError::WriteReport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amenity_core::{PointRecord, materialize};
    use rstest::rstest;

    fn render_table(records: Vec<PointRecord>) -> String {
        let mut buffer = Vec::new();
        write_table(&mut buffer, &materialize(PointRecordSet::from(records)))
            .expect("writing to a Vec succeeds");
        String::from_utf8(buffer).expect("table is UTF-8")
    }

    #[rstest]
    fn empty_table_prints_no_data() {
        assert_eq!(render_table(Vec::new()), "No data to display.\n");
    }

    #[rstest]
    fn table_lists_columns_and_geometry() {
        let table = render_table(vec![PointRecord::new(
            "Greenwood School",
            "school",
            12.9,
            77.6,
        )]);
        let mut lines = table.lines();
        let header = lines.next().expect("header line");
        assert!(header.starts_with("name"));
        assert!(header.ends_with("geometry"));
        let row = lines.next().expect("data row");
        assert!(row.starts_with("Greenwood School  school"));
        assert!(row.ends_with("POINT (77.6 12.9)"));
        assert!(lines.next().is_none());
    }

    #[rstest]
    fn columns_align_across_rows() {
        let table = render_table(vec![
            PointRecord::new("A", "school", 1.0, 2.0),
            PointRecord::new("Longer name", "hospital", 3.0, 4.0),
        ]);
        let offsets: Vec<_> = table
            .lines()
            .map(|line| line.find("POINT").unwrap_or_else(|| line.find("geometry").unwrap_or(0)))
            .collect();
        assert!(offsets.windows(2).all(|pair| pair.first() == pair.last()));
    }

    #[rstest]
    fn json_output_is_an_array_of_rows() {
        let records = PointRecordSet::from(vec![PointRecord::new("A", "school", 1.0, 2.0)]);
        let mut buffer = Vec::new();
        write_json(&mut buffer, &records).expect("json written");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid JSON");
        assert_eq!(
            value,
            serde_json::json!([{"name": "A", "amenity": "school", "lat": 1.0, "lon": 2.0}])
        );
    }
}
