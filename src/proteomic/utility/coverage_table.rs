use std::io;
use std::path::Path;

use crate::proteomic::models::coverage::CoverageBucket;
use crate::proteomic::utility::TableError;

pub const HEADER: [&str; 5] = ["start_mz", "stop_mz", "observations", "total", "fraction"];

pub fn write_buckets<W: io::Write>(writer: W, buckets: &[CoverageBucket], path: &str) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if let Err(err) = csv_writer.write_record(&HEADER) {
        return Err(TableError::Write { path: path.to_owned(), source: err });
    }
    for bucket in buckets.iter() {
        let row = [
            bucket.get_start_mz().to_string(),
            bucket.get_stop_mz().to_string(),
            bucket.get_number_of_observations().to_string(),
            bucket.get_total_number_of_observations().to_string(),
            bucket.get_fraction().to_string()
        ];
        if let Err(err) = csv_writer.write_record(&row) {
            return Err(TableError::Write { path: path.to_owned(), source: err });
        }
    }
    return match csv_writer.flush() {
        Ok(_) => Ok(()),
        Err(err) => Err(TableError::Io { path: path.to_owned(), source: err })
    };
}

pub fn write_buckets_to_file<P: AsRef<Path>>(coverage_file_path: P, buckets: &[CoverageBucket]) -> Result<(), TableError> {
    let path = coverage_file_path.as_ref().display().to_string();
    let coverage_file = match std::fs::File::create(coverage_file_path.as_ref()) {
        Ok(file) => file,
        Err(err) => return Err(TableError::Io { path: path, source: err })
    };
    return write_buckets(io::BufWriter::new(coverage_file), buckets, &path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proteomic::models::coverage::MzWindow;

    #[test]
    fn test_write_buckets() {
        let buckets = vec![
            CoverageBucket::new(MzWindow::new(200.0, 800.0).unwrap(), 2, 4).unwrap(),
            CoverageBucket::new(MzWindow::new(800.0, 1200.5).unwrap(), 0, 0).unwrap()
        ];
        let mut buffer: Vec<u8> = Vec::new();
        write_buckets(&mut buffer, &buckets, "memory").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "start_mz,stop_mz,observations,total,fraction\n200,800,2,4,0.5\n800,1200.5,0,0,0\n");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let coverage_file_path = temp_dir.path().join("coverage.csv");
        write_buckets_to_file(&coverage_file_path, &[CoverageBucket::new(MzWindow::new(400.0, 425.0).unwrap(), 1, 4).unwrap()]).unwrap();
        let content = std::fs::read_to_string(&coverage_file_path).unwrap();
        assert!(content.ends_with("400,425,1,4,0.25\n"));
    }
}
