use std::io::{self, Cursor, Write};

use chrono::Local;
use log::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::models::conversion::ConversionResult;

/// 將批次中所有成功的 PDF 打包為單一 ZIP 緩衝區，保留唯一化後的輸出名稱
pub fn package_results(results: &[ConversionResult]) -> io::Result<Vec<u8>> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut zip_buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut zip_buffer));
    let mut packed = 0usize;
    for result in results {
        if let Some(ref pdf_bytes) = result.pdf_bytes {
            zip.start_file(&result.output_name, options)?;
            zip.write_all(pdf_bytes)?;
            packed += 1;
        }
    }
    zip.finish()?;

    info!("打包完成，共 {} 個 PDF，大小：{} 位元組", packed, zip_buffer.len());
    Ok(zip_buffer)
}

pub fn package_file_name() -> String {
    format!("converted_{}.zip", Local::now().format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conversion::ConversionResult;
    use crate::error::ConvertError;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_package_contains_only_successful_results() {
        let results = vec![
            ConversionResult::ok("a.txt", b"%PDF-a".to_vec()),
            ConversionResult::failed("b.bin", &ConvertError::UnsupportedFormat),
            ConversionResult::ok("c.txt", b"%PDF-c".to_vec()),
        ];

        let buffer = package_results(&results).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(buffer)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut names = Vec::new();
        for i in 0..archive.len() {
            names.push(archive.by_index(i).unwrap().name().to_string());
        }
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);

        let mut contents = Vec::new();
        archive
            .by_name("a.pdf")
            .unwrap()
            .read_to_end(&mut contents)
            .unwrap();
        assert_eq!(contents, b"%PDF-a");
    }

    #[test]
    fn test_package_file_name_shape() {
        let name = package_file_name();
        assert!(name.starts_with("converted_"));
        assert!(name.ends_with(".zip"));
    }
}
