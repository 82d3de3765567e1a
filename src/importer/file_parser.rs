// ==========================================
// Учётная система БД мебельной компании - разбор файлов импорта
// ==========================================
// Поддержка: Excel (.xlsx/.xls) и CSV (.csv)
// Результат: строки файла как отображение "колонка -> значение",
// заголовки и значения обрезаются по пробелам (в исходных
// книгах встречаются хвостовые пробелы в названиях колонок)
// ==========================================

use crate::importer::error::ImportError;
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Разбор файла импорта в сырые записи
pub trait FileParser {
    fn parse_to_raw_records(
        &self,
        file_path: &Path,
    ) -> Result<Vec<HashMap<String, String>>, ImportError>;
}

/// Выбрать парсер по расширению и разобрать файл
pub fn parse_records(file_path: &Path) -> Result<Vec<HashMap<String, String>>, ImportError> {
    let ext = file_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => CsvParser.parse_to_raw_records(file_path),
        "xlsx" | "xls" => ExcelParser.parse_to_raw_records(file_path),
        other => Err(ImportError::UnsupportedFormat(other.to_string())),
    }
}

// ==========================================
// CSV
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(
        &self,
        file_path: &Path,
    ) -> Result<Vec<HashMap<String, String>>, ImportError> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // строки разной длины не считаются ошибкой
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // полностью пустые строки пропускаются
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Excel
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(
        &self,
        file_path: &Path,
    ) -> Result<Vec<HashMap<String, String>>, ImportError> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "в книге нет ни одного листа".to_string(),
            ));
        }

        // данные всегда на первом листе
        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("в листе нет строк".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_csv_parse_with_trailing_spaces_in_header() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Название цеха,Тип цеха,Количество человек для производства ").unwrap();
        writeln!(file, "Цех сборки,Сборочный,12").unwrap();
        writeln!(file, ",,").unwrap();
        file.flush().unwrap();

        let records = parse_records(file.path()).expect("разбор CSV");
        assert_eq!(records.len(), 1, "пустая строка должна быть пропущена");
        assert_eq!(
            records[0].get("Количество человек для производства").map(String::as_str),
            Some("12"),
            "заголовок должен быть обрезан по пробелам"
        );
    }

    #[test]
    fn test_missing_file() {
        let result = parse_records(Path::new("/нет/такого/файла.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = parse_records(Path::new("data.pdf"));
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
