use crate::region::{Rect, RecognizedText};

const COLUMNS: usize = 12;

/// Parse `tesseract ... tsv` output into regions.
///
/// Columns: level, page_num, block_num, par_num, line_num, word_num,
/// left, top, width, height, conf, text. Only rows with a positive
/// confidence and non-blank text are kept; structural rows report -1.
pub fn parse_tsv(tsv: &str) -> Vec<RecognizedText> {
    let mut regions = Vec::new();

    for line in tsv.lines() {
        let parts: Vec<&str> = line.splitn(COLUMNS, '\t').collect();
        if parts.len() < COLUMNS {
            continue;
        }

        let (Ok(x), Ok(y), Ok(width), Ok(height), Ok(conf)) = (
            parts[6].parse::<i32>(),
            parts[7].parse::<i32>(),
            parts[8].parse::<i32>(),
            parts[9].parse::<i32>(),
            parts[10].trim().parse::<f32>(),
        ) else {
            // header row
            continue;
        };

        let text = parts[11].trim();
        if text.is_empty() || conf <= 0.0 {
            continue;
        }

        regions.push(RecognizedText::new(
            text,
            Rect::new(x, y, width, height),
            (conf / 100.0).clamp(0.0, 1.0),
        ));
    }

    regions
}
