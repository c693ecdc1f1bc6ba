use printpdf::text::TextItem;
use printpdf::{BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextMatrix};

pub const PAGE_WIDTH_MM: f32 = 215.9;
pub const PAGE_HEIGHT_MM: f32 = 279.4;
pub const MARGIN_MM: f32 = 20.0;
pub const BODY_FONT_SIZE: f32 = 11.0;

const MM_TO_PT: f32 = 2.834_646;
const LINE_SPACING: f32 = 1.3;

// 一行已排版的輸出文字；字級由段落樣式決定
#[derive(Debug, Clone)]
pub struct StyledLine {
    pub text: String,
    pub font_size: f32,
    pub space_after: f32,
}

impl StyledLine {
    pub fn body(text: impl Into<String>) -> Self {
        StyledLine {
            text: text.into(),
            font_size: BODY_FONT_SIZE,
            space_after: 0.0,
        }
    }

    pub fn with_size(text: impl Into<String>, font_size: f32, space_after: f32) -> Self {
        StyledLine {
            text: text.into(),
            font_size,
            space_after,
        }
    }
}

/// 每行可容納的字元數上限（平均字寬近似為字級的 0.6 倍）
pub fn max_chars_per_line(font_size: f32) -> usize {
    let usable_pt = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) * MM_TO_PT;
    ((usable_pt / (font_size * 0.6)) as usize).max(1)
}

/// 將一段文字依行寬斷行；保留空白行，展開 tab，過長的單字硬切
pub fn wrap_text(text: &str, font_size: f32) -> Vec<String> {
    let limit = max_chars_per_line(font_size);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let expanded = raw.replace('\t', "    ");
        if expanded.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        if expanded.chars().count() <= limit {
            lines.push(expanded);
            continue;
        }

        let mut current = String::new();
        for word in expanded.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if current.is_empty() {
                current = break_long_word(word, limit, &mut lines);
            } else if current_len + 1 + word_len <= limit {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = break_long_word(word, limit, &mut lines);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn break_long_word(word: &str, limit: usize, lines: &mut Vec<String>) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut start = 0;
    while chars.len() - start > limit {
        lines.push(chars[start..start + limit].iter().collect());
        start += limit;
    }
    chars[start..].iter().collect()
}

/// 將排版後的行流式輸出為 Letter 頁面的 PDF 位元組
pub fn compose(title: &str, lines: &[StyledLine]) -> Vec<u8> {
    let mut doc = PdfDocument::new(title);

    let page_height_pt = PAGE_HEIGHT_MM * MM_TO_PT;
    let top = page_height_pt - MARGIN_MM * MM_TO_PT;
    let bottom = MARGIN_MM * MM_TO_PT;
    let left = MARGIN_MM * MM_TO_PT;

    let mut pages: Vec<Vec<Op>> = Vec::new();
    let mut ops: Vec<Op> = vec![Op::StartTextSection];
    let mut cursor = top;
    let mut current_size = 0.0f32;
    let mut lines_on_page = 0usize;

    for line in lines {
        let advance = line.font_size * LINE_SPACING;
        if lines_on_page > 0 && cursor - advance < bottom {
            ops.push(Op::EndTextSection);
            pages.push(std::mem::take(&mut ops));
            ops.push(Op::StartTextSection);
            cursor = top;
            current_size = 0.0;
            lines_on_page = 0;
        }

        if (line.font_size - current_size).abs() > f32::EPSILON {
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(line.font_size),
                font: BuiltinFont::Helvetica,
            });
            current_size = line.font_size;
        }

        cursor -= advance;
        if !line.text.is_empty() {
            ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(left), Pt(cursor)),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line.text.clone())],
                font: BuiltinFont::Helvetica,
            });
        }
        cursor -= line.space_after;
        lines_on_page += 1;
    }

    ops.push(Op::EndTextSection);
    pages.push(ops);

    for page_ops in pages {
        doc.pages
            .push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), page_ops));
    }

    let mut warnings = Vec::new();
    doc.save(&PdfSaveOptions::default(), &mut warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_unchanged() {
        let lines = wrap_text("hello world", BODY_FONT_SIZE);
        assert_eq!(lines, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_wrap_preserves_blank_lines() {
        let lines = wrap_text("a\n\nb", BODY_FONT_SIZE);
        assert_eq!(lines, vec!["a".to_string(), String::new(), "b".to_string()]);
    }

    #[test]
    fn test_wrap_expands_tabs() {
        let lines = wrap_text("a\tb", BODY_FONT_SIZE);
        assert_eq!(lines, vec!["a    b".to_string()]);
    }

    #[test]
    fn test_wrap_long_line_respects_limit() {
        let limit = max_chars_per_line(BODY_FONT_SIZE);
        let text = "word ".repeat(60);
        let lines = wrap_text(text.trim(), BODY_FONT_SIZE);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= limit);
        }
    }

    #[test]
    fn test_wrap_hard_breaks_oversized_word() {
        let limit = max_chars_per_line(BODY_FONT_SIZE);
        let word = "x".repeat(limit * 2 + 3);
        let lines = wrap_text(&word, BODY_FONT_SIZE);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), limit);
        assert_eq!(lines[1].chars().count(), limit);
        assert_eq!(lines[2].chars().count(), 3);
    }

    #[test]
    fn test_compose_produces_pdf_bytes() {
        let lines = vec![StyledLine::body("hello")];
        let bytes = compose("test", &lines);
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_compose_paginates_long_content() {
        let lines: Vec<StyledLine> = (0..200)
            .map(|i| StyledLine::body(format!("line {}", i)))
            .collect();
        let bytes = compose("long", &lines);
        assert!(bytes.starts_with(b"%PDF"));
        // 200 行 11pt 內文必然超過一頁 Letter 的可用高度
        assert!(bytes.len() > 1000);
    }
}
