use std::path::Path;

// 封閉的檔案類型集合：分類僅依副檔名（不區分大小寫），不認識的副檔名為 Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Doc,
    Docx,
    Txt,
    Zip,
    Unknown,
}

impl FileKind {
    pub fn from_name(name: &str) -> FileKind {
        let ext = Path::new(name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            Some("doc") => FileKind::Doc,
            Some("docx") => FileKind::Docx,
            Some("txt") => FileKind::Txt,
            Some("zip") => FileKind::Zip,
            _ => FileKind::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputItem {
    pub name: String,
    pub bytes: Vec<u8>,
    pub kind: FileKind,
}

impl InputItem {
    /// 建立輸入項目並同時完成類型分類
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let kind = FileKind::from_name(&name);
        InputItem { name, bytes, kind }
    }

    /// 以指定類型建立項目（封存展開時用於將內層壓縮檔改標為 Unknown）
    pub fn with_kind(name: impl Into<String>, bytes: Vec<u8>, kind: FileKind) -> Self {
        InputItem {
            name: name.into(),
            bytes,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(FileKind::from_name("report.doc"), FileKind::Doc);
        assert_eq!(FileKind::from_name("report.docx"), FileKind::Docx);
        assert_eq!(FileKind::from_name("notes.txt"), FileKind::Txt);
        assert_eq!(FileKind::from_name("bundle.zip"), FileKind::Zip);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(FileKind::from_name("REPORT.DOCX"), FileKind::Docx);
        assert_eq!(FileKind::from_name("Notes.TxT"), FileKind::Txt);
        assert_eq!(FileKind::from_name("ARCHIVE.Zip"), FileKind::Zip);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(FileKind::from_name("image.png"), FileKind::Unknown);
        assert_eq!(FileKind::from_name("noextension"), FileKind::Unknown);
        assert_eq!(FileKind::from_name("archive.gz"), FileKind::Unknown);
    }

    #[test]
    fn test_classify_nested_path() {
        assert_eq!(FileKind::from_name("folder/sub/notes.txt"), FileKind::Txt);
    }

    #[test]
    fn test_input_item_classifies_on_construction() {
        let item = InputItem::new("a.docx", vec![1, 2, 3]);
        assert_eq!(item.kind, FileKind::Docx);
        assert_eq!(item.name, "a.docx");
        assert_eq!(item.bytes, vec![1, 2, 3]);
    }
}
