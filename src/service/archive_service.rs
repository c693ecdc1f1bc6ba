use std::io::{Cursor, Read};

use log::info;
use zip::ZipArchive;

use crate::error::ConvertError;
use crate::models::archive::{ArchiveExpandInput, ArchiveExpandOutput};
use crate::models::file::{FileKind, InputItem};
use crate::service::traits::i_service::ArchiveServiceTrait;

pub struct ZipArchiveService;

impl ZipArchiveService {
    pub fn new() -> Self {
        ZipArchiveService
    }
}

impl Default for ZipArchiveService {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveServiceTrait for ZipArchiveService {
    fn expand_archive(&self, input: ArchiveExpandInput) -> Result<ArchiveExpandOutput, ConvertError> {
        let mut archive = ZipArchive::new(Cursor::new(&input.bytes))
            .map_err(|e| ConvertError::ArchiveCorrupt(e.to_string()))?;

        let mut entries = Vec::new();
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| ConvertError::ArchiveCorrupt(e.to_string()))?;
            let name = file.name().to_string();

            // 跳過目錄項目
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)
                .map_err(|e| ConvertError::ArchiveCorrupt(e.to_string()))?;

            // 內層壓縮檔不遞迴展開，改標為 Unknown
            let item = match FileKind::from_name(&name) {
                FileKind::Zip => InputItem::with_kind(name, contents, FileKind::Unknown),
                kind => InputItem::with_kind(name, contents, kind),
            };
            entries.push(item);
        }

        info!("展開封存檔：{}，共 {} 個檔案項目", input.name, entries.len());
        Ok(ArchiveExpandOutput { entries })
    }
}
