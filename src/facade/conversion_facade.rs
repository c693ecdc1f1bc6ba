use std::collections::HashSet;

use log::{error, info};

use crate::error::ConvertError;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::archive::ArchiveExpandInput;
use crate::models::conversion::{ConversionInput, ConversionOutput, ConversionResult};
use crate::models::file::{FileKind, InputItem};
use crate::models::office::{OfficeFormat, OfficeRenderInput};
use crate::models::text::TextRenderInput;
use crate::service::archive_service::ZipArchiveService;
use crate::service::office_service::OfficeRenderService;
use crate::service::text_service::TextRenderService;
use crate::service::traits::i_service::{ArchiveServiceTrait, OfficeServiceTrait, TextServiceTrait};

pub struct ConversionFacade {
    archive_service: Box<dyn ArchiveServiceTrait>,
    office_service: Box<dyn OfficeServiceTrait>,
    text_service: Box<dyn TextServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        archive_service: Box<dyn ArchiveServiceTrait>,
        office_service: Box<dyn OfficeServiceTrait>,
        text_service: Box<dyn TextServiceTrait>,
    ) -> Self {
        ConversionFacade {
            archive_service,
            office_service,
            text_service,
        }
    }

    /// 以預設服務組裝 facade；每個批次各自建立實例，彼此不共享狀態
    pub fn with_default_services() -> Self {
        ConversionFacade::new(
            Box::new(ZipArchiveService::new()),
            Box::new(OfficeRenderService::new()),
            Box::new(TextRenderService::new()),
        )
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> ConversionOutput {
        let mut results = Vec::new();

        for item in input.items {
            if item.kind == FileKind::Zip {
                self.expand_and_convert(item, &mut results);
            } else {
                results.push(self.convert_item(item));
            }
        }

        assign_unique_names(&mut results);

        let converted = results.iter().filter(|r| r.is_ok()).count();
        info!("批次轉換完成：{}/{} 個項目成功", converted, results.len());
        ConversionOutput { results }
    }
}

impl ConversionFacade {
    // 封存檔展開失敗時整個封存項目記為一筆失敗結果，批次繼續
    fn expand_and_convert(&self, item: InputItem, results: &mut Vec<ConversionResult>) {
        let name = item.name.clone();
        match self.archive_service.expand_archive(ArchiveExpandInput {
            name: item.name,
            bytes: item.bytes,
        }) {
            Ok(output) => {
                if output.entries.is_empty() {
                    let err =
                        ConvertError::ConverterFailure("archive contains no file entries".to_string());
                    error!("封存檔 {} 沒有任何檔案項目", name);
                    results.push(ConversionResult::failed(name, &err));
                    return;
                }
                for entry in output.entries {
                    results.push(self.convert_item(entry));
                }
            }
            Err(err) => {
                error!("無法展開封存檔 {}：{}", name, err);
                results.push(ConversionResult::failed(name, &err));
            }
        }
    }

    fn convert_item(&self, item: InputItem) -> ConversionResult {
        let name = item.name.clone();
        let outcome = match item.kind {
            FileKind::Doc | FileKind::Docx => {
                let format = if item.kind == FileKind::Doc {
                    OfficeFormat::Doc
                } else {
                    OfficeFormat::Docx
                };
                self.office_service
                    .render_office(OfficeRenderInput {
                        name: item.name,
                        bytes: item.bytes,
                        format,
                    })
                    .map(|output| output.pdf_bytes)
            }
            FileKind::Txt => self
                .text_service
                .render_text(TextRenderInput {
                    name: item.name,
                    bytes: item.bytes,
                })
                .map(|output| output.pdf_bytes),
            // 不支援的類型直接失敗，不呼叫任何轉換器
            FileKind::Zip | FileKind::Unknown => Err(ConvertError::UnsupportedFormat),
        };

        match outcome {
            Ok(pdf_bytes) => {
                info!("轉換成功：{}", name);
                ConversionResult::ok(name, pdf_bytes)
            }
            Err(err) => {
                error!("轉換失敗：{}，原因：{}", name, err);
                ConversionResult::failed(name, &err)
            }
        }
    }
}

// 輸出名稱衝突處理：先出現者保留原名，之後依序加 -2、-3 後綴；
// 後綴候選若仍衝突則繼續遞增，確保整個批次的名稱集合唯一
fn assign_unique_names(results: &mut [ConversionResult]) {
    let mut used: HashSet<String> = HashSet::new();
    for result in results.iter_mut() {
        let stem = result
            .output_name
            .strip_suffix(".pdf")
            .unwrap_or(&result.output_name)
            .to_string();
        let mut candidate = format!("{}.pdf", stem);
        let mut n = 1u32;
        while used.contains(&candidate) {
            n += 1;
            candidate = format!("{}-{}.pdf", stem, n);
        }
        used.insert(candidate.clone());
        result.output_name = candidate;
    }
}
