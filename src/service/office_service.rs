use std::fs;
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::error::ConvertError;
use crate::models::office::{OfficeFormat, OfficeRenderInput, OfficeRenderOutput};
use crate::service::docx::DocxDocument;
use crate::service::pdf::{self, StyledLine, BODY_FONT_SIZE};
use crate::service::traits::i_service::OfficeServiceTrait;

const HEADING_FONT_SIZES: [f32; 3] = [18.0, 15.0, 13.0];
const PARAGRAPH_SPACING: f32 = 6.0;

// Office 轉換服務：DOCX 走內建解析與排版，舊式 DOC 交給 LibreOffice 子行程
pub struct OfficeRenderService {
    libreoffice: LibreOfficeService,
}

impl OfficeRenderService {
    pub fn new() -> Self {
        OfficeRenderService {
            libreoffice: LibreOfficeService::new(),
        }
    }

    pub fn with_libreoffice(libreoffice: LibreOfficeService) -> Self {
        OfficeRenderService { libreoffice }
    }

    fn render_docx(&self, input: &OfficeRenderInput) -> Result<Vec<u8>, ConvertError> {
        let document = DocxDocument::parse(&input.bytes)?;

        let mut lines: Vec<StyledLine> = Vec::new();
        for paragraph in &document.paragraphs {
            let font_size = match paragraph.heading {
                Some(level) => HEADING_FONT_SIZES[(level as usize - 1).min(2)],
                None => BODY_FONT_SIZE,
            };
            let wrapped = pdf::wrap_text(&paragraph.text, font_size);
            if wrapped.is_empty() {
                lines.push(StyledLine::with_size("", font_size, PARAGRAPH_SPACING));
                continue;
            }
            let last = wrapped.len() - 1;
            for (i, line) in wrapped.into_iter().enumerate() {
                let space_after = if i == last { PARAGRAPH_SPACING } else { 0.0 };
                lines.push(StyledLine::with_size(line, font_size, space_after));
            }
        }

        info!(
            "DOCX 解析完成：{}，共 {} 個段落",
            input.name,
            document.paragraphs.len()
        );
        Ok(pdf::compose(&input.name, &lines))
    }
}

impl Default for OfficeRenderService {
    fn default() -> Self {
        Self::new()
    }
}

impl OfficeServiceTrait for OfficeRenderService {
    fn render_office(&self, input: OfficeRenderInput) -> Result<OfficeRenderOutput, ConvertError> {
        let pdf_bytes = match input.format {
            OfficeFormat::Docx => self.render_docx(&input)?,
            OfficeFormat::Doc => self.libreoffice.render(&input.name, &input.bytes, "doc")?,
        };
        Ok(OfficeRenderOutput { pdf_bytes })
    }
}

// LibreOffice 無頭模式轉換適配器；逾時即強制結束子行程
pub struct LibreOfficeService {
    binary: String,
    timeout: Duration,
}

impl LibreOfficeService {
    pub fn new() -> Self {
        LibreOfficeService {
            binary: "libreoffice".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn render(&self, name: &str, bytes: &[u8], extension: &str) -> Result<Vec<u8>, ConvertError> {
        let dir = tempfile::tempdir()
            .map_err(|e| ConvertError::ConverterFailure(format!("temp dir: {}", e)))?;
        let input_path = dir.path().join(format!("input.{}", extension));
        fs::write(&input_path, bytes)
            .map_err(|e| ConvertError::ConverterFailure(format!("temp write: {}", e)))?;

        info!("呼叫 LibreOffice 轉換：{}", name);
        let mut child = Command::new(&self.binary)
            .args([
                "--headless",
                "--convert-to",
                "pdf",
                "--outdir",
                &dir.path().to_string_lossy(),
                &input_path.to_string_lossy(),
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    ConvertError::ConverterUnavailable(format!("{} not found", self.binary))
                } else {
                    ConvertError::ConverterFailure(e.to_string())
                }
            })?;

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        warn!("LibreOffice 轉換逾時：{}", name);
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(ConvertError::ConverterTimeout(self.timeout.as_secs()));
                    }
                    thread::sleep(Duration::from_millis(50));
                }
                Err(e) => return Err(ConvertError::ConverterFailure(e.to_string())),
            }
        };

        if !status.success() {
            let stderr = read_stderr(&mut child);
            return Err(ConvertError::ConverterFailure(format!(
                "libreoffice exited with {:?}: {}",
                status.code(),
                stderr
            )));
        }

        let pdf_path = dir.path().join("input.pdf");
        fs::read(&pdf_path)
            .map_err(|_| ConvertError::ConverterFailure("no PDF output produced".to_string()))
    }
}

impl Default for LibreOfficeService {
    fn default() -> Self {
        Self::new()
    }
}

fn read_stderr(child: &mut std::process::Child) -> String {
    use std::io::Read;
    let mut stderr = String::new();
    if let Some(ref mut pipe) = child.stderr {
        let _ = pipe.read_to_string(&mut stderr);
    }
    stderr.trim().to_string()
}
