#[derive(Clone)]
pub struct TextRenderInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct TextRenderOutput {
    pub pdf_bytes: Vec<u8>,
}
