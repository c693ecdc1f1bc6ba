use crate::models::file::InputItem;

#[derive(Clone)]
pub struct ArchiveExpandInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct ArchiveExpandOutput {
    pub entries: Vec<InputItem>,
}
