pub mod storage;
pub mod transformers;
