pub mod edit;
pub mod export;
pub mod extractor;
pub mod parse;
pub mod table;
pub mod tagger;
pub mod tokenizer;
pub mod travel;
