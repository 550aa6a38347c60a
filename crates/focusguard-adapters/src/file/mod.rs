mod text_block_list;

pub use text_block_list::TextFileBlockList;
