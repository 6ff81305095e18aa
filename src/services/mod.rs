// Services module

pub mod block_store;
pub mod settings;
