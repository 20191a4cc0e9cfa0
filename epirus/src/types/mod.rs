mod block;
mod jsonrpc;
mod network;

pub use block::*;
pub use jsonrpc::*;
pub use network::*;
