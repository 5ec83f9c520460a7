//! JSON-RPC tool protocol: wire types, server handler, tool table and client.

pub mod client;
pub mod server;
pub mod tools;
pub mod types;

pub use client::{RpcClient, RpcClientError};
pub use types::{RpcError, RpcRequest, RpcResponse, ToolCallResult, ToolContent, ToolDefinition};
