use serde::{Deserialize, Serialize};

/// Basic representation of a Solana instruction.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolanaInstruction {
    pub program_id: String,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub data: String,
}

/// Inner instruction grouping mirroring the Solana RPC payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InnerInstruction {
    pub index: usize,
    #[serde(default)]
    pub instructions: Vec<SolanaInstruction>,
}

/// Simplified transaction representation consumed by the decoder.
/// Address lookup tables are assumed to be resolved upstream; the account
/// indices inside route steps are only meaningful after that resolution.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolanaTransaction {
    pub slot: u64,
    pub signature: String,
    #[serde(default)]
    pub block_time: u64,
    #[serde(default)]
    pub signers: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<SolanaInstruction>,
    #[serde(default)]
    pub inner_instructions: Vec<InnerInstruction>,
    #[serde(default)]
    pub log_messages: Vec<String>,
}

/// Minimal instruction representation with bookkeeping indices.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedInstruction {
    pub program_id: String,
    pub outer_index: usize,
    pub inner_index: Option<usize>,
    pub data: SolanaInstruction,
}
