//! Supported JSON-RPC methods and their resolver policies.

use crate::resolver::ResolverKind;

/// Every method the proxy answers. Anything else is "method not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    BlockNumber,
    GetBlockByHash,
    GetBlockByNumber,
    GetTransactionByHash,
    GetTransactionCount,
    GetTransactionReceipt,
    SendRawTransaction,
    GetBalance,
    GetCode,
    GetStorageAt,
    Call,
    GetLogs,
    GasPrice,
    EstimateGas,
    MaxPriorityFeePerGas,
    ChainId,
    FeeHistory,
    NetVersion,
}

impl Method {
    pub const ALL: [Self; 18] = [
        Self::BlockNumber,
        Self::GetBlockByHash,
        Self::GetBlockByNumber,
        Self::GetTransactionByHash,
        Self::GetTransactionCount,
        Self::GetTransactionReceipt,
        Self::SendRawTransaction,
        Self::GetBalance,
        Self::GetCode,
        Self::GetStorageAt,
        Self::Call,
        Self::GetLogs,
        Self::GasPrice,
        Self::EstimateGas,
        Self::MaxPriorityFeePerGas,
        Self::ChainId,
        Self::FeeHistory,
        Self::NetVersion,
    ];

    /// Looks up a method by its exact (case-sensitive) JSON-RPC name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BlockNumber => "eth_blockNumber",
            Self::GetBlockByHash => "eth_getBlockByHash",
            Self::GetBlockByNumber => "eth_getBlockByNumber",
            Self::GetTransactionByHash => "eth_getTransactionByHash",
            Self::GetTransactionCount => "eth_getTransactionCount",
            Self::GetTransactionReceipt => "eth_getTransactionReceipt",
            Self::SendRawTransaction => "eth_sendRawTransaction",
            Self::GetBalance => "eth_getBalance",
            Self::GetCode => "eth_getCode",
            Self::GetStorageAt => "eth_getStorageAt",
            Self::Call => "eth_call",
            Self::GetLogs => "eth_getLogs",
            Self::GasPrice => "eth_gasPrice",
            Self::EstimateGas => "eth_estimateGas",
            Self::MaxPriorityFeePerGas => "eth_maxPriorityFeePerGas",
            Self::ChainId => "eth_chainId",
            Self::FeeHistory => "eth_feeHistory",
            Self::NetVersion => "net_version",
        }
    }

    /// Resolver policy governing this method's fan-out.
    #[must_use]
    pub const fn resolver_kind(self) -> ResolverKind {
        match self {
            Self::BlockNumber => ResolverKind::BlockNumber,
            Self::GasPrice | Self::EstimateGas | Self::MaxPriorityFeePerGas => {
                ResolverKind::GasValue
            }
            Self::GetBlockByHash
            | Self::GetBlockByNumber
            | Self::GetTransactionByHash
            | Self::GetTransactionCount
            | Self::GetTransactionReceipt
            | Self::SendRawTransaction
            | Self::GetBalance
            | Self::GetCode
            | Self::GetStorageAt
            | Self::Call
            | Self::GetLogs
            | Self::ChainId
            | Self::FeeHistory
            | Self::NetVersion => ResolverKind::Default,
        }
    }

    /// Maximum number of positional parameters.
    #[must_use]
    pub const fn max_params(self) -> usize {
        match self {
            Self::BlockNumber
            | Self::GasPrice
            | Self::MaxPriorityFeePerGas
            | Self::ChainId
            | Self::NetVersion => 0,
            Self::GetTransactionByHash
            | Self::GetTransactionReceipt
            | Self::SendRawTransaction
            | Self::GetLogs => 1,
            Self::GetBlockByHash
            | Self::GetBlockByNumber
            | Self::GetTransactionCount
            | Self::GetBalance
            | Self::GetCode
            | Self::EstimateGas => 2,
            Self::GetStorageAt | Self::Call | Self::FeeHistory => 3,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
