//! One module per message the session actor can handle.

mod add_funds;
mod confirm_transaction;
mod dismiss_message;
mod get_settings;
mod get_status;
mod refresh_balance;
mod request_airdrop;
mod send_transaction;
mod set_confirmation_signature;
mod set_node_url;
mod set_recipient_amount;
mod set_recipient_public_key;
mod shutdown;
mod store_change;
mod subscribe;

pub use add_funds::{AddFunds, AddFundsParams};
pub use confirm_transaction::{ConfirmTransactionRequest, ConfirmTransactionResponse};
pub use dismiss_message::DismissMessageRequest;
pub use get_settings::{GetSettingsRequest, GetSettingsResponse};
pub use get_status::GetStatusRequest;
pub use refresh_balance::{BalanceResponse, RefreshBalanceRequest};
pub use request_airdrop::RequestAirdropRequest;
pub use send_transaction::{SendTransactionRequest, SendTransactionResponse};
pub use set_confirmation_signature::{
    SetConfirmationSignatureRequest, SetConfirmationSignatureResponse,
};
pub use set_node_url::SetNodeUrlRequest;
pub use set_recipient_amount::SetRecipientAmountRequest;
pub use set_recipient_public_key::SetRecipientPublicKeyRequest;
pub use set_recipient_public_key::SetRecipientResponse;
pub use shutdown::{Shutdown, ShutdownRequest};
pub use subscribe::{SubscribeFunding, UnsubscribeFunding};
