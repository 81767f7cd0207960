mod get;
mod set_node_url;
mod subscribe;
mod unsubscribe;

pub use get::Get;
pub use set_node_url::SetNodeUrl;
pub use subscribe::Subscribe;
pub use unsubscribe::Unsubscribe;
