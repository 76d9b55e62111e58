pub mod igp_client;
pub mod remote;

pub use igp_client::IgpClient;
pub use remote::{RemoteClient, Session};
