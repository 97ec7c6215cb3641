pub mod server;

use url::Url;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        session_url: Url,
        locale_file: Option<String>,
    },
}
